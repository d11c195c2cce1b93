fn main() -> anyhow::Result<()> {
    translate_app::run_app()
}
