use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "mlx-community/plamo-2-translate";
pub const DEFAULT_EOS_TOKEN: &str = "<|plamo:op|>";

/// How the external translator is invoked.
///
/// The final argument list is always
/// `<prefix_args..> --model <model> --extra-eos-token <eos_token> --prompt <prompt>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    pub program: PathBuf,
    pub prefix_args: Vec<String>,
    pub model: String,
    pub eos_token: String,
    /// `None` waits on the process indefinitely.
    pub timeout: Option<Duration>,
    /// Drop mlx_lm statistics lines from stdout before extraction.
    pub strip_generation_stats: bool,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            program: python_for_virtual_env(std::env::var_os("VIRTUAL_ENV").as_deref()),
            prefix_args: vec![
                "-m".to_string(),
                "mlx_lm".to_string(),
                "generate".to_string(),
            ],
            model: DEFAULT_MODEL.to_string(),
            eos_token: DEFAULT_EOS_TOKEN.to_string(),
            timeout: None,
            strip_generation_stats: false,
        }
    }
}

impl CommandSettings {
    pub fn args_for(&self, prompt: &str) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.extend([
            "--model".to_string(),
            self.model.clone(),
            "--extra-eos-token".to_string(),
            self.eos_token.clone(),
            "--prompt".to_string(),
            prompt.to_string(),
        ]);
        args
    }
}

/// Interpreter of the active virtualenv, falling back to `python` on PATH.
pub fn python_for_virtual_env(virtual_env: Option<&OsStr>) -> PathBuf {
    match virtual_env {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join("bin").join("python"),
        _ => PathBuf::from("python"),
    }
}
