use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use eframe::egui;
use translate_core::AppViewModel;
use translate_engine::CommandTranslator;
use translate_logging::{translate_info, translate_warn};

use super::config::{config_path, read_config, AppConfig};
use super::controller::Controller;
use super::logging;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let loaded = read_config(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    logging::initialize(config.log_destination, config.log_level);
    report_config(&path, &loaded);

    let settings = config.command_settings();
    translate_info!(
        "Translator: {} {:?} (timeout {:?})",
        settings.program.display(),
        settings.args_for("<prompt>"),
        settings.timeout
    );
    let translator = Arc::new(CommandTranslator::new(settings));
    let controller =
        Controller::new(&config, translator).context("failed to start translation engine")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::WINDOW_TITLE)
            .with_inner_size(ui::constants::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(TranslatorApp::new(cc, controller))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))?;

    translate_info!("Window closed");
    Ok(())
}

fn report_config(path: &Path, loaded: &anyhow::Result<Option<AppConfig>>) {
    match loaded {
        Ok(Some(_)) => translate_info!("Loaded config from {}", path.display()),
        Ok(None) => translate_info!("No config at {}; using defaults", path.display()),
        Err(err) => translate_warn!("{:#}; using defaults", err),
    }
}

struct TranslatorApp {
    controller: Controller,
    view: AppViewModel,
    input: String,
}

impl TranslatorApp {
    fn new(cc: &eframe::CreationContext<'_>, controller: Controller) -> Self {
        ui::fonts::install_cjk_fallback(&cc.egui_ctx);
        let view = controller.view();
        Self {
            input: view.input.clone(),
            controller,
            view,
        }
    }
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if let Some(view) = self.controller.tick(now) {
            // Only a swap rewrites the input from the state side.
            if view.input != self.input {
                self.input = view.input.clone();
            }
            self.view = view;
        }

        let frame_input = ui::render::render(ctx, &self.view, &mut self.input);
        if frame_input.input_changed {
            self.controller.input_changed(self.input.clone(), now);
        }
        if frame_input.swap_clicked {
            self.controller.swap_direction(now);
        }
        if frame_input.input_changed || frame_input.swap_clicked {
            ctx.request_repaint();
        }

        ctx.request_repaint_after(self.controller.next_wakeup(Instant::now()));
    }
}
