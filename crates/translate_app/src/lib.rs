//! Desktop shell for the debounced translator: eframe window, config file,
//! logging, and the UI-thread controller that ties core and engine together.
mod platform;

pub use platform::config::{config_path, read_config, AppConfig, CONFIG_ENV_VAR};
pub use platform::controller::Controller;
pub use platform::logging::{LogDestination, LogLevel};
pub use platform::run_app;
