pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod effects;
pub(crate) mod logging;
pub(crate) mod ui;

pub use app::run_app;
