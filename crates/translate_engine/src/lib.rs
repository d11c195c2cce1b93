//! Translator engine: runs the external model off the UI thread and hands
//! results back through a polled inbox.
mod command;
mod engine;
mod extract;
mod translator;
mod types;

pub use command::{python_for_virtual_env, CommandSettings, DEFAULT_EOS_TOKEN, DEFAULT_MODEL};
pub use engine::EngineHandle;
pub use extract::{extract_translation, strip_generation_stats, RESPONSE_DELIMITER};
pub use translator::{CommandTranslator, Translator};
pub use types::{AttemptId, EngineEvent, TranslateError};
