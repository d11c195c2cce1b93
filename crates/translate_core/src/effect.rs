use crate::AttemptId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any pending debounce timer and arm a fresh one.
    ArmDebounce,
    /// Run the external translator for `prompt` in the background.
    StartTranslation { attempt_id: AttemptId, prompt: String },
}
