use crate::AttemptId;

/// Payload of a result message posted by a background translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input pane; carries the full buffer contents.
    InputChanged(String),
    /// The debounce timer fired without being re-armed.
    DebounceElapsed,
    /// A background translation finished and its result was drained.
    TranslationFinished {
        attempt_id: AttemptId,
        outcome: TranslationOutcome,
    },
    /// User clicked the direction swap button.
    SwapDirectionClicked,
}
