use thiserror::Error;

pub type AttemptId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Completed {
        attempt_id: AttemptId,
        result: Result<String, TranslateError>,
    },
}

/// Why a single translation attempt produced no text.
///
/// The `Display` form is what ends up in the output pane.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The translator ran and exited non-zero.
    #[error("翻訳エラー: {stderr}")]
    ProcessFailure { stderr: String },
    /// The translator could not be started or awaited.
    #[error("エラー: {0}")]
    InvocationFailure(String),
}
