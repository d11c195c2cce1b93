use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use translate_logging::{preview, translate_info, translate_warn};

use crate::translator::Translator;
use crate::{AttemptId, EngineEvent};

enum EngineCommand {
    Translate { attempt_id: AttemptId, prompt: String },
}

/// Handle owned by the UI thread.
///
/// `submit` never blocks: each attempt becomes its own task on a runtime
/// owned by a dedicated engine thread. Attempts are neither capped nor
/// cancelled, and their results land in the inbox in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(translator: Arc<dyn Translator>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("translate-worker")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("translate-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let translator = translator.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(translator.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, attempt_id: AttemptId, prompt: impl Into<String>) {
        let prompt = prompt.into();
        translate_info!(
            "Submitting attempt_id={} prompt=\"{}\"",
            attempt_id,
            preview(&prompt, 40)
        );
        if self
            .cmd_tx
            .send(EngineCommand::Translate { attempt_id, prompt })
            .is_err()
        {
            translate_warn!("Engine thread is gone; attempt_id={} dropped", attempt_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Takes every event currently in the inbox without blocking.
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

async fn handle_command(
    translator: &dyn Translator,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Translate { attempt_id, prompt } => {
            let result = translator.translate(&prompt).await;
            match &result {
                Ok(text) => translate_info!(
                    "attempt_id={} finished ({} chars)",
                    attempt_id,
                    text.chars().count()
                ),
                Err(err) => translate_warn!("attempt_id={} failed: {}", attempt_id, err),
            }
            let _ = event_tx.send(EngineEvent::Completed { attempt_id, result });
        }
    }
}
