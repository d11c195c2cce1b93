use std::io;
use std::sync::Arc;
use std::time::Instant;

use translate_core::{Debouncer, Effect, Msg, TranslationOutcome};
use translate_engine::{EngineEvent, EngineHandle, Translator};

/// Executes core effects: timer effects against the UI-owned debouncer,
/// translations against the background engine.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(translator: Arc<dyn Translator>) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(translator)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>, debouncer: &mut Debouncer, now: Instant) {
        for effect in effects {
            match effect {
                Effect::ArmDebounce => debouncer.arm(now),
                Effect::StartTranslation { attempt_id, prompt } => {
                    self.engine.submit(attempt_id, prompt);
                }
            }
        }
    }

    /// Non-blocking drain of the result inbox, as core messages.
    pub fn drain(&self) -> Vec<Msg> {
        self.engine.drain().into_iter().map(map_event).collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Completed { attempt_id, result } => Msg::TranslationFinished {
            attempt_id,
            outcome: match result {
                Ok(text) => TranslationOutcome::Success(text),
                Err(err) => TranslationOutcome::Error(err.to_string()),
            },
        },
    }
}
