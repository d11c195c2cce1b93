use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use translate_engine::{EngineEvent, EngineHandle, TranslateError, Translator};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(translate_logging::initialize_for_tests);
}

/// Replies after a per-prompt delay and records the prompts it saw.
#[derive(Default)]
struct ScriptedTranslator {
    seen: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, prompt: &str) -> Result<String, TranslateError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        let (delay, reply) = match prompt {
            "slow" => (Duration::from_millis(400), Ok("A".to_string())),
            "fast" => (Duration::from_millis(20), Ok("B".to_string())),
            other => (
                Duration::ZERO,
                Err(TranslateError::InvocationFailure(format!("no script for {other}"))),
            ),
        };
        tokio::time::sleep(delay).await;
        reply
    }
}

fn collect(engine: &EngineHandle, expected: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < expected && Instant::now() < deadline {
        events.extend(engine.drain());
        std::thread::sleep(Duration::from_millis(10));
    }
    events
}

#[test]
fn empty_inbox_drains_to_nothing() {
    init_logging();
    let engine = EngineHandle::new(Arc::new(ScriptedTranslator::default())).unwrap();
    assert!(engine.drain().is_empty());
    assert!(engine.try_recv().is_none());
}

#[test]
fn overlapping_attempts_arrive_in_completion_order() {
    init_logging();
    let translator = Arc::new(ScriptedTranslator::default());
    let engine = EngineHandle::new(translator.clone()).unwrap();

    engine.submit(1, "slow");
    engine.submit(2, "fast");

    let events = collect(&engine, 2);
    assert_eq!(
        events,
        vec![
            EngineEvent::Completed {
                attempt_id: 2,
                result: Ok("B".to_string()),
            },
            EngineEvent::Completed {
                attempt_id: 1,
                result: Ok("A".to_string()),
            },
        ]
    );
    let mut seen = translator.seen.lock().unwrap().clone();
    seen.sort();
    assert_eq!(seen, vec!["fast".to_string(), "slow".to_string()]);
}

#[test]
fn failures_are_delivered_as_events() {
    init_logging();
    let engine = EngineHandle::new(Arc::new(ScriptedTranslator::default())).unwrap();

    engine.submit(7, "unknown");

    let events = collect(&engine, 1);
    assert_eq!(
        events,
        vec![EngineEvent::Completed {
            attempt_id: 7,
            result: Err(TranslateError::InvocationFailure(
                "no script for unknown".to_string()
            )),
        }]
    );
}
