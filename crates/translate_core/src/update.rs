use translate_logging::{translate_debug, translate_info};

use crate::{AppState, Effect, Msg, Status, SupersededPolicy, TranslationOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // Every edit re-arms, even when the text is unchanged (e.g. an
            // undo that lands on the same buffer).
            state.set_input(text);
            vec![Effect::ArmDebounce]
        }
        Msg::DebounceElapsed => {
            let snapshot = state.snapshot();
            if snapshot.is_empty() {
                translate_debug!("Debounce fired on empty input; clearing output");
                state.clear_output();
                Vec::new()
            } else {
                let prompt = state.direction().prompt_for(&snapshot);
                let attempt_id = state.issue_attempt();
                translate_info!(
                    "Debounce fired: attempt_id={} input_chars={}",
                    attempt_id,
                    snapshot.chars().count()
                );
                vec![Effect::StartTranslation { attempt_id, prompt }]
            }
        }
        Msg::TranslationFinished {
            attempt_id,
            outcome,
        } => {
            let superseded = state.policy() == SupersededPolicy::LatestIssued
                && state.latest_issued() != Some(attempt_id);
            if superseded {
                translate_info!(
                    "Dropping result of superseded attempt_id={} (latest={:?})",
                    attempt_id,
                    state.latest_issued()
                );
            } else {
                match outcome {
                    TranslationOutcome::Success(text) => state.show_result(text, Status::Done),
                    TranslationOutcome::Error(text) => state.show_result(text, Status::Error),
                }
            }
            Vec::new()
        }
        Msg::SwapDirectionClicked => {
            state.swap_direction();
            vec![Effect::ArmDebounce]
        }
    };

    (state, effects)
}
