use std::sync::Once;

use pretty_assertions::assert_eq;
use translate_core::{
    update, AppState, Direction, Effect, Msg, Status, SupersededPolicy, TranslationOutcome,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(translate_logging::initialize_for_tests);
}

fn type_and_fire(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::DebounceElapsed)
}

fn finish(state: AppState, attempt_id: u64, outcome: TranslationOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::TranslationFinished {
            attempt_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn every_edit_rearms_the_debouncer() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::InputChanged("こ".to_string()));
    assert_eq!(effects, vec![Effect::ArmDebounce]);

    let (mut state, effects) = update(state, Msg::InputChanged("こん".to_string()));
    assert_eq!(effects, vec![Effect::ArmDebounce]);
    assert_eq!(state.view().input, "こん");
    assert_eq!(state.view().status, Status::Idle);
    assert!(state.consume_dirty());
}

#[test]
fn identical_edit_rearms_without_changing_state() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("猫".to_string()));
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::InputChanged("猫".to_string()));

    assert_eq!(effects, vec![Effect::ArmDebounce]);
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}

#[test]
fn fire_snapshots_trimmed_input_and_starts_translation() {
    init_logging();
    let (mut state, effects) = type_and_fire(AppState::new(), "  こんにちは \n");

    assert_eq!(
        effects,
        vec![Effect::StartTranslation {
            attempt_id: 1,
            prompt: "こんにちは".to_string(),
        }]
    );
    assert_eq!(state.view().status, Status::Running);
    assert_eq!(state.latest_issued(), Some(1));
    assert!(state.consume_dirty());
}

#[test]
fn fire_on_empty_input_clears_output_without_effects() {
    init_logging();
    let (state, _) = type_and_fire(AppState::new(), "test");
    let state = finish(state, 1, TranslationOutcome::Success("テスト".to_string()));
    assert_eq!(state.view().output, "テスト");

    let (mut state, effects) = type_and_fire(state, "   \n");

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.output, "");
    assert_eq!(view.status, Status::Idle);
    assert_eq!(state.latest_issued(), Some(1));
    assert!(state.consume_dirty());
}

#[test]
fn success_result_shows_text_and_done() {
    init_logging();
    let (state, _) = type_and_fire(AppState::new(), "こんにちは");
    let state = finish(state, 1, TranslationOutcome::Success("Hello".to_string()));

    let view = state.view();
    assert_eq!(view.output, "Hello");
    assert_eq!(view.status, Status::Done);
}

#[test]
fn error_result_shows_message_and_error_status() {
    init_logging();
    let (state, _) = type_and_fire(AppState::new(), "test");
    let state = finish(
        state,
        1,
        TranslationOutcome::Error("翻訳エラー: model not found".to_string()),
    );

    let view = state.view();
    assert_eq!(view.output, "翻訳エラー: model not found");
    assert_eq!(view.status, Status::Error);
}

#[test]
fn last_completed_policy_lets_slow_older_attempt_win() {
    init_logging();
    let (state, effects) = type_and_fire(AppState::new(), "A");
    assert!(matches!(
        effects.as_slice(),
        [Effect::StartTranslation { attempt_id: 1, .. }]
    ));
    let (state, effects) = type_and_fire(state, "B");
    assert!(matches!(
        effects.as_slice(),
        [Effect::StartTranslation { attempt_id: 2, .. }]
    ));

    // B completes first, then the slow A.
    let state = finish(state, 2, TranslationOutcome::Success("b".to_string()));
    let state = finish(state, 1, TranslationOutcome::Success("a".to_string()));

    assert_eq!(state.view().output, "a");
    assert_eq!(state.view().status, Status::Done);
}

#[test]
fn latest_issued_policy_drops_superseded_results() {
    init_logging();
    let state = AppState::with_policy(SupersededPolicy::LatestIssued);
    let (state, _) = type_and_fire(state, "A");
    let (state, _) = type_and_fire(state, "B");

    let state = finish(state, 2, TranslationOutcome::Success("b".to_string()));
    let mut state = finish(state, 1, TranslationOutcome::Error("late".to_string()));
    assert!(state.consume_dirty());

    assert_eq!(state.view().output, "b");
    assert_eq!(state.view().status, Status::Done);
    assert!(!state.consume_dirty());
}

#[test]
fn en_to_ja_prompt_carries_instruction() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SwapDirectionClicked);
    assert_eq!(state.view().direction, Direction::EnToJa);

    let (_state, effects) = type_and_fire(state, "Good morning");
    assert_eq!(
        effects,
        vec![Effect::StartTranslation {
            attempt_id: 1,
            prompt: "Translate to Japanese: Good morning".to_string(),
        }]
    );
}

#[test]
fn swap_exchanges_panes_and_rearms() {
    init_logging();
    let (state, _) = type_and_fire(AppState::new(), "こんにちは");
    let state = finish(state, 1, TranslationOutcome::Success("Hello".to_string()));

    let (state, effects) = update(state, Msg::SwapDirectionClicked);

    assert_eq!(effects, vec![Effect::ArmDebounce]);
    let view = state.view();
    assert_eq!(view.direction, Direction::EnToJa);
    assert_eq!(view.input, "Hello");
    assert_eq!(view.output, "こんにちは");
}
