//! Translator core: pure state machine, debounce timer and poll clock.
//!
//! Nothing in this crate spawns threads or reads the wall clock; callers pass
//! `Instant`s in, which keeps the trigger loop deterministic under test.
mod debounce;
mod effect;
mod msg;
mod poll;
mod state;
mod update;
mod view_model;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use effect::Effect;
pub use msg::{Msg, TranslationOutcome};
pub use poll::{PollClock, DEFAULT_POLL_INTERVAL};
pub use state::{AppState, AttemptId, Direction, Status, SupersededPolicy};
pub use update::update;
pub use view_model::AppViewModel;
