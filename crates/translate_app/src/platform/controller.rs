use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use translate_core::{update, AppState, AppViewModel, Debouncer, Msg, PollClock};
use translate_engine::Translator;

use super::config::AppConfig;
use super::effects::EffectRunner;

/// UI-thread side of the trigger loop.
///
/// Owns the display state, the single debounce slot and the poll schedule.
/// Background tasks only ever reach it through the engine inbox, which is
/// drained in [`Controller::tick`].
pub struct Controller {
    state: AppState,
    debouncer: Debouncer,
    poll: PollClock,
    effects: EffectRunner,
}

impl Controller {
    pub fn new(config: &AppConfig, translator: Arc<dyn Translator>) -> io::Result<Self> {
        Ok(Self {
            state: AppState::with_policy(config.superseded_policy()),
            debouncer: Debouncer::new(config.debounce()),
            poll: PollClock::new(config.poll_interval(), Instant::now()),
            effects: EffectRunner::new(translator)?,
        })
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn input_changed(&mut self, text: String, now: Instant) {
        self.dispatch(Msg::InputChanged(text), now);
    }

    pub fn swap_direction(&mut self, now: Instant) {
        self.dispatch(Msg::SwapDirectionClicked, now);
    }

    /// Fires the debounce timer and drains the inbox when they are due.
    ///
    /// Returns the new view when anything visible changed since the last call.
    pub fn tick(&mut self, now: Instant) -> Option<AppViewModel> {
        if self.debouncer.fire_if_due(now) {
            self.dispatch(Msg::DebounceElapsed, now);
        }
        if self.poll.is_due(now) {
            for msg in self.effects.drain() {
                self.dispatch(msg, now);
            }
        }
        if self.state.consume_dirty() {
            Some(self.state.view())
        } else {
            None
        }
    }

    /// How long the event loop may sleep before the next [`Controller::tick`].
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let poll = self.poll.time_until_due(now);
        match self.debouncer.time_until_due(now) {
            Some(debounce) => poll.min(debounce),
            None => poll,
        }
    }

    fn dispatch(&mut self, msg: Msg, now: Instant) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, &mut self.debouncer, now);
    }
}
