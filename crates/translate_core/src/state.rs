use crate::view_model::AppViewModel;

pub type AttemptId = u64;

/// Status line shown under the two panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Done,
    Error,
}

/// Which language the input pane holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    JaToEn,
    EnToJa,
}

impl Direction {
    /// Builds the model prompt for an input snapshot.
    ///
    /// The model translates Japanese input as-is; English input needs an
    /// explicit instruction.
    pub fn prompt_for(self, snapshot: &str) -> String {
        match self {
            Direction::JaToEn => snapshot.to_string(),
            Direction::EnToJa => format!("Translate to Japanese: {snapshot}"),
        }
    }

    pub fn swapped(self) -> Self {
        match self {
            Direction::JaToEn => Direction::EnToJa,
            Direction::EnToJa => Direction::JaToEn,
        }
    }
}

/// How results from overlapping attempts are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupersededPolicy {
    /// Every drained result is shown; the last one to complete wins.
    #[default]
    LastCompleted,
    /// Results from any attempt other than the latest issued are dropped.
    LatestIssued,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    output: String,
    status: Status,
    direction: Direction,
    policy: SupersededPolicy,
    next_attempt: AttemptId,
    latest_issued: Option<AttemptId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SupersededPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            output: self.output.clone(),
            status: self.status,
            direction: self.direction,
            dirty: self.dirty,
        }
    }

    pub fn policy(&self) -> SupersededPolicy {
        self.policy
    }

    pub fn latest_issued(&self) -> Option<AttemptId> {
        self.latest_issued
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Immutable copy of the input buffer as it should be sent to the model.
    pub(crate) fn snapshot(&self) -> String {
        self.input.trim().to_string()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_output(&mut self) {
        self.output.clear();
        self.status = Status::Idle;
        self.dirty = true;
    }

    pub(crate) fn issue_attempt(&mut self) -> AttemptId {
        self.next_attempt += 1;
        let attempt_id = self.next_attempt;
        self.latest_issued = Some(attempt_id);
        self.status = Status::Running;
        self.dirty = true;
        attempt_id
    }

    pub(crate) fn show_result(&mut self, text: String, status: Status) {
        self.output = text;
        self.status = status;
        self.dirty = true;
    }

    /// Exchanges direction and pane contents: the last translation becomes
    /// the new input.
    pub(crate) fn swap_direction(&mut self) {
        self.direction = self.direction.swapped();
        std::mem::swap(&mut self.input, &mut self.output);
        self.dirty = true;
    }
}
