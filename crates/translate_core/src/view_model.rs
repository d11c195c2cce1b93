use crate::{Direction, Status};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub output: String,
    pub status: Status,
    pub direction: Direction,
    pub dirty: bool,
}
