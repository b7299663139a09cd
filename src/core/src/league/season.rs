use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeasonState {
    #[default]
    Scheduled,
    InProgress {
        current_round: u16,
    },
    Finished,
}

impl SeasonState {
    pub fn is_finished(&self) -> bool {
        matches!(self, SeasonState::Finished)
    }

    /// State after `round` has been simulated. A finished season stays
    /// finished when an earlier round is replayed.
    pub fn after_round(self, round: u16, total_rounds: u16) -> SeasonState {
        match self {
            SeasonState::Finished => SeasonState::Finished,
            _ if round == total_rounds => SeasonState::Finished,
            _ => SeasonState::InProgress {
                current_round: round,
            },
        }
    }
}
