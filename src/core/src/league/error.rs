use crate::r#match::{FixtureId, MatchEngineError};
use crate::TeamId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("round-robin schedule needs an even number of teams, got {count}")]
    OddTeamCount { count: usize },

    #[error("team {name} is already registered in this league")]
    DuplicateTeam { name: String },

    #[error("team {0} is not registered in this league")]
    UnknownTeam(TeamId),

    #[error("fixture {0} does not exist")]
    FixtureNotFound(FixtureId),

    #[error("fixture {0} is already finalized")]
    FixtureAlreadyFinalized(FixtureId),

    #[error("team {team} does not play in fixture {fixture}")]
    GoalTeamMismatch { fixture: FixtureId, team: TeamId },

    #[error("team {team} cannot score more than {limit} goals in fixture {fixture}")]
    GoalLimitReached {
        fixture: FixtureId,
        team: TeamId,
        limit: u8,
    },

    #[error("round {round} is outside of the schedule (1..={total_rounds})")]
    RoundOutOfRange { round: u16, total_rounds: u16 },

    #[error("simulation of fixture {fixture} failed: {source}")]
    Simulation {
        fixture: FixtureId,
        #[source]
        source: MatchEngineError,
    },
}
