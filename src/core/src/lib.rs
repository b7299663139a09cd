pub mod club;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::{Team, TeamBuilder, TeamCollection, TeamId, TeamStatistics};

pub use league::{
    League, LeagueError, LeagueSettings, LeagueTable, LeagueTableRow, PointsScheme, RoundResult,
    ScheduleGenerator, SeasonOutcome, SeasonState,
};

pub use r#match::{
    Fixture, FixedResultProvider, FixtureId, GoalEvent, MatchEngineError, MatchOutcome,
    MatchResult, MatchResultProvider, RandomMatchEngine, Score,
};
