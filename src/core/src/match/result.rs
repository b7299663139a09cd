use crate::r#match::FixtureId;
use crate::TeamId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home.cmp(&self.away) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::AwayWin,
        }
    }

    pub fn total_goals(&self) -> u16 {
        self.home as u16 + self.away as u16
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// A fixture that was finalized during round simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture_id: FixtureId,
    pub round: u16,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub score: Score,
}

impl MatchResult {
    pub fn new(
        fixture_id: FixtureId,
        round: u16,
        home_team_id: TeamId,
        away_team_id: TeamId,
        score: Score,
    ) -> Self {
        MatchResult {
            fixture_id,
            round,
            home_team_id,
            away_team_id,
            score,
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        match self.score.outcome() {
            MatchOutcome::HomeWin => Some(self.home_team_id),
            MatchOutcome::AwayWin => Some(self.away_team_id),
            MatchOutcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_outcome() {
        assert_eq!(Score::new(2, 1).outcome(), MatchOutcome::HomeWin);
        assert_eq!(Score::new(0, 0).outcome(), MatchOutcome::Draw);
        assert_eq!(Score::new(1, 3).outcome(), MatchOutcome::AwayWin);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(4, 2).to_string(), "4:2");
    }

    #[test]
    fn test_match_result_winner() {
        let result = MatchResult::new(FixtureId(0), 1, TeamId(0), TeamId(1), Score::new(0, 2));
        assert_eq!(result.winner(), Some(TeamId(1)));

        let draw = MatchResult::new(FixtureId(0), 1, TeamId(0), TeamId(1), Score::new(1, 1));
        assert_eq!(draw.winner(), None);
    }
}
