use crate::r#match::MatchResult;
use crate::TeamId;
use serde::{Deserialize, Serialize};

/// Fixtures finalized by one call of round simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u16,
    pub match_results: Vec<MatchResult>,
    pub season_finished: bool,
}

impl RoundResult {
    pub fn new(round: u16) -> Self {
        RoundResult {
            round,
            match_results: Vec::new(),
            season_finished: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_results.is_empty()
    }

    pub fn goals(&self) -> u32 {
        self.match_results
            .iter()
            .map(|result| result.score.total_goals() as u32)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOutcome {
    pub champion: TeamId,
    pub qualified: Vec<TeamId>,
    pub relegated: Vec<TeamId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{FixtureId, Score};

    #[test]
    fn test_round_goals() {
        let mut result = RoundResult::new(3);
        assert!(result.is_empty());

        result.match_results.push(MatchResult::new(FixtureId(0), 3, TeamId(0), TeamId(1), Score::new(2, 1)));
        result.match_results.push(MatchResult::new(FixtureId(1), 3, TeamId(2), TeamId(3), Score::new(0, 0)));

        assert_eq!(result.goals(), 3);
        assert!(!result.is_empty());
    }
}
