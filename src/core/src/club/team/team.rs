use crate::club::team::builder::TeamBuilder;
use crate::club::team::statistics::TeamStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REPUTATION_MAX_VALUE: u16 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub country: String,

    /// Competition the team currently plays in, set when it joins a league
    pub division: Option<String>,

    /// 0-10000
    pub reputation: u16,

    statistics: TeamStatistics,
}

impl Team {
    pub fn new(name: String, country: String, reputation: u16) -> Self {
        Team {
            id: TeamId(0),
            name,
            country,
            division: None,
            reputation: reputation.min(REPUTATION_MAX_VALUE),
            statistics: TeamStatistics::default(),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn statistics(&self) -> &TeamStatistics {
        &self.statistics
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut TeamStatistics {
        &mut self.statistics
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reputation_is_clamped() {
        let team = Team::new(String::from("Harbour City"), String::from("ENG"), 15000);

        assert_eq!(team.reputation, REPUTATION_MAX_VALUE);
    }

    #[test]
    fn test_new_team_has_empty_ledger() {
        let team = Team::new(String::from("Harbour City"), String::from("ENG"), 5000);

        assert_eq!(team.statistics().played(), 0);
        assert_eq!(team.statistics().points(), 0);
        assert!(team.division.is_none());
    }
}
