use crate::league::PointsScheme;
use crate::r#match::Score;
use crate::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Registry owning every team of a league. Insertion order is the pairing
/// order used by the schedule generator, and a `TeamId` is the team's
/// position in the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamCollection {
    teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new() -> Self {
        TeamCollection { teams: Vec::new() }
    }

    pub(crate) fn add(&mut self, mut team: Team) -> TeamId {
        let id = TeamId(self.teams.len() as u32);

        team.id = id;
        self.teams.push(team);

        id
    }

    pub fn by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    pub fn ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub(crate) fn reset_statistics(&mut self) {
        for team in &mut self.teams {
            team.statistics_mut().reset();
        }
    }

    /// Writes a final score into the ledgers of both teams
    pub(crate) fn apply_score(
        &mut self,
        home_id: TeamId,
        away_id: TeamId,
        score: Score,
        scheme: &PointsScheme,
    ) {
        if let Some(home) = self.teams.get_mut(home_id.index()) {
            home.statistics_mut().record(score.home, score.away, scheme);
        }

        if let Some(away) = self.teams.get_mut(away_id.index()) {
            away.statistics_mut().record(score.away, score.home, scheme);
        }
    }
}
