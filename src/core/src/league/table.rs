use crate::{Team, TeamId, TeamStatistics};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Standings order: points, wins, goal difference, goals scored; all descending
pub fn compare_statistics(a: &TeamStatistics, b: &TeamStatistics) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.wins().cmp(&a.wins()))
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for().cmp(&a.goals_for()))
}

/// Sorts teams into standings order. The sort is stable: teams equal on
/// every key keep the order they were given in.
pub fn rank_teams<'t, I>(teams: I) -> Vec<&'t Team>
where
    I: IntoIterator<Item = &'t Team>,
{
    teams
        .into_iter()
        .sorted_by(|a, b| compare_statistics(a.statistics(), b.statistics()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub position: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lost: u32,
    pub goal_scored: u32,
    pub goal_concerned: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl LeagueTableRow {
    fn new(position: usize, team: &Team) -> Self {
        let statistics = team.statistics();

        LeagueTableRow {
            position,
            team_id: team.id,
            team_name: team.name.clone(),
            played: statistics.played(),
            win: statistics.wins(),
            draw: statistics.draws(),
            lost: statistics.losses(),
            goal_scored: statistics.goals_for(),
            goal_concerned: statistics.goals_against(),
            goal_difference: statistics.goal_difference(),
            points: statistics.points(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    /// Builds the table from teams already in standings order
    pub fn from_standings(standings: &[&Team]) -> Self {
        LeagueTable {
            rows: standings
                .iter()
                .enumerate()
                .map(|(idx, team)| LeagueTableRow::new(idx + 1, team))
                .collect(),
        }
    }

    pub fn get(&self) -> &[LeagueTableRow] {
        &self.rows
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    pub fn position_of(&self, team_id: TeamId) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.team_id == team_id)
            .map(|row| row.position)
    }
}
