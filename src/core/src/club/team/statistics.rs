use crate::league::PointsScheme;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Cumulative season ledger of a team.
///
/// Only fixture finalization writes to it, so every value is derived from
/// finalized fixtures of the current season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatistics {
    points: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
}

impl TeamStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn played(&self) -> u32 {
        self.wins
            .saturating_add(self.draws)
            .saturating_add(self.losses)
    }

    pub(crate) fn record(&mut self, scored: u8, conceded: u8, scheme: &PointsScheme) {
        self.goals_for = self.goals_for.saturating_add(scored as u32);
        self.goals_against = self.goals_against.saturating_add(conceded as u32);

        let counter = match scored.cmp(&conceded) {
            Ordering::Greater => &mut self.wins,
            Ordering::Equal => &mut self.draws,
            Ordering::Less => &mut self.losses,
        };
        *counter = counter.saturating_add(1);

        self.points = self
            .points
            .saturating_add(scheme.points_for(scored, conceded) as u32);
    }

    pub(crate) fn reset(&mut self) {
        *self = TeamStatistics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_draw_loss() {
        let mut statistics = TeamStatistics::new();
        let scheme = PointsScheme::default();

        statistics.record(3, 1, &scheme);
        statistics.record(0, 0, &scheme);
        statistics.record(1, 2, &scheme);

        assert_eq!(statistics.wins(), 1);
        assert_eq!(statistics.draws(), 1);
        assert_eq!(statistics.losses(), 1);
        assert_eq!(statistics.points(), 4);
        assert_eq!(statistics.goals_for(), 4);
        assert_eq!(statistics.goals_against(), 3);
        assert_eq!(statistics.goal_difference(), 1);
        assert_eq!(statistics.played(), 3);
    }

    #[test]
    fn test_record_uses_points_scheme() {
        let mut statistics = TeamStatistics::new();
        let scheme = PointsScheme::new(2, 1, 0);

        statistics.record(2, 0, &scheme);
        statistics.record(1, 1, &scheme);

        assert_eq!(statistics.points(), 3);
    }

    #[test]
    fn test_negative_goal_difference() {
        let mut statistics = TeamStatistics::new();

        statistics.record(0, 4, &PointsScheme::default());

        assert_eq!(statistics.goal_difference(), -4);
        assert_eq!(statistics.points(), 0);
    }

    #[test]
    fn test_reset() {
        let mut statistics = TeamStatistics::new();
        statistics.record(5, 0, &PointsScheme::default());

        statistics.reset();

        assert_eq!(statistics, TeamStatistics::default());
    }

    #[test]
    fn test_ledger_holds_more_goals_than_u16() {
        let mut statistics = TeamStatistics::new();

        for _ in 0..300 {
            statistics.record(255, 0, &PointsScheme::default());
        }

        assert_eq!(statistics.goals_for(), 300 * 255);
        assert_eq!(statistics.goal_difference(), 300 * 255);
        assert_eq!(statistics.points(), 900);
        assert_eq!(statistics.played(), 300);
    }
}
