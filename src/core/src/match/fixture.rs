use crate::league::{LeagueError, Result};
use crate::r#match::Score;
use crate::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score a side can reach in one fixture, bounded by `Score`
pub const MAX_GOALS_PER_SIDE: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FixtureId(pub u32);

impl FixtureId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub team: TeamId,
    pub scorer: Option<u32>,
    pub assist: Option<u32>,
    pub minute: Option<u8>,
}

impl GoalEvent {
    pub fn new(team: TeamId) -> Self {
        GoalEvent {
            team,
            scorer: None,
            assist: None,
            minute: None,
        }
    }

    pub fn with_scorer(mut self, player_id: u32) -> Self {
        self.scorer = Some(player_id);
        self
    }

    pub fn with_assist(mut self, player_id: u32) -> Self {
        self.assist = Some(player_id);
        self
    }

    pub fn at_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }
}

/// One scheduled game of a competition round.
///
/// Goals can be appended until the fixture is finalized; after that the
/// fixture is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub competition: String,
    pub round: u16,
    pub home: TeamId,
    pub away: TeamId,
    goals: Vec<GoalEvent>,
    finalized: bool,
}

impl Fixture {
    pub(crate) fn new(
        id: FixtureId,
        competition: String,
        round: u16,
        home: TeamId,
        away: TeamId,
    ) -> Self {
        Fixture {
            id,
            competition,
            round,
            home,
            away,
            goals: Vec::new(),
            finalized: false,
        }
    }

    /// Return leg of this fixture: same teams with roles swapped
    pub(crate) fn mirrored(&self, id: FixtureId, round: u16) -> Self {
        Fixture::new(id, self.competition.clone(), round, self.away, self.home)
    }

    pub fn goals(&self) -> &[GoalEvent] {
        &self.goals
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home == team_id || self.away == team_id
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.home == team_id {
            Some(self.away)
        } else if self.away == team_id {
            Some(self.home)
        } else {
            None
        }
    }

    /// Current score counted from goal events
    pub fn score(&self) -> Score {
        Score::new(self.goals_of(self.home), self.goals_of(self.away))
    }

    /// Final score, available once the fixture is finalized
    pub fn result(&self) -> Option<Score> {
        if self.finalized {
            Some(self.score())
        } else {
            None
        }
    }

    fn goal_count(&self, team_id: TeamId) -> usize {
        self.goals.iter().filter(|g| g.team == team_id).count()
    }

    /// `add_goal` keeps every side within `MAX_GOALS_PER_SIDE`
    fn goals_of(&self, team_id: TeamId) -> u8 {
        u8::try_from(self.goal_count(team_id)).unwrap_or(MAX_GOALS_PER_SIDE)
    }

    fn ensure_room(&self, team_id: TeamId, goals: usize) -> Result<()> {
        if self.goal_count(team_id) + goals > MAX_GOALS_PER_SIDE as usize {
            return Err(LeagueError::GoalLimitReached {
                fixture: self.id,
                team: team_id,
                limit: MAX_GOALS_PER_SIDE,
            });
        }

        Ok(())
    }

    pub(crate) fn add_goal(&mut self, goal: GoalEvent) -> Result<()> {
        if self.finalized {
            return Err(LeagueError::FixtureAlreadyFinalized(self.id));
        }

        if !self.involves(goal.team) {
            return Err(LeagueError::GoalTeamMismatch {
                fixture: self.id,
                team: goal.team,
            });
        }

        self.ensure_room(goal.team, 1)?;

        self.goals.push(goal);

        Ok(())
    }

    /// Appends home goals, then away goals, without scorer details
    pub(crate) fn record_score(&mut self, score: Score) -> Result<()> {
        if self.finalized {
            return Err(LeagueError::FixtureAlreadyFinalized(self.id));
        }

        self.ensure_room(self.home, score.home as usize)?;
        self.ensure_room(self.away, score.away as usize)?;

        let home = std::iter::repeat_n(GoalEvent::new(self.home), score.home as usize);
        let away = std::iter::repeat_n(GoalEvent::new(self.away), score.away as usize);

        self.goals.extend(home.chain(away));

        Ok(())
    }

    pub(crate) fn finalize(&mut self) -> Result<Score> {
        if self.finalized {
            return Err(LeagueError::FixtureAlreadyFinalized(self.id));
        }

        self.finalized = true;

        Ok(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture::new(FixtureId(3), String::from("Premier"), 2, TeamId(0), TeamId(1))
    }

    #[test]
    fn test_score_counts_goal_events() {
        let mut fixture = fixture();

        fixture.add_goal(GoalEvent::new(TeamId(0)).with_scorer(9).at_minute(12)).unwrap();
        fixture.add_goal(GoalEvent::new(TeamId(1))).unwrap();
        fixture.add_goal(GoalEvent::new(TeamId(0)).with_assist(10)).unwrap();

        assert_eq!(fixture.score(), Score::new(2, 1));
        assert_eq!(fixture.result(), None);
    }

    #[test]
    fn test_record_score_orders_home_goals_first() {
        let mut fixture = fixture();

        fixture.record_score(Score::new(2, 1)).unwrap();

        let teams: Vec<TeamId> = fixture.goals().iter().map(|g| g.team).collect();
        assert_eq!(teams, vec![TeamId(0), TeamId(0), TeamId(1)]);
        assert!(fixture.goals().iter().all(|g| g.scorer.is_none() && g.assist.is_none()));
    }

    #[test]
    fn test_finalize_once() {
        let mut fixture = fixture();
        fixture.record_score(Score::new(1, 1)).unwrap();

        assert_eq!(fixture.finalize().unwrap(), Score::new(1, 1));
        assert!(fixture.is_finalized());
        assert_eq!(fixture.result(), Some(Score::new(1, 1)));

        assert!(matches!(
            fixture.finalize(),
            Err(LeagueError::FixtureAlreadyFinalized(FixtureId(3)))
        ));
    }

    #[test]
    fn test_goal_after_finalize_is_rejected() {
        let mut fixture = fixture();
        fixture.finalize().unwrap();

        let result = fixture.add_goal(GoalEvent::new(TeamId(0)));

        assert!(matches!(result, Err(LeagueError::FixtureAlreadyFinalized(_))));
        assert!(fixture.goals().is_empty());
    }

    #[test]
    fn test_goal_for_foreign_team_is_rejected() {
        let mut fixture = fixture();

        let result = fixture.add_goal(GoalEvent::new(TeamId(7)));

        assert!(matches!(
            result,
            Err(LeagueError::GoalTeamMismatch { team: TeamId(7), .. })
        ));
    }

    #[test]
    fn test_mirrored_swaps_roles() {
        let mirrored = fixture().mirrored(FixtureId(10), 5);

        assert_eq!(mirrored.id, FixtureId(10));
        assert_eq!(mirrored.round, 5);
        assert_eq!(mirrored.home, TeamId(1));
        assert_eq!(mirrored.away, TeamId(0));
        assert_eq!(mirrored.competition, "Premier");
    }

    #[test]
    fn test_opponent_of() {
        let fixture = fixture();

        assert_eq!(fixture.opponent_of(TeamId(0)), Some(TeamId(1)));
        assert_eq!(fixture.opponent_of(TeamId(1)), Some(TeamId(0)));
        assert_eq!(fixture.opponent_of(TeamId(2)), None);
    }

    #[test]
    fn test_goals_are_capped_per_side() {
        let mut fixture = fixture();

        for _ in 0..MAX_GOALS_PER_SIDE {
            fixture.add_goal(GoalEvent::new(TeamId(0))).unwrap();
        }

        let result = fixture.add_goal(GoalEvent::new(TeamId(0)));

        assert!(matches!(
            result,
            Err(LeagueError::GoalLimitReached { team: TeamId(0), limit: 255, .. })
        ));

        // the other side is unaffected
        fixture.add_goal(GoalEvent::new(TeamId(1))).unwrap();

        assert_eq!(fixture.goals().len(), 256);
        assert_eq!(fixture.finalize().unwrap(), Score::new(255, 1));
    }

    #[test]
    fn test_record_score_over_limit_leaves_goals_untouched() {
        let mut fixture = fixture();
        fixture.add_goal(GoalEvent::new(TeamId(0)).with_scorer(7)).unwrap();

        let result = fixture.record_score(Score::new(255, 0));

        assert!(matches!(result, Err(LeagueError::GoalLimitReached { .. })));
        assert_eq!(fixture.goals().len(), 1);
        assert_eq!(fixture.score(), Score::new(1, 0));
    }
}
