use crate::club::TeamCollection;
use crate::league::{
    LeagueError, LeagueSettings, LeagueTable, Result, RoundResult, ScheduleGenerator,
    SeasonOutcome, SeasonState, rank_teams,
};
use crate::r#match::{Fixture, FixtureId, GoalEvent, MatchResult, MatchResultProvider, Score};
use crate::utils::Logging;
use crate::{Team, TeamId};
use log::{debug, info, warn};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::ops::Range;

const LEAGUE_MATCH_IMPORTANT: bool = false;

/// A league season: the team registry, the double round-robin schedule and
/// the season state. Everything needed to resume a season is serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    settings: LeagueSettings,
    teams: TeamCollection,
    fixtures: Vec<Fixture>,
    total_rounds: u16,
    state: SeasonState,
}

impl League {
    pub fn new(settings: LeagueSettings) -> Self {
        League {
            settings,
            teams: TeamCollection::new(),
            fixtures: Vec::new(),
            total_rounds: 0,
            state: SeasonState::Scheduled,
        }
    }

    pub fn with_teams(settings: LeagueSettings, teams: Vec<Team>) -> Result<Self> {
        let mut league = League::new(settings);

        for team in teams {
            league.add_team(team)?;
        }

        Ok(league)
    }

    pub fn name(&self) -> &str {
        &self.settings.competition
    }

    pub fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    // ========== TEAMS ==========

    pub fn add_team(&mut self, mut team: Team) -> Result<TeamId> {
        if self.teams.contains_name(&team.name) {
            return Err(LeagueError::DuplicateTeam { name: team.name });
        }

        if !self.fixtures.is_empty() {
            warn!(
                "{} joined {} after the schedule was generated, it plays no fixtures until the schedule is regenerated",
                team.name,
                self.name()
            );
        }

        team.division = Some(self.settings.competition.clone());
        team.statistics_mut().reset();

        let id = self.teams.add(team);

        debug!("team {} registered in {}", id, self.name());

        Ok(id)
    }

    pub fn teams(&self) -> &TeamCollection {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.by_id(id)
    }

    // ========== SCHEDULE ==========

    /// Builds the double round-robin schedule from the current roster.
    /// Any previous schedule and every ledger are discarded.
    pub fn generate_schedule(&mut self) -> Result<()> {
        let team_ids = self.teams.ids();
        let fixtures = ScheduleGenerator::generate(&self.settings.competition, &team_ids)?;

        if let SeasonState::InProgress { current_round } = self.state {
            warn!(
                "{}: schedule regenerated after round {}, previous results are discarded",
                self.name(),
                current_round
            );
        }

        self.teams.reset_statistics();
        self.fixtures = fixtures;
        self.total_rounds = ScheduleGenerator::total_rounds(team_ids.len());
        self.state = SeasonState::Scheduled;

        info!(
            "📅 {}: {} fixtures in {} rounds for {} teams",
            self.name(),
            self.fixtures.len(),
            self.total_rounds,
            team_ids.len()
        );

        Ok(())
    }

    pub fn reset_for_new_season(&mut self) -> Result<()> {
        info!("{}: starting a new season", self.name());

        self.generate_schedule()
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.get(id.index())
    }

    /// Fixtures of `round` in generation order; empty when the round is not in the schedule
    pub fn fixtures_for_round(&self, round: u16) -> &[Fixture] {
        self.round_range(round)
            .and_then(|range| self.fixtures.get(range))
            .unwrap_or(&[])
    }

    pub fn fixtures_for_team(&self, team_id: TeamId) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|fixture| fixture.involves(team_id))
            .collect()
    }

    /// First round that still has an unfinished fixture
    pub fn next_round(&self) -> Option<u16> {
        self.fixtures
            .iter()
            .find(|fixture| !fixture.is_finalized())
            .map(|fixture| fixture.round)
    }

    pub fn total_rounds(&self) -> u16 {
        self.total_rounds
    }

    pub fn state(&self) -> SeasonState {
        self.state
    }

    pub fn current_round(&self) -> Option<u16> {
        match self.state {
            SeasonState::Scheduled => None,
            SeasonState::InProgress { current_round } => Some(current_round),
            SeasonState::Finished => Some(self.total_rounds),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn round_range(&self, round: u16) -> Option<Range<usize>> {
        if round == 0 || round > self.total_rounds {
            return None;
        }

        // a restored snapshot may not hold a full schedule
        if self.fixtures.is_empty() || self.fixtures.len() % self.total_rounds as usize != 0 {
            return None;
        }

        let per_round = self.fixtures.len() / self.total_rounds as usize;
        let start = (round as usize - 1) * per_round;
        let range = start..start + per_round;

        (range.end <= self.fixtures.len()).then_some(range)
    }

    fn checked_round_range(&self, round: u16) -> Result<Range<usize>> {
        self.round_range(round).ok_or(LeagueError::RoundOutOfRange {
            round,
            total_rounds: self.total_rounds,
        })
    }

    // ========== SIMULATION ==========

    /// Plays every unfinished fixture of `round` through `provider`.
    ///
    /// On a provider failure the error is returned and fixtures finalized
    /// earlier in the call stay finalized; calling again resumes the round.
    pub fn simulate_round<P>(&mut self, round: u16, provider: &P) -> Result<RoundResult>
    where
        P: MatchResultProvider + ?Sized,
    {
        let range = self.checked_round_range(round)?;
        let message = format!("simulate round {} of {}", round, self.name());

        Logging::estimate_result(
            || {
                let mut result = RoundResult::new(round);

                for index in range {
                    if self.fixtures[index].is_finalized() {
                        continue;
                    }

                    let score = self.play_fixture(index, provider)?;

                    result
                        .match_results
                        .push(self.finalize_with_score(index, score)?);
                }

                self.complete_round(round, &mut result);

                Ok(result)
            },
            &message,
        )
    }

    /// Same as [`League::simulate_round`], but the provider is called for all
    /// pending fixtures of the round in parallel. Results are applied in
    /// generation order and application stops at the first failure.
    pub fn simulate_round_parallel<P>(&mut self, round: u16, provider: &P) -> Result<RoundResult>
    where
        P: MatchResultProvider + Sync + ?Sized,
    {
        let range = self.checked_round_range(round)?;

        let pending: Vec<usize> = range
            .filter(|&index| !self.fixtures[index].is_finalized())
            .collect();

        let scores: Vec<(usize, Result<Score>)> = {
            let league = &*self;

            pending
                .par_iter()
                .map(|&index| (index, league.play_fixture(index, provider)))
                .collect()
        };

        let mut result = RoundResult::new(round);

        for (index, score) in scores {
            result
                .match_results
                .push(self.finalize_with_score(index, score?)?);
        }

        self.complete_round(round, &mut result);

        Ok(result)
    }

    /// Plays all remaining rounds in order
    pub fn simulate_season<P>(&mut self, provider: &P) -> Result<Option<SeasonOutcome>>
    where
        P: MatchResultProvider + ?Sized,
    {
        let message = format!("simulate season of {}", self.name());

        Logging::estimate_result(
            || {
                while let Some(round) = self.next_round() {
                    self.simulate_round(round, provider)?;
                }

                // every fixture may already be finalized by hand
                if self.total_rounds > 0 && !self.state.is_finished() {
                    self.simulate_round(self.total_rounds, provider)?;
                }

                Ok(self.season_outcome())
            },
            &message,
        )
    }

    fn play_fixture<P>(&self, index: usize, provider: &P) -> Result<Score>
    where
        P: MatchResultProvider + ?Sized,
    {
        let fixture = &self.fixtures[index];

        let home = self
            .teams
            .by_id(fixture.home)
            .ok_or(LeagueError::UnknownTeam(fixture.home))?;
        let away = self
            .teams
            .by_id(fixture.away)
            .ok_or(LeagueError::UnknownTeam(fixture.away))?;

        provider
            .play(home, away, LEAGUE_MATCH_IMPORTANT)
            .map_err(|source| LeagueError::Simulation {
                fixture: fixture.id,
                source,
            })
    }

    fn finalize_with_score(&mut self, index: usize, score: Score) -> Result<MatchResult> {
        self.fixtures[index].record_score(score)?;

        self.finalize_at(index)
    }

    /// The only place where team ledgers are written
    fn finalize_at(&mut self, index: usize) -> Result<MatchResult> {
        let fixture = &mut self.fixtures[index];
        let score = fixture.finalize()?;

        self.teams
            .apply_score(fixture.home, fixture.away, score, &self.settings.points);

        debug!(
            "{} round {}: {} {} {}",
            fixture.competition,
            fixture.round,
            self.teams.by_id(fixture.home).map(|t| t.name.as_str()).unwrap_or("?"),
            score,
            self.teams.by_id(fixture.away).map(|t| t.name.as_str()).unwrap_or("?"),
        );

        Ok(MatchResult::new(
            fixture.id,
            fixture.round,
            fixture.home,
            fixture.away,
            score,
        ))
    }

    fn complete_round(&mut self, round: u16, result: &mut RoundResult) {
        self.state = self.state.after_round(round, self.total_rounds);
        result.season_finished = self.state.is_finished();

        if !result.season_finished {
            info!(
                "{}: round {}/{} complete, {} goals",
                self.name(),
                round,
                self.total_rounds,
                result.goals()
            );
            return;
        }

        if let Some(champion) = self.champion() {
            info!("🏆 {} won {}", champion.name, self.name());
        }
    }

    // ========== MANUAL RESULTS ==========

    pub fn record_goal(&mut self, fixture_id: FixtureId, goal: GoalEvent) -> Result<()> {
        self.fixtures
            .get_mut(fixture_id.index())
            .ok_or(LeagueError::FixtureNotFound(fixture_id))?
            .add_goal(goal)
    }

    /// Finalizes a fixture with the goals recorded so far and updates both ledgers
    pub fn finalize_fixture(&mut self, fixture_id: FixtureId) -> Result<MatchResult> {
        if fixture_id.index() >= self.fixtures.len() {
            return Err(LeagueError::FixtureNotFound(fixture_id));
        }

        self.finalize_at(fixture_id.index())
    }

    // ========== STANDINGS ==========

    pub fn standings(&self) -> Vec<&Team> {
        rank_teams(self.teams.iter())
    }

    pub fn table(&self) -> LeagueTable {
        LeagueTable::from_standings(&self.standings())
    }

    /// Top of the table, only once the season is finished
    pub fn champion(&self) -> Option<&Team> {
        if !self.state.is_finished() {
            return None;
        }

        self.standings().first().copied()
    }

    pub fn qualified(&self, count: usize) -> Vec<&Team> {
        self.standings().into_iter().take(count).collect()
    }

    pub fn relegated(&self, count: usize) -> Vec<&Team> {
        let standings = self.standings();
        let count = count.min(standings.len());

        standings[standings.len() - count..].to_vec()
    }

    pub fn season_outcome(&self) -> Option<SeasonOutcome> {
        let champion = self.champion()?;

        Some(SeasonOutcome {
            champion: champion.id,
            qualified: self
                .qualified(self.settings.qualification_slots)
                .iter()
                .map(|t| t.id)
                .collect(),
            relegated: self
                .relegated(self.settings.relegation_slots)
                .iter()
                .map(|t| t.id)
                .collect(),
        })
    }
}
