use crate::club::REPUTATION_MAX_VALUE;
use crate::r#match::Score;
use crate::Team;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use thiserror::Error;

const MAX_GOALS: u8 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchEngineError {
    #[error("match {home} vs {away} could not be played: {reason}")]
    Unplayable {
        home: String,
        away: String,
        reason: String,
    },
}

impl MatchEngineError {
    pub fn unplayable(home: &Team, away: &Team, reason: &str) -> Self {
        MatchEngineError::Unplayable {
            home: home.name.clone(),
            away: away.name.clone(),
            reason: String::from(reason),
        }
    }
}

/// Produces the final score of a fixture.
///
/// Implementations must not touch league state; the league applies the
/// returned score itself.
pub trait MatchResultProvider {
    fn play(&self, home: &Team, away: &Team, important: bool) -> Result<Score, MatchEngineError>;
}

/// Returns the same score for every fixture
#[derive(Debug, Clone, Copy)]
pub struct FixedResultProvider {
    score: Score,
}

impl FixedResultProvider {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        FixedResultProvider {
            score: Score::new(home_goals, away_goals),
        }
    }
}

impl MatchResultProvider for FixedResultProvider {
    fn play(&self, _home: &Team, _away: &Team, _important: bool) -> Result<Score, MatchEngineError> {
        Ok(self.score)
    }
}

/// Quick-result engine: goals for each side are drawn from a Poisson
/// distribution whose mean is scaled by the reputation balance of the teams.
#[derive(Debug, Clone)]
pub struct RandomMatchEngine {
    pub average_goals: f32,
    pub home_advantage: f32,
    /// Scoring multiplier for matches flagged as important, they tend to be tighter
    pub important_match_factor: f32,
}

impl Default for RandomMatchEngine {
    fn default() -> Self {
        RandomMatchEngine {
            average_goals: 1.35,
            home_advantage: 1.15,
            important_match_factor: 0.9,
        }
    }
}

impl RandomMatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn strength(team: &Team) -> f32 {
        (team.reputation as f32 / REPUTATION_MAX_VALUE as f32).max(0.05)
    }

    /// Expected goals of (home, away)
    pub fn expected_goals(&self, home: &Team, away: &Team, important: bool) -> (f32, f32) {
        let home_strength = Self::strength(home);
        let away_strength = Self::strength(away);
        let total = home_strength + away_strength;

        let importance = if important {
            self.important_match_factor
        } else {
            1.0
        };

        let home_expected =
            self.average_goals * self.home_advantage * (2.0 * home_strength / total) * importance;
        let away_expected = self.average_goals * (2.0 * away_strength / total) * importance;

        (home_expected, away_expected)
    }

    fn goal_distribution(
        home: &Team,
        away: &Team,
        expected: f32,
    ) -> Result<Poisson<f64>, MatchEngineError> {
        Poisson::new(expected as f64).map_err(|error| {
            MatchEngineError::unplayable(
                home,
                away,
                &format!("invalid expected goals {}: {}", expected, error),
            )
        })
    }

    /// Draws a goal count, capped at `MAX_GOALS`
    fn sample_goals<R: Rng + ?Sized>(distribution: &Poisson<f64>, rng: &mut R) -> u8 {
        distribution.sample(rng).min(MAX_GOALS as f64) as u8
    }
}

impl MatchResultProvider for RandomMatchEngine {
    fn play(&self, home: &Team, away: &Team, important: bool) -> Result<Score, MatchEngineError> {
        let (home_expected, away_expected) = self.expected_goals(home, away, important);

        let home_distribution = Self::goal_distribution(home, away, home_expected)?;
        let away_distribution = Self::goal_distribution(home, away, away_expected)?;

        let mut rng = rand::rng();

        Ok(Score::new(
            Self::sample_goals(&home_distribution, &mut rng),
            Self::sample_goals(&away_distribution, &mut rng),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(name: &str, reputation: u16) -> Team {
        Team::new(String::from(name), String::from("ENG"), reputation)
    }

    #[test]
    fn test_fixed_provider() {
        let provider = FixedResultProvider::new(2, 1);

        let score = provider
            .play(&team("Ashford", 5000), &team("Brookvale", 5000), false)
            .unwrap();

        assert_eq!(score, Score::new(2, 1));
    }

    #[test]
    fn test_sample_goals_follows_expected_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let distribution = Poisson::new(1.5).unwrap();

        let draws = 5000;
        let total: u32 = (0..draws)
            .map(|_| RandomMatchEngine::sample_goals(&distribution, &mut rng) as u32)
            .sum();

        let mean = total as f64 / draws as f64;
        assert!((1.35..1.65).contains(&mean), "mean {}", mean);
    }

    #[test]
    fn test_sample_goals_is_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        let distribution = Poisson::new(50.0).unwrap();

        for _ in 0..100 {
            assert_eq!(RandomMatchEngine::sample_goals(&distribution, &mut rng), MAX_GOALS);
        }
    }

    #[test]
    fn test_stronger_team_expects_more_goals() {
        let engine = RandomMatchEngine::default();

        let (strong, weak) = engine.expected_goals(&team("Ashford", 9000), &team("Brookvale", 3000), false);

        assert!(strong > weak);
    }

    #[test]
    fn test_home_advantage() {
        let engine = RandomMatchEngine::default();

        let (home, away) = engine.expected_goals(&team("Ashford", 5000), &team("Brookvale", 5000), false);

        assert!(home > away);
    }

    #[test]
    fn test_important_matches_are_tighter() {
        let engine = RandomMatchEngine::default();
        let home = team("Ashford", 5000);
        let away = team("Brookvale", 5000);

        let (regular, _) = engine.expected_goals(&home, &away, false);
        let (important, _) = engine.expected_goals(&home, &away, true);

        assert!(important < regular);
    }

    #[test]
    fn test_random_engine_stays_within_cap() {
        let engine = RandomMatchEngine::default();
        let home = team("Ashford", 10000);
        let away = team("Brookvale", 0);

        for _ in 0..200 {
            let score = engine.play(&home, &away, false).unwrap();

            assert!(score.home <= MAX_GOALS);
            assert!(score.away <= MAX_GOALS);
        }
    }

    #[test]
    fn test_negative_average_is_an_error() {
        let engine = RandomMatchEngine {
            average_goals: -1.0,
            ..RandomMatchEngine::default()
        };

        let result = engine.play(&team("Ashford", 5000), &team("Brookvale", 5000), false);

        assert!(matches!(result, Err(MatchEngineError::Unplayable { .. })));
    }

    #[test]
    fn test_invalid_configuration_is_an_error() {
        let engine = RandomMatchEngine {
            average_goals: f32::NAN,
            ..RandomMatchEngine::default()
        };

        let result = engine.play(&team("Ashford", 5000), &team("Brookvale", 5000), false);

        assert!(matches!(result, Err(MatchEngineError::Unplayable { .. })));
    }
}
