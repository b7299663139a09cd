use crate::league::{LeagueError, Result};
use crate::r#match::{Fixture, FixtureId};
use crate::TeamId;
use log::debug;

/// Double round-robin fixture generator (circle method).
///
/// The first team stays fixed while the others rotate one place per round.
/// The second leg replays the first with home and away swapped, so for `n`
/// teams there are `2 * (n - 1)` rounds of `n / 2` fixtures each and the
/// fixtures of a round are stored contiguously.
pub struct ScheduleGenerator;

struct Pairing {
    round: u16,
    home: TeamId,
    away: TeamId,
}

impl ScheduleGenerator {
    pub fn generate(competition: &str, teams: &[TeamId]) -> Result<Vec<Fixture>> {
        if teams.len() < 2 {
            return Ok(Vec::new());
        }

        if teams.len() % 2 != 0 {
            return Err(LeagueError::OddTeamCount { count: teams.len() });
        }

        let first_leg = Self::first_leg(teams);
        let leg_rounds = (teams.len() - 1) as u16;

        let mut fixtures: Vec<Fixture> = first_leg
            .iter()
            .enumerate()
            .map(|(idx, pairing)| {
                Fixture::new(
                    FixtureId(idx as u32),
                    String::from(competition),
                    pairing.round,
                    pairing.home,
                    pairing.away,
                )
            })
            .collect();

        let second_leg: Vec<Fixture> = fixtures
            .iter()
            .map(|fixture| {
                let id = FixtureId((fixture.id.index() + first_leg.len()) as u32);
                fixture.mirrored(id, fixture.round + leg_rounds)
            })
            .collect();

        fixtures.extend(second_leg);

        debug!(
            "generated {} fixtures in {} rounds for {} teams",
            fixtures.len(),
            Self::total_rounds(teams.len()),
            teams.len()
        );

        Ok(fixtures)
    }

    pub fn total_rounds(team_count: usize) -> u16 {
        if team_count < 2 {
            return 0;
        }

        (2 * (team_count - 1)) as u16
    }

    fn first_leg(teams: &[TeamId]) -> Vec<Pairing> {
        let anchor = teams[0];
        let mut rotation: Vec<TeamId> = teams[1..].to_vec();

        let size = rotation.len();
        let rounds = teams.len() - 1;
        let pairs_per_round = teams.len() / 2;

        let mut pairings = Vec::with_capacity(rounds * pairs_per_round);

        for round in 0..rounds {
            let label = (round + 1) as u16;

            // keep the anchor from being always at home or always away
            let (home, away) = if round % 2 == 0 {
                (anchor, rotation[0])
            } else {
                (rotation[0], anchor)
            };

            pairings.push(Pairing {
                round: label,
                home,
                away,
            });

            for slot in 1..pairs_per_round {
                let first = rotation[slot];
                let second = rotation[size - slot];

                let (home, away) = if (round + slot) % 2 == 0 {
                    (first, second)
                } else {
                    (second, first)
                };

                pairings.push(Pairing {
                    round: label,
                    home,
                    away,
                });
            }

            rotation.rotate_right(1);
        }

        pairings
    }
}
