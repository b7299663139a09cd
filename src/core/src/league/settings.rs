use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DEFAULT_COMPETITION: &str = "League";
const DEFAULT_QUALIFICATION_SLOTS: usize = 4;
const DEFAULT_RELEGATION_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsScheme {
    pub win: u8,
    pub draw: u8,
    pub loss: u8,
}

impl PointsScheme {
    pub fn new(win: u8, draw: u8, loss: u8) -> Self {
        PointsScheme { win, draw, loss }
    }

    pub fn points_for(&self, scored: u8, conceded: u8) -> u8 {
        match scored.cmp(&conceded) {
            Ordering::Greater => self.win,
            Ordering::Equal => self.draw,
            Ordering::Less => self.loss,
        }
    }
}

impl Default for PointsScheme {
    fn default() -> Self {
        PointsScheme::new(3, 1, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub competition: String,
    pub points: PointsScheme,
    /// Top places that qualify for continental competitions
    pub qualification_slots: usize,
    /// Bottom places that go down at season end
    pub relegation_slots: usize,
}

impl LeagueSettings {
    pub fn new(competition: String) -> Self {
        LeagueSettings {
            competition,
            ..LeagueSettings::default()
        }
    }

    pub fn with_points(mut self, points: PointsScheme) -> Self {
        self.points = points;
        self
    }

    pub fn with_qualification_slots(mut self, slots: usize) -> Self {
        self.qualification_slots = slots;
        self
    }

    pub fn with_relegation_slots(mut self, slots: usize) -> Self {
        self.relegation_slots = slots;
        self
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            competition: String::from(DEFAULT_COMPETITION),
            points: PointsScheme::default(),
            qualification_slots: DEFAULT_QUALIFICATION_SLOTS,
            relegation_slots: DEFAULT_RELEGATION_SLOTS,
        }
    }
}
