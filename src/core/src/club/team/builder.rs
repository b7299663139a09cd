use crate::Team;

const DEFAULT_REPUTATION: u16 = 5000;

#[derive(Default)]
pub struct TeamBuilder {
    name: Option<String>,
    country: Option<String>,
    division: Option<String>,
    reputation: Option<u16>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn country(mut self, country: String) -> Self {
        self.country = Some(country);
        self
    }

    pub fn division(mut self, division: String) -> Self {
        self.division = Some(division);
        self
    }

    pub fn reputation(mut self, reputation: u16) -> Self {
        self.reputation = Some(reputation);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let name = self.name.ok_or("name is required")?;

        if name.trim().is_empty() {
            return Err(String::from("name must not be empty"));
        }

        let mut team = Team::new(
            name,
            self.country.ok_or("country is required")?,
            self.reputation.unwrap_or(DEFAULT_REPUTATION),
        );

        team.division = self.division;

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_team() {
        let team = TeamBuilder::new()
            .name(String::from("Northbridge Rovers"))
            .country(String::from("ENG"))
            .reputation(7200)
            .build()
            .unwrap();

        assert_eq!(team.name, "Northbridge Rovers");
        assert_eq!(team.country, "ENG");
        assert_eq!(team.reputation, 7200);
    }

    #[test]
    fn test_build_uses_default_reputation() {
        let team = Team::builder()
            .name(String::from("Northbridge Rovers"))
            .country(String::from("ENG"))
            .build()
            .unwrap();

        assert_eq!(team.reputation, DEFAULT_REPUTATION);
    }

    #[test]
    fn test_build_requires_name() {
        let result = TeamBuilder::new().country(String::from("ENG")).build();

        assert_eq!(result.unwrap_err(), "name is required");
    }

    #[test]
    fn test_build_rejects_blank_name() {
        let result = TeamBuilder::new()
            .name(String::from("   "))
            .country(String::from("ENG"))
            .build();

        assert!(result.is_err());
    }
}
