#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use itertools::Itertools;
use league_core::utils::TimeEstimation;
use league_core::{League, LeagueError, LeagueSettings, RandomMatchEngine, SeasonOutcome, Team};
use log::{debug, info};
use std::env;

const DEFAULT_TEAMS: [&str; 20] = [
    "Ashford Rovers",
    "Brookvale United",
    "Castlerock City",
    "Dunmore Athletic",
    "Eastwick Wanderers",
    "Fairhaven Town",
    "Glenbrook Albion",
    "Hollowmere Rangers",
    "Ironbridge FC",
    "Kingsmoor County",
    "Larkfield Harriers",
    "Marlow Vale",
    "Northgate Forest",
    "Oakhurst Borough",
    "Pennington Park",
    "Queensbury Hotspur",
    "Redcliffe Villa",
    "Stonebury Orient",
    "Thornwick Rovers",
    "Westmarch Dynamo",
];

const COUNTRY: &str = "ENG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let is_parallel = env::var("MODE") == Ok(String::from("PARALLEL"));

    let settings = read_settings()?;
    let teams = read_teams()?;

    let mut league = League::with_teams(settings, teams)?;
    league.generate_schedule()?;

    if is_parallel {
        info!("parallel round simulation enabled");
    }

    let engine = RandomMatchEngine::default();

    let (outcome, estimated) =
        TimeEstimation::estimate(|| play_season(&mut league, &engine, is_parallel));

    let outcome = outcome?;

    info!("season simulated: {} ms", estimated);

    log_rounds(&league);
    log_table(&league);

    match outcome {
        Some(outcome) => log_outcome(&league, &outcome),
        None => info!("{} has no season to play", league.name()),
    }

    Ok(())
}

fn read_settings() -> color_eyre::Result<LeagueSettings> {
    let name = env::var("LEAGUE_NAME").unwrap_or_else(|_| String::from("Premier League"));

    let mut settings = LeagueSettings::new(name);

    if let Ok(slots) = env::var("LEAGUE_QUALIFICATION_SLOTS") {
        settings = settings.with_qualification_slots(
            slots
                .trim()
                .parse()
                .wrap_err("LEAGUE_QUALIFICATION_SLOTS must be a non-negative number")?,
        );
    }

    if let Ok(slots) = env::var("LEAGUE_RELEGATION_SLOTS") {
        settings = settings.with_relegation_slots(
            slots
                .trim()
                .parse()
                .wrap_err("LEAGUE_RELEGATION_SLOTS must be a non-negative number")?,
        );
    }

    Ok(settings)
}

fn read_teams() -> color_eyre::Result<Vec<Team>> {
    let names: Vec<String> = match env::var("LEAGUE_TEAMS") {
        Ok(list) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => DEFAULT_TEAMS.iter().map(|name| String::from(*name)).collect(),
    };

    names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            Team::builder()
                .name(name)
                .country(String::from(COUNTRY))
                .reputation(reputation_for(idx))
                .build()
                .map_err(|error| eyre!(error))
        })
        .collect()
}

/// Earlier entries of the list are the stronger teams
fn reputation_for(idx: usize) -> u16 {
    9000u16.saturating_sub((idx as u16).saturating_mul(350)).max(500)
}

fn play_season(
    league: &mut League,
    engine: &RandomMatchEngine,
    is_parallel: bool,
) -> Result<Option<SeasonOutcome>, LeagueError> {
    if !is_parallel {
        return league.simulate_season(engine);
    }

    while let Some(round) = league.next_round() {
        league.simulate_round_parallel(round, engine)?;
    }

    Ok(league.season_outcome())
}

fn log_rounds(league: &League) {
    for (round, fixtures) in &league.fixtures().iter().chunk_by(|fixture| fixture.round) {
        let line = fixtures
            .map(|fixture| {
                format!(
                    "{} {} {}",
                    team_name(league, fixture.home),
                    fixture.score(),
                    team_name(league, fixture.away)
                )
            })
            .join(", ");

        debug!("round {}: {}", round, line);
    }
}

fn log_table(league: &League) {
    info!("{} final table", league.name());

    for row in league.table().get() {
        info!(
            "{:>2}. {:<20} {:>2} {:>2} {:>2} {:>2} {:>3}:{:<3} {:>+4} {:>3}",
            row.position,
            row.team_name,
            row.played,
            row.win,
            row.draw,
            row.lost,
            row.goal_scored,
            row.goal_concerned,
            row.goal_difference,
            row.points
        );
    }
}

fn log_outcome(league: &League, outcome: &SeasonOutcome) {
    info!("🏆 champion: {}", team_name(league, outcome.champion));

    info!(
        "qualified: {}",
        outcome
            .qualified
            .iter()
            .map(|id| team_name(league, *id))
            .join(", ")
    );

    info!(
        "relegated: {}",
        outcome
            .relegated
            .iter()
            .map(|id| team_name(league, *id))
            .join(", ")
    );
}

fn team_name(league: &League, id: league_core::TeamId) -> &str {
    league.team(id).map(|team| team.name.as_str()).unwrap_or("unknown")
}
