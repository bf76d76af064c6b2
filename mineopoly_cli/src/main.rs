use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mineopoly_core::{
    Team,
    board::{Economy, parse_board},
    competition::CompetitionStrategy,
    config::{GameConfig, StrategyParams},
    sandbox::Sandbox,
    strategy::MineStrategy,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(version, about = "Plays the competition strategy on a sandbox board", long_about = None)]
struct Args {
    /// Map file to load
    #[arg(short, long, value_name = "MAP_FILE", default_value = "maps/map01.txt")]
    map: PathBuf,

    /// TOML file with [game] and [strategy] tables
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Number of turns to play
    #[arg(short, long, default_value_t = 200)]
    turns: usize,

    /// Team the player sells for
    #[arg(long, value_enum, default_value_t = TeamArg::Red)]
    team: TeamArg,

    /// Seed handed to the strategy's random number generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Energy restored per turn spent on a recharge tile
    #[arg(long, default_value_t = 5)]
    recharge_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TeamArg {
    Red,
    Blue,
}

impl From<TeamArg> for Team {
    fn from(team: TeamArg) -> Self {
        match team {
            TeamArg::Red => Team::Red,
            TeamArg::Blue => Team::Blue,
        }
    }
}

/// Contents of the optional config file. Missing tables fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    game: GameConfig,
    strategy: StrategyParams,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    debug!(?settings, "Loaded settings");

    let map_text = std::fs::read_to_string(&args.map)
        .with_context(|| format!("Map file does not exist: {}", args.map.display()))?;
    let board = parse_board(&map_text)
        .with_context(|| format!("Failed to parse map {}", args.map.display()))?;
    let start = board.start;

    // The map decides the board size.
    let config = GameConfig {
        board_size: board.tiles.size() as i32,
        ..settings.game
    };
    let team = Team::from(args.team);

    let mut sandbox = Sandbox::new(board, &config, team, Economy::default(), args.recharge_rate)
        .context("Invalid game configuration")?;
    let mut strategy = CompetitionStrategy::initialize_with_params(
        &config,
        settings.strategy,
        &sandbox.view(),
        start,
        team,
        StdRng::seed_from_u64(args.seed),
    )
    .context("Failed to initialize strategy")?;

    info!(
        strategy = strategy.name(),
        ?team,
        %start,
        turns = args.turns,
        "Starting sandbox run"
    );
    let report = sandbox.run(&mut strategy, args.turns)?;
    info!(
        turns = report.turns,
        items_sold = report.items_sold,
        earned = report.earned,
        energy = report.energy,
        location = %report.location,
        "Run finished"
    );
    println!(
        "{} sold {} items for {} in {} turns",
        strategy.name(),
        report.items_sold,
        report.earned,
        report.turns
    );

    Ok(())
}
