//! District Planner - command line entry point
//!
//! Scores boundary-format maps, runs a placement policy over them, or
//! prints an empty map to start from. JSON goes to stdout, logs to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use district_planner::core::{EngineConfig, Result};
use district_planner::env::{run_episode, CivEnv, GreedyPolicy, Policy, RandomPolicy};
use district_planner::map::CivMap;
use district_planner::transfer::{load_map_from_path, load_tiles_from_path, map_to_json, ScoreReport};
use district_planner::yields::get_score;

#[derive(Parser, Debug)]
#[command(name = "district-planner")]
#[command(about = "Score and plan district placements on hex maps")]
struct Cli {
    /// Engine config (TOML); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the floored yield summary and per-tile breakdown of a map
    Score {
        map: PathBuf,
    },
    /// Place districts with a policy until none fit, then print the map
    Plan {
        map: PathBuf,

        #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
        policy: PolicyKind,

        /// Seed for template choice and the random policy
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print an empty grassland map
    Empty {
        /// Map radius; the config value when omitted
        #[arg(long)]
        radius: Option<i32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyKind {
    Greedy,
    Random,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("district_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Score { map } => {
            let map = load_tiles_from_path(&map)?;
            let report = ScoreReport::from(&get_score(&map));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Plan { map, policy, seed } => {
            let map = load_map_from_path(&map)?;
            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            let mut env = CivEnv::with_templates(vec![map], config.with_seed(seed))?;

            let mut policy: Box<dyn Policy> = match policy {
                PolicyKind::Greedy => Box::new(GreedyPolicy),
                PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            };
            let summary = run_episode(&mut env, policy.as_mut(), Some(seed))?;
            tracing::info!(
                "Placed {} districts, final score {:.1}",
                summary.steps,
                summary.final_score
            );
            println!("{}", map_to_json(env.map())?);
        }
        Command::Empty { radius } => {
            let mut settings = config.clone();
            if let Some(radius) = radius {
                settings.map_radius = radius;
            }
            settings.validate()?;
            let mut map = CivMap::empty(settings.map_radius);
            map.city_radius = settings.city_radius;
            println!("{}", map_to_json(&map)?);
        }
    }

    Ok(())
}
