//! Parallel Rollout Runner
//!
//! Runs independent episodes across worker threads and prints a JSON summary
//! of returns and episode lengths. Each episode owns its environment.

use std::path::PathBuf;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use district_planner::core::{EngineConfig, Result};
use district_planner::env::{run_episode, CivEnv, EpisodeSummary, GreedyPolicy, Policy, RandomPolicy};
use district_planner::map::CivMap;
use district_planner::transfer::load_map_from_path;

/// Parallel Rollout Runner - many independent episodes at once
#[derive(Parser, Debug)]
#[command(name = "rollout")]
#[command(about = "Run independent placement episodes in parallel")]
struct Args {
    /// Number of episodes
    #[arg(long, default_value_t = 64)]
    episodes: u64,

    /// Template maps (boundary JSON); the empty map when none are given
    #[arg(long)]
    map: Vec<PathBuf>,

    /// Engine config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the greedy policy instead of the random one
    #[arg(long)]
    greedy: bool,

    /// Base seed; episode i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Serialize)]
struct RolloutReport {
    episodes: usize,
    mean_reward: f64,
    mean_score: f64,
    mean_steps: f64,
    best_score: f64,
    summaries: Vec<EpisodeSummary>,
}

fn run_one(templates: &[CivMap], config: &EngineConfig, greedy: bool, seed: u64) -> Result<EpisodeSummary> {
    let mut env = CivEnv::with_templates(templates.to_vec(), config.clone().with_seed(seed))?;
    let mut policy: Box<dyn Policy> = if greedy {
        Box::new(GreedyPolicy)
    } else {
        Box::new(RandomPolicy::new(seed))
    };
    run_episode(&mut env, policy.as_mut(), Some(seed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("district_planner=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let templates = args
        .map
        .iter()
        .map(|path| load_map_from_path(path))
        .collect::<Result<Vec<_>>>()?;

    // PARALLEL: one environment per episode, nothing shared but the templates
    let summaries = (0..args.episodes)
        .into_par_iter()
        .map(|i| run_one(&templates, &config, args.greedy, args.seed.wrapping_add(i)))
        .collect::<Result<Vec<_>>>()?;

    let n = summaries.len().max(1) as f64;
    let report = RolloutReport {
        episodes: summaries.len(),
        mean_reward: summaries.iter().map(|s| s.total_reward).sum::<f64>() / n,
        mean_score: summaries.iter().map(|s| s.final_score).sum::<f64>() / n,
        mean_steps: summaries.iter().map(|s| s.steps as f64).sum::<f64>() / n,
        best_score: summaries
            .iter()
            .map(|s| s.final_score)
            .fold(0.0, f64::max),
        summaries,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
