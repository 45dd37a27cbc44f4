//! Action selection policies and the episode driver

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::env::civ_env::CivEnv;

/// Picks the next action from the legal ones
pub trait Policy {
    /// `None` when no action is legal
    fn select(&mut self, env: &CivEnv, mask: &[bool]) -> Result<Option<usize>>;

    fn name(&self) -> &'static str;
}

fn legal_actions(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &legal)| legal.then_some(i))
        .collect()
}

/// Uniform choice among legal actions
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select(&mut self, _env: &CivEnv, mask: &[bool]) -> Result<Option<usize>> {
        Ok(legal_actions(mask).choose(&mut self.rng).copied())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// One-step lookahead: the legal action with the highest immediate reward
///
/// Ties go to the lowest action index.
#[derive(Debug, Clone, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn select(&mut self, env: &CivEnv, mask: &[bool]) -> Result<Option<usize>> {
        let mut best: Option<(usize, f64)> = None;
        for action in legal_actions(mask) {
            let reward = env.preview_reward(action)?;
            if best.map_or(true, |(_, top)| reward > top) {
                best = Some((action, reward));
            }
        }
        Ok(best.map(|(action, _)| action))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Outcome of one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub policy: String,
    pub steps: usize,
    pub total_reward: f64,
    pub final_score: f64,
}

/// Reset `env` and step `policy` until no legal action remains
pub fn run_episode(
    env: &mut CivEnv,
    policy: &mut dyn Policy,
    seed: Option<u64>,
) -> Result<EpisodeSummary> {
    env.reset(seed);

    let mut steps = 0;
    let mut total_reward = 0.0;
    let mut mask = env.action_mask();

    while let Some(action) = policy.select(env, &mask)? {
        let result = env.step(action)?;
        steps += 1;
        total_reward += result.reward;
        if result.terminated {
            break;
        }
        mask = env.action_mask();
    }

    let final_score = env.score();
    tracing::info!(
        "{} episode finished: {} steps, reward {:.2}, score {:.2}",
        policy.name(),
        steps,
        total_reward,
        final_score
    );

    Ok(EpisodeSummary {
        policy: policy.name().to_string(),
        steps,
        total_reward,
        final_score,
    })
}
