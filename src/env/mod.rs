//! Simulation core - action space, caches, observation, environment, policies

pub mod action;
pub mod cache;
pub mod civ_env;
pub mod observation;
pub mod policy;

pub use action::ActionSpace;
pub use cache::{EpisodeCache, RuleCache, Signature};
pub use civ_env::{CivEnv, StepInfo, StepResult};
pub use observation::{Observation, CHANNELS, GRID};
pub use policy::{run_episode, EpisodeSummary, GreedyPolicy, Policy, RandomPolicy};
