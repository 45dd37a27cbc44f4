pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{PlannerError, Result};
pub use types::{
    District, Feature, Improvement, NaturalWonder, Resource, ResourceType, Terrain, YieldType,
};
