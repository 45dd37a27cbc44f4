//! Engine configuration with documented constants
//!
//! Reward shaping and map geometry constants are collected here. The
//! defaults reproduce the reward the policy was trained against.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{PlannerError, Result};

/// Largest map radius that fits the 9x9 observation window
pub const MAX_OBSERVABLE_RADIUS: i32 = 4;

/// Configuration for map generation and the step reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === MAP GEOMETRY ===
    /// Radius of the generated empty map (hex disk)
    ///
    /// Radius 4 yields 61 tiles, which fills the observation grid exactly.
    pub map_radius: i32,

    /// Radius of the city's workable disk around its center
    ///
    /// Radius 3 is the standard 37-tile city footprint.
    pub city_radius: i32,

    // === REWARD SHAPING ===
    /// Multiplier on the score delta when the placed district is a city center
    ///
    /// A fresh city center converts every in-limits tile into scored tiles at
    /// once, so the raw delta is dampened to keep it comparable to later steps.
    pub city_center_delta_scale: f64,

    /// Weight on the summed base yields of the city center tile itself
    pub city_center_tile_weight: f64,

    /// Flat bonus added to the score delta for any non-city-center placement
    pub district_placement_bonus: f64,

    // === RANDOMNESS ===
    /// Seed for template selection on reset (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map_radius: 4,
            city_radius: 3,
            city_center_delta_scale: 0.1,
            city_center_tile_weight: 2.0,
            district_placement_bonus: 2.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.map_radius < 0 || self.map_radius > MAX_OBSERVABLE_RADIUS {
            return Err(PlannerError::InvalidConfig(format!(
                "map_radius ({}) must be within 0..={}",
                self.map_radius, MAX_OBSERVABLE_RADIUS
            )));
        }

        if self.city_radius < 0 {
            return Err(PlannerError::InvalidConfig(format!(
                "city_radius ({}) must be non-negative",
                self.city_radius
            )));
        }

        if !self.city_center_delta_scale.is_finite()
            || !self.city_center_tile_weight.is_finite()
            || !self.district_placement_bonus.is_finite()
        {
            return Err(PlannerError::InvalidConfig(
                "reward constants must be finite".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("map_radius = 3\nseed = 7\n").unwrap();
        assert_eq!(config.map_radius, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.city_radius, 3);
        assert_eq!(config.district_placement_bonus, 2.0);
    }

    #[test]
    fn test_oversized_radius_rejected() {
        let result = EngineConfig::from_toml_str("map_radius = 5");
        assert!(matches!(result, Err(PlannerError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = EngineConfig::from_toml_str("map_radius = \"four\"");
        assert!(matches!(result, Err(PlannerError::TomlError(_))));
    }
}
