//! Step/reset environment over a district map
//!
//! One action places one district. The legality mask is the sole gate on
//! actions: stepping with a masked-out action is a caller error and is
//! not detected.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{EngineConfig, MAX_OBSERVABLE_RADIUS};
use crate::core::error::{PlannerError, Result};
use crate::core::types::District;
use crate::env::action::ActionSpace;
use crate::env::cache::{EpisodeCache, RuleCache, Signature};
use crate::env::observation::Observation;
use crate::map::{CivMap, HexCoord};
use crate::yields::{base_city_housing, get_score, tile_score};

/// Masks returned alongside every step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub district_mask: Vec<bool>,
    /// Tile mask of the district just placed
    pub tile_mask: Vec<bool>,
}

/// Result of a single environment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    /// No legal action remains
    pub terminated: bool,
    /// Always false; episodes end only by termination
    pub truncated: bool,
    pub info: StepInfo,
}

/// District placement environment
#[derive(Debug, Clone)]
pub struct CivEnv {
    config: EngineConfig,
    templates: Vec<CivMap>,
    map: CivMap,
    actions: ActionSpace,
    rules: RuleCache,
    episode: EpisodeCache,
    signature: Signature,
    last_score: f64,
    rng: ChaCha8Rng,
}

impl CivEnv {
    /// Environment over the empty grassland map of `config.map_radius`
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_templates(Vec::new(), config)
    }

    /// Environment that resets to a copy of one of `templates`
    ///
    /// All templates must share one coordinate set, since the action
    /// enumeration is fixed here.
    pub fn with_templates(templates: Vec<CivMap>, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let mut templates = if templates.is_empty() {
            vec![CivMap::empty(config.map_radius)]
        } else {
            templates
        };
        for template in &mut templates {
            template.city_radius = config.city_radius;
        }

        let reference = templates[0].sorted_coords();
        for (i, template) in templates.iter().enumerate() {
            if template.sorted_coords() != reference {
                return Err(PlannerError::InvalidConfig(format!(
                    "template {} has a different tile set than template 0",
                    i
                )));
            }
        }
        if let Some(coord) = reference.iter().find(|c| {
            c.q.abs() > MAX_OBSERVABLE_RADIUS || c.r.abs() > MAX_OBSERVABLE_RADIUS
        }) {
            return Err(PlannerError::InvalidConfig(format!(
                "tile {} lies outside the observation window",
                coord
            )));
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let map = templates[0].clone();
        let actions = ActionSpace::new(&map);
        let signature = Signature::of(&map);

        tracing::info!(
            "Environment ready: {} templates, {} tiles, {} actions",
            templates.len(),
            actions.n_tiles(),
            actions.size()
        );

        Ok(Self {
            config,
            templates,
            map,
            actions,
            rules: RuleCache::new(),
            episode: EpisodeCache::default(),
            signature,
            last_score: 0.0,
            rng,
        })
    }

    /// Start a new episode from a randomly chosen template
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        let index = self.rng.gen_range(0..self.templates.len());
        self.map = self.templates[index].clone();

        self.last_score = 0.0;
        self.episode.clear();
        self.signature = Signature::of(&self.map);

        tracing::info!("Episode reset to template {}", index);
        self.observation()
    }

    /// Apply one action
    pub fn step(&mut self, action: usize) -> Result<StepResult> {
        let (district, coord) = self.actions.decode(action)?;

        place_district(&mut self.map, district, coord)?;
        self.signature = Signature::of(&self.map);

        let score = self.score();
        let reward = placement_reward(&self.config, &self.map, district, &coord, score - self.last_score);
        self.last_score = score;

        let terminated = !self.action_mask().iter().any(|&legal| legal);
        tracing::debug!(
            "Placed {} at {}: reward {:.2}, score {:.2}{}",
            district,
            coord,
            reward,
            score,
            if terminated { " (terminal)" } else { "" }
        );

        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminated,
            truncated: false,
            info: StepInfo {
                district_mask: self.district_mask(),
                tile_mask: self.tile_mask(district),
            },
        })
    }

    /// Reward `action` would earn, without changing the environment
    pub fn preview_reward(&self, action: usize) -> Result<f64> {
        let (district, coord) = self.actions.decode(action)?;
        let mut map = self.map.clone();
        place_district(&mut map, district, coord)?;
        let score = get_score(&map).total();
        Ok(placement_reward(&self.config, &map, district, &coord, score - self.last_score))
    }

    /// Full-map score total, memoized per signature
    pub fn score(&mut self) -> f64 {
        if let Some(score) = self.episode.scores.get(&self.signature) {
            return *score;
        }
        let score = get_score(&self.map).total();
        self.episode.scores.insert(self.signature.clone(), score);
        score
    }

    /// One entry per placeable district
    pub fn district_mask(&self) -> Vec<bool> {
        let city = self.map.city();
        self.actions
            .districts()
            .iter()
            .map(|&district| match city {
                None => district == District::CityCenter,
                Some(_) if district == District::CityCenter => false,
                Some(city) => city.can_build(district),
            })
            .collect()
    }

    /// One entry per tile: where `district` could go right now
    pub fn tile_mask(&mut self, district: District) -> Vec<bool> {
        let key = (self.signature.clone(), district);
        if let Some(mask) = self.episode.tile_masks.get(&key) {
            return mask.clone();
        }

        let has_city = self.map.has_city();

        let mut mask = Vec::with_capacity(self.actions.n_tiles());
        for coord in self.actions.tiles() {
            let Some(tile) = self.map.get(coord) else {
                mask.push(false);
                continue;
            };
            let searchable = !has_city || tile.within_city_limits;
            mask.push(
                searchable
                    && !tile.has_district()
                    && self.rules.can_place(&self.map, district, coord),
            );
        }

        self.episode.tile_masks.insert(key, mask.clone());
        mask
    }

    /// Outer product of the district mask with each district's tile mask
    pub fn action_mask(&mut self) -> Vec<bool> {
        if let Some(mask) = self.episode.action_masks.get(&self.signature) {
            return mask.clone();
        }

        let n_tiles = self.actions.n_tiles();
        let mut mask = vec![false; self.actions.size()];
        let district_mask = self.district_mask();
        let districts = self.actions.districts().to_vec();

        for (index, district) in districts.into_iter().enumerate() {
            if !district_mask[index] {
                continue;
            }
            let tiles = self.tile_mask(district);
            mask[index * n_tiles..(index + 1) * n_tiles].copy_from_slice(&tiles);
        }

        self.episode
            .action_masks
            .insert(self.signature.clone(), mask.clone());
        mask
    }

    pub fn observation(&self) -> Observation {
        Observation::from_map(&self.map)
    }

    pub fn map(&self) -> &CivMap {
        &self.map
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.actions
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Score total after the last step
    pub fn last_score(&self) -> f64 {
        self.last_score
    }

    pub fn rule_cache(&self) -> &RuleCache {
        &self.rules
    }

    pub fn episode_cache(&self) -> &EpisodeCache {
        &self.episode
    }
}

/// Write `district` onto the tile and update the city
///
/// Leaves the map untouched on error.
fn place_district(map: &mut CivMap, district: District, coord: HexCoord) -> Result<()> {
    if district == District::CityCenter && map.has_city() {
        return Err(PlannerError::CityAlreadyExists);
    }
    let tile = map.get_mut(&coord).ok_or(PlannerError::TileNotFound(coord))?;
    tile.district = district;

    if district == District::CityCenter {
        map.make_city(coord, false)?;
    } else if let Some(city) = map.city_mut() {
        city.add_district(district);
    }
    Ok(())
}

fn placement_reward(
    config: &EngineConfig,
    map: &CivMap,
    district: District,
    coord: &HexCoord,
    delta: f64,
) -> f64 {
    if district != District::CityCenter {
        return delta + config.district_placement_bonus;
    }

    let surroundings = map.get(coord).map_or(0.0, |tile| tile_score(tile).sum());
    delta * config.city_center_delta_scale
        + surroundings * config.city_center_tile_weight
        + base_city_housing(map, coord) as f64
}
