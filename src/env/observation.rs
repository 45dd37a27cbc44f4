//! Multi-channel grid observation of the map

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_OBSERVABLE_RADIUS;
use crate::core::types::{District, Feature, Resource, ResourceType, Terrain};
use crate::map::{CivMap, Tile};

/// Side length of the observation window
pub const GRID: usize = (2 * MAX_OBSERVABLE_RADIUS + 1) as usize;

pub const TERRAIN_BASE: usize = 0;
pub const FEATURE_BASE: usize = TERRAIN_BASE + Terrain::COUNT;
pub const DISTRICT_BASE: usize = FEATURE_BASE + Feature::COUNT;
pub const RESOURCE_BASE: usize = DISTRICT_BASE + District::COUNT;
pub const RESOURCE_TYPE_BASE: usize = RESOURCE_BASE + Resource::COUNT;
/// Hill, mountain, any river edge, within city limits
pub const BINARY_BASE: usize = RESOURCE_TYPE_BASE + ResourceType::COUNT;
pub const CHANNELS: usize = BINARY_BASE + 4;

/// Dense `[CHANNELS, GRID, GRID]` tensor of 0/1 values, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    data: Vec<f32>,
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            data: vec![0.0; CHANNELS * GRID * GRID],
        }
    }
}

impl Observation {
    /// Encode every tile of the map; tile (q, r) lands at (q + 4, r + 4)
    pub fn from_map(map: &CivMap) -> Self {
        let mut obs = Self::default();
        for tile in map.tiles.values() {
            obs.write_tile(tile);
        }
        obs
    }

    fn write_tile(&mut self, tile: &Tile) {
        let offset = MAX_OBSERVABLE_RADIUS;
        let (Ok(x), Ok(y)) = (
            usize::try_from(tile.coord.q + offset),
            usize::try_from(tile.coord.r + offset),
        ) else {
            return;
        };
        if x >= GRID || y >= GRID {
            return;
        }

        let flags = [
            tile.hill,
            tile.mountain,
            tile.has_river(),
            tile.within_city_limits,
        ];
        let one_hot = [
            TERRAIN_BASE + tile.terrain.index(),
            FEATURE_BASE + tile.feature.index(),
            DISTRICT_BASE + tile.district.index(),
            RESOURCE_BASE + tile.resource.index(),
            RESOURCE_TYPE_BASE + tile.resource_type.index(),
        ];

        for channel in one_hot {
            self.set(channel, x, y, 1.0);
        }
        for (i, flag) in flags.into_iter().enumerate() {
            if flag {
                self.set(BINARY_BASE + i, x, y, 1.0);
            }
        }
    }

    fn set(&mut self, channel: usize, x: usize, y: usize, value: f32) {
        self.data[(channel * GRID + x) * GRID + y] = value;
    }

    pub fn get(&self, channel: usize, x: usize, y: usize) -> f32 {
        self.data[(channel * GRID + x) * GRID + y]
    }

    /// Shape as (channels, rows, columns)
    pub fn shape(&self) -> (usize, usize, usize) {
        (CHANNELS, GRID, GRID)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HexCoord;

    #[test]
    fn test_channel_layout() {
        assert_eq!(GRID, 9);
        assert_eq!(FEATURE_BASE, 8);
        assert_eq!(DISTRICT_BASE, 22);
        assert_eq!(RESOURCE_BASE, 42);
        assert_eq!(RESOURCE_TYPE_BASE, 97);
        assert_eq!(CHANNELS, 106);
    }

    #[test]
    fn test_empty_map_encoding() {
        let obs = Observation::from_map(&CivMap::empty(4));
        assert_eq!(obs.as_slice().len(), 106 * 81);
        // center tile: grassland, no feature, no district
        assert_eq!(obs.get(TERRAIN_BASE, 4, 4), 1.0);
        assert_eq!(obs.get(FEATURE_BASE, 4, 4), 1.0);
        assert_eq!(obs.get(DISTRICT_BASE, 4, 4), 1.0);
        // (-4, -4) is outside the radius 4 disk
        assert_eq!(obs.get(TERRAIN_BASE, 0, 0), 0.0);
        // 61 tiles, one terrain bit each
        let terrain_bits: f32 = (0..GRID)
            .flat_map(|x| (0..GRID).map(move |y| (x, y)))
            .map(|(x, y)| obs.get(TERRAIN_BASE, x, y))
            .sum();
        assert_eq!(terrain_bits, 61.0);
    }

    #[test]
    fn test_axial_offset_and_flags() {
        let mut map = CivMap::empty(4);
        {
            let tile = map.get_mut(&HexCoord::new(2, -3)).unwrap();
            tile.terrain = Terrain::Coast;
            tile.hill = true;
            tile.rivers[4] = true;
        }
        let obs = Observation::from_map(&map);
        assert_eq!(obs.get(TERRAIN_BASE + Terrain::Coast.index(), 6, 1), 1.0);
        assert_eq!(obs.get(TERRAIN_BASE, 6, 1), 0.0);
        assert_eq!(obs.get(BINARY_BASE, 6, 1), 1.0);
        assert_eq!(obs.get(BINARY_BASE + 1, 6, 1), 0.0);
        assert_eq!(obs.get(BINARY_BASE + 2, 6, 1), 1.0);
        assert_eq!(obs.get(BINARY_BASE + 3, 6, 1), 0.0);
    }
}
