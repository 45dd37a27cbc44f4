//! Dense integer action space over (district, tile) pairs

use crate::core::error::{PlannerError, Result};
use crate::core::types::District;
use crate::map::{CivMap, HexCoord};

/// Fixed enumeration of placeable districts and map tiles
///
/// Action `a` decodes to `districts[a / tiles.len()]` at
/// `tiles[a % tiles.len()]`. Both lists are frozen at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpace {
    districts: Vec<District>,
    tiles: Vec<HexCoord>,
}

impl ActionSpace {
    pub fn new(map: &CivMap) -> Self {
        Self {
            districts: District::placeable().collect(),
            tiles: map.sorted_coords(),
        }
    }

    /// Total number of actions
    pub fn size(&self) -> usize {
        self.districts.len() * self.tiles.len()
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn tiles(&self) -> &[HexCoord] {
        &self.tiles
    }

    pub fn n_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Position of a district in the district enumeration
    pub fn district_index(&self, district: District) -> Option<usize> {
        self.districts.iter().position(|d| *d == district)
    }

    pub fn tile_index(&self, coord: &HexCoord) -> Option<usize> {
        self.tiles.binary_search(coord).ok()
    }

    pub fn decode(&self, action: usize) -> Result<(District, HexCoord)> {
        let size = self.size();
        if action >= size {
            return Err(PlannerError::ActionOutOfRange { action, size });
        }
        let n = self.tiles.len();
        Ok((self.districts[action / n], self.tiles[action % n]))
    }

    pub fn encode(&self, district: District, coord: &HexCoord) -> Option<usize> {
        let d = self.district_index(district)?;
        let t = self.tile_index(coord)?;
        Some(d * self.tiles.len() + t)
    }
}
