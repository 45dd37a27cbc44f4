//! City model: a bounded disk of tiles around a center

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::types::District;
use crate::map::hex::HexCoord;

/// Unique city identifier (index into the map's city table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(pub u32);

/// Fixed-size bitset of district kinds, indexed by `District::index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DistrictSet(u32);

impl DistrictSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, district: District) {
        self.0 |= 1 << district.index();
    }

    pub fn contains(&self, district: District) -> bool {
        self.0 & (1 << district.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = District> + '_ {
        District::ALL.iter().copied().filter(|d| self.contains(*d))
    }
}

/// The single city on a map
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    pub center: HexCoord,
    /// Member tile coordinates (existing map tiles within the city radius)
    pub tiles: AHashSet<HexCoord>,
    pub districts_built: DistrictSet,
}

impl City {
    pub fn new(id: CityId, center: HexCoord) -> Self {
        Self {
            id,
            center,
            tiles: AHashSet::new(),
            districts_built: DistrictSet::new(),
        }
    }

    /// False if already built, or if the mutually exclusive partner is built
    pub fn can_build(&self, district: District) -> bool {
        if self.districts_built.contains(district) {
            return false;
        }
        match district.exclusive_with() {
            Some(other) => !self.districts_built.contains(other),
            None => true,
        }
    }

    pub fn add_district(&mut self, district: District) {
        self.districts_built.insert(district);
    }

    pub fn contains(&self, coord: &HexCoord) -> bool {
        self.tiles.contains(coord)
    }
}
