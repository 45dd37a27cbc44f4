//! Memoization stores for the environment
//!
//! Two stores with different lifetimes:
//! - `RuleCache` lives as long as the environment. Its keys are tile
//!   attributes only, never map topology, so entries stay valid across
//!   resets and templates.
//! - `EpisodeCache` is keyed by the placement `Signature` and is cleared
//!   on every reset.

use ahash::AHashMap;

use crate::core::types::{District, Feature, ResourceType, Terrain};
use crate::map::{CivMap, HexCoord, Tile};
use crate::placement::{check_rules, PlacementClass};

/// Sorted (coordinate, district) pairs of every placed district
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(Vec<(HexCoord, District)>);

impl Signature {
    pub fn of(map: &CivMap) -> Self {
        let mut pairs: Vec<(HexCoord, District)> = map.placements().collect();
        pairs.sort_unstable();
        Self(pairs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(HexCoord, District)] {
        &self.0
    }
}

/// Local attributes a tile-only placement class depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub class: PlacementClass,
    pub terrain: Terrain,
    pub hill: bool,
    pub mountain: bool,
    pub feature: Feature,
    pub resource_type: ResourceType,
}

impl TileKey {
    fn new(class: PlacementClass, tile: &Tile) -> Self {
        Self {
            class,
            terrain: tile.terrain,
            hill: tile.hill,
            mountain: tile.mountain,
            feature: tile.feature,
            resource_type: tile.resource_type,
        }
    }
}

/// Tile attributes plus the neighbor attributes a rule looks at
///
/// Each slot holds the neighbor's terrain and whether it is a city center,
/// `None` past the map edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborKey {
    pub tile: TileKey,
    pub neighbors: [Option<(Terrain, bool)>; 6],
}

/// Instance-lifetime caches: hex distances and rule evaluations
#[derive(Debug, Clone, Default)]
pub struct RuleCache {
    distances: AHashMap<(HexCoord, HexCoord), u32>,
    tile_only: AHashMap<TileKey, bool>,
    neighbor: AHashMap<NeighborKey, bool>,
}

impl RuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hex distance between two coordinates
    pub fn hex_distance(&mut self, a: HexCoord, b: HexCoord) -> u32 {
        *self.distances.entry((a, b)).or_insert_with(|| a.distance(&b))
    }

    /// Memoized placement legality
    ///
    /// Non city-center districts are rejected outside city limits before any
    /// lookup, so the keys never need the city-limits flag.
    pub fn can_place(&mut self, map: &CivMap, district: District, coord: &HexCoord) -> bool {
        let Some(tile) = map.get(coord) else {
            return false;
        };
        let Some(class) = PlacementClass::of(district) else {
            return false;
        };
        if district != District::CityCenter && !tile.within_city_limits {
            return false;
        }

        let slots = map.neighbor_slots(coord);
        let evaluate = || check_rules(class.rules(), tile, &slots);

        match class {
            PlacementClass::Standard | PlacementClass::Aerial | PlacementClass::CityCenter => {
                let key = TileKey::new(class, tile);
                *self.tile_only.entry(key).or_insert_with(|| {
                    tracing::debug!("rule cache miss: {:?}", key);
                    evaluate()
                })
            }
            PlacementClass::Coast | PlacementClass::Preserve | PlacementClass::Encampment => {
                let key = NeighborKey {
                    tile: TileKey::new(class, tile),
                    neighbors: slots
                        .map(|n| n.map(|n| (n.terrain, n.district == District::CityCenter))),
                };
                *self.neighbor.entry(key).or_insert_with(|| {
                    tracing::debug!("neighbor rule cache miss: {:?}", key.tile);
                    evaluate()
                })
            }
            PlacementClass::Aqueduct | PlacementClass::Dam | PlacementClass::Canal => evaluate(),
        }
    }

    /// Number of memoized rule evaluations
    pub fn rule_entries(&self) -> usize {
        self.tile_only.len() + self.neighbor.len()
    }
}

/// Episode-lifetime caches keyed by placement signature
#[derive(Debug, Clone, Default)]
pub struct EpisodeCache {
    pub scores: AHashMap<Signature, f64>,
    pub action_masks: AHashMap<Signature, Vec<bool>>,
    pub tile_masks: AHashMap<(Signature, District), Vec<bool>>,
}

impl EpisodeCache {
    pub fn clear(&mut self) {
        self.scores.clear();
        self.action_masks.clear();
        self.tile_masks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty() && self.action_masks.is_empty() && self.tile_masks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::can_place_district;

    fn city_map() -> CivMap {
        let mut map = CivMap::empty(4);
        map.get_mut(&HexCoord::ORIGIN).unwrap().district = District::CityCenter;
        map.make_city(HexCoord::ORIGIN, false).unwrap();
        map
    }

    #[test]
    fn test_signature_ignores_empty_tiles_and_order() {
        let mut a = CivMap::empty(4);
        assert!(Signature::of(&a).is_empty());

        a.get_mut(&HexCoord::new(1, 0)).unwrap().district = District::Campus;
        a.get_mut(&HexCoord::new(-1, 0)).unwrap().district = District::HolySite;
        let sig = Signature::of(&a);
        assert_eq!(sig.len(), 2);
        assert_eq!(sig.pairs()[0], (HexCoord::new(-1, 0), District::HolySite));
        assert_eq!(sig, Signature::of(&a.clone()));
    }

    #[test]
    fn test_cached_matches_uncached() {
        let mut map = city_map();
        map.get_mut(&HexCoord::new(2, 0)).unwrap().terrain = Terrain::Coast;
        map.get_mut(&HexCoord::new(0, 2)).unwrap().hill = true;
        let mut cache = RuleCache::new();

        for _ in 0..2 {
            for coord in map.sorted_coords() {
                for district in District::placeable() {
                    assert_eq!(
                        cache.can_place(&map, district, &coord),
                        can_place_district(&map, district, &coord),
                        "{} at {}",
                        district,
                        coord
                    );
                }
            }
        }
    }

    #[test]
    fn test_preserve_cache_keys_on_city_center_neighbor() {
        let map = city_map();
        let mut cache = RuleCache::new();
        // same local attributes, different neighbors
        assert!(!cache.can_place(&map, District::Preserve, &HexCoord::new(1, 0)));
        assert!(cache.can_place(&map, District::Preserve, &HexCoord::new(2, 0)));
    }

    #[test]
    fn test_outside_city_limits_rejected() {
        let map = city_map();
        let mut cache = RuleCache::new();
        assert!(!cache.can_place(&map, District::Campus, &HexCoord::new(4, 0)));
        assert!(cache.can_place(&map, District::Campus, &HexCoord::new(3, 0)));
        assert_eq!(cache.rule_entries(), 1);
    }

    #[test]
    fn test_hex_distance_cached() {
        let mut cache = RuleCache::new();
        assert_eq!(cache.hex_distance(HexCoord::ORIGIN, HexCoord::new(2, -1)), 2);
        assert_eq!(cache.hex_distance(HexCoord::ORIGIN, HexCoord::new(2, -1)), 2);
    }

    #[test]
    fn test_episode_cache_clear() {
        let mut cache = EpisodeCache::default();
        cache.scores.insert(Signature::default(), 1.0);
        cache
            .tile_masks
            .insert((Signature::default(), District::Campus), vec![true]);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
