//! The district map: tiles keyed by coordinate plus at most one city

use ahash::AHashMap;

use crate::core::error::{PlannerError, Result};
use crate::core::types::District;
use crate::map::city::{City, CityId};
use crate::map::hex::HexCoord;
use crate::map::tile::Tile;

/// Default radius of the city's tile disk
pub const DEFAULT_CITY_RADIUS: i32 = 3;

/// Tiles plus the (single) city placed on them
#[derive(Debug, Clone, PartialEq)]
pub struct CivMap {
    pub tiles: AHashMap<HexCoord, Tile>,
    pub cities: Vec<City>,
    /// Radius used when generating an empty map
    pub radius: i32,
    pub city_radius: i32,
}

impl Default for CivMap {
    fn default() -> Self {
        Self::new(4)
    }
}

impl CivMap {
    /// Create a map with no tiles
    pub fn new(radius: i32) -> Self {
        Self {
            tiles: AHashMap::new(),
            cities: Vec::new(),
            radius,
            city_radius: DEFAULT_CITY_RADIUS,
        }
    }

    /// Full hex disk of `radius`, every tile bare grassland
    pub fn empty(radius: i32) -> Self {
        let mut map = Self::new(radius);
        for coord in HexCoord::ORIGIN.hexes_in_range(radius) {
            map.tiles.insert(coord, Tile::new(coord));
        }
        map
    }

    /// Insert or replace a tile at its own coordinate
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.coord, tile);
    }

    pub fn get(&self, coord: &HexCoord) -> Option<&Tile> {
        self.tiles.get(coord)
    }

    pub fn get_mut(&mut self, coord: &HexCoord) -> Option<&mut Tile> {
        self.tiles.get_mut(coord)
    }

    pub fn contains(&self, coord: &HexCoord) -> bool {
        self.tiles.contains_key(coord)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Coordinates in (q, r) order; this order is stable across clones
    pub fn sorted_coords(&self) -> Vec<HexCoord> {
        let mut coords: Vec<HexCoord> = self.tiles.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Neighbor slots in edge order; `None` where the map has no tile
    pub fn neighbor_slots(&self, coord: &HexCoord) -> [Option<&Tile>; 6] {
        coord.neighbors().map(|n| self.tiles.get(&n))
    }

    /// Existing neighbors only, in edge order
    pub fn neighbors(&self, coord: &HexCoord) -> Vec<&Tile> {
        self.neighbor_slots(coord).into_iter().flatten().collect()
    }

    pub fn city(&self) -> Option<&City> {
        self.cities.first()
    }

    pub fn city_mut(&mut self) -> Option<&mut City> {
        self.cities.first_mut()
    }

    pub fn has_city(&self) -> bool {
        !self.cities.is_empty()
    }

    /// Resolve a tile's back-reference through the city table
    pub fn city_of(&self, coord: &HexCoord) -> Option<&City> {
        let id = self.tiles.get(coord)?.city?;
        self.cities.iter().find(|c| c.id == id)
    }

    /// Found the city centered at `center`
    ///
    /// Only one city is allowed. With `allow_overwrite` the existing city's
    /// tile membership is torn down and replaced, which is how maps that
    /// already designate a city center are loaded.
    pub fn make_city(&mut self, center: HexCoord, allow_overwrite: bool) -> Result<CityId> {
        if self.has_city() && !allow_overwrite {
            return Err(PlannerError::CityAlreadyExists);
        }
        if !self.contains(&center) {
            return Err(PlannerError::TileNotFound(center));
        }

        if self.has_city() {
            for index in 0..self.cities.len() {
                self.remove_city_tiles(index);
            }
            self.cities.clear();
        }

        let id = CityId(0);
        let mut city = City::new(id, center);
        for coord in center.hexes_in_range(self.city_radius) {
            if let Some(tile) = self.tiles.get_mut(&coord) {
                tile.within_city_limits = true;
                tile.city = Some(id);
                city.tiles.insert(coord);
                if tile.district != District::None {
                    city.districts_built.insert(tile.district);
                }
            }
        }

        tracing::debug!(
            "City {:?} founded at {} with {} tiles",
            id,
            center,
            city.tiles.len()
        );
        self.cities.push(city);
        Ok(id)
    }

    /// Release every member tile of a city, leaving its district bitset alone
    fn remove_city_tiles(&mut self, index: usize) {
        let Some(city) = self.cities.get_mut(index) else {
            return;
        };
        for coord in city.tiles.drain() {
            if let Some(tile) = self.tiles.get_mut(&coord) {
                tile.within_city_limits = false;
                tile.city = None;
            }
        }
    }

    /// (coordinate, district) pairs for every tile carrying a district
    pub fn placements(&self) -> impl Iterator<Item = (HexCoord, District)> + '_ {
        self.tiles
            .values()
            .filter(|t| t.has_district())
            .map(|t| (t.coord, t.district))
    }

    /// Coordinate of the first tile carrying a city center, if any
    pub fn find_city_center(&self) -> Option<HexCoord> {
        self.sorted_coords()
            .into_iter()
            .find(|c| {
                self.tiles
                    .get(c)
                    .is_some_and(|t| t.district == District::CityCenter)
            })
    }
}
