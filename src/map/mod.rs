//! Map layer - hex geometry, tiles and the city

pub mod city;
pub mod civ_map;
pub mod hex;
pub mod tile;

pub use city::{City, CityId, DistrictSet};
pub use civ_map::{CivMap, DEFAULT_CITY_RADIUS};
pub use hex::{HexCoord, HexDirection};
pub use tile::Tile;
