//! Read and write boundary-format maps
//!
//! A boundary map is a JSON object from `"q,r"` keys to `TileRecord`s.
//! Records that fail validation are logged and skipped; the map simply
//! lacks those coordinates.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::core::error::Result;
use crate::map::{CivMap, HexCoord};
use crate::transfer::record::{floored_yields, TileRecord};
use crate::yields::get_score;

/// Parse a boundary map into tiles only, keeping the city-limits flags as given
pub fn load_tiles_from_str(json: &str) -> Result<CivMap> {
    let entries: BTreeMap<String, Value> = serde_json::from_str(json)?;

    let mut map = CivMap::new(0);
    for (key, value) in entries {
        let coord = match key.parse::<HexCoord>() {
            Ok(coord) => coord,
            Err(e) => {
                tracing::error!("Skipping tile record: {}", e);
                continue;
            }
        };
        let record: TileRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to validate tile at {}: {}", coord, e);
                continue;
            }
        };
        if record.coord() != coord {
            tracing::error!(
                "Failed to validate tile at {}: record says {}",
                coord,
                record.coord()
            );
            continue;
        }

        map.radius = map.radius.max(coord.distance(&HexCoord::ORIGIN) as i32);
        map.insert(record.to_tile());
    }

    tracing::debug!("Loaded {} tiles", map.len());
    Ok(map)
}

/// Parse a boundary map and found the city at its designated center
pub fn load_map_from_str(json: &str) -> Result<CivMap> {
    let mut map = load_tiles_from_str(json)?;
    if let Some(center) = map.find_city_center() {
        map.make_city(center, true)?;
    }
    Ok(map)
}

pub fn load_map_from_path(path: &Path) -> Result<CivMap> {
    let content = std::fs::read_to_string(path)?;
    load_map_from_str(&content)
}

pub fn load_tiles_from_path(path: &Path) -> Result<CivMap> {
    let content = std::fs::read_to_string(path)?;
    load_tiles_from_str(&content)
}

/// Boundary records for every tile, with floored positive yields attached
pub fn map_to_records(map: &CivMap) -> BTreeMap<String, TileRecord> {
    let score = get_score(map);

    map.tiles
        .values()
        .map(|tile| {
            let mut record = TileRecord::from(tile);
            if let Some(breakdown) = score.tiles.get(&tile.coord) {
                record.yields = floored_yields(breakdown);
            }
            (tile.coord.to_string(), record)
        })
        .collect()
}

pub fn map_to_json(map: &CivMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(&map_to_records(map))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{District, Terrain, YieldType};

    fn record_json(q: i32, r: i32, district: &str, within: bool) -> String {
        format!(
            r#""{q},{r}": {{
                "q": {q}, "r": {r},
                "terrain": "grassland", "hill": false, "mountain": false, "mountain_no": 1,
                "feature": "none", "district": "{district}", "resource": "none",
                "resourceType": "none", "improvement": "none",
                "rivers": [false, false, false, false, false, false],
                "yields": {{}},
                "withinCityLimits": {within}
            }}"#
        )
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let json = format!(
            "{{{}, {}, \"x,y\": {{}}, \"2,0\": {{\"q\": 2}}}}",
            record_json(0, 0, "none", false),
            record_json(1, 0, "none", false)
        );
        let map = load_tiles_from_str(&json).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains(&HexCoord::new(1, 0)));
        assert!(!map.contains(&HexCoord::new(2, 0)));
    }

    #[test]
    fn test_mismatched_key_skipped() {
        let json = format!("{{{}}}", record_json(0, 0, "none", false).replacen("\"0,0\"", "\"1,1\"", 1));
        assert!(load_tiles_from_str(&json).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(load_tiles_from_str("[1, 2]").is_err());
    }

    #[test]
    fn test_city_recreated_from_center() {
        let json = format!(
            "{{{}, {}, {}}}",
            record_json(0, 0, "city_center", false),
            record_json(1, 0, "campus", false),
            record_json(5, 0, "none", true)
        );
        let map = load_map_from_str(&json).unwrap();
        let city = map.city().unwrap();
        assert_eq!(city.center, HexCoord::ORIGIN);
        assert_eq!(city.tiles.len(), 2);
        assert!(city.districts_built.contains(District::Campus));
        assert!(map.get(&HexCoord::new(1, 0)).unwrap().within_city_limits);
        // flags outside the city radius are kept as given
        assert!(map.get(&HexCoord::new(5, 0)).unwrap().within_city_limits);
        assert_eq!(map.radius, 5);
    }

    #[test]
    fn test_tiles_only_load_has_no_city() {
        let json = format!("{{{}}}", record_json(0, 0, "city_center", true));
        let map = load_tiles_from_str(&json).unwrap();
        assert!(!map.has_city());
        assert_eq!(map.placements().count(), 1);
    }

    #[test]
    fn test_records_carry_floored_yields() {
        let mut map = CivMap::empty(1);
        map.get_mut(&HexCoord::ORIGIN).unwrap().terrain = Terrain::Plains;
        map.get_mut(&HexCoord::new(1, 0)).unwrap().district = District::Campus;

        let records = map_to_records(&map);
        assert_eq!(records.len(), 7);
        let origin = &records["0,0"];
        assert_eq!(origin.yields[&YieldType::Food], 1.0);
        assert_eq!(origin.yields[&YieldType::Production], 1.0);
        assert!(!origin.yields.contains_key(&YieldType::Gold));
        // (1,0) has 3 neighbors on a radius 1 map, each matching the mountain source
        assert_eq!(records["1,0"].yields[&YieldType::Science], 3.0);
    }

    #[test]
    fn test_json_round_trip_keeps_tiles() {
        let mut map = CivMap::empty(2);
        map.get_mut(&HexCoord::ORIGIN).unwrap().district = District::CityCenter;
        map.make_city(HexCoord::ORIGIN, false).unwrap();

        let json = map_to_json(&map).unwrap();
        let loaded = load_map_from_str(&json).unwrap();
        assert_eq!(loaded.len(), map.len());
        assert_eq!(loaded.city().unwrap().tiles.len(), 19);
    }
}
