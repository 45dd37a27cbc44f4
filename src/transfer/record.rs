//! Boundary tile record: the JSON shape maps are exchanged in

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::{
    District, Feature, Improvement, Resource, ResourceType, Terrain, YieldType,
};
use crate::map::{HexCoord, Tile};

/// Per-tile yields as written to the boundary format
pub type YieldRecord = BTreeMap<YieldType, f64>;

/// One tile of a boundary map, keyed externally by `"q,r"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub q: i32,
    pub r: i32,
    pub terrain: Terrain,
    pub hill: bool,
    pub mountain: bool,
    #[serde(rename = "mountain_no")]
    pub mountain_no: i32,
    pub feature: Feature,
    pub district: District,
    pub resource: Resource,
    pub resource_type: ResourceType,
    pub improvement: Improvement,
    pub rivers: [bool; 6],
    /// Output only; ignored on input
    #[serde(default)]
    pub yields: YieldRecord,
    pub within_city_limits: bool,
}

impl TileRecord {
    pub fn coord(&self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }

    /// Map tile with no city back-reference
    pub fn to_tile(&self) -> Tile {
        Tile {
            coord: self.coord(),
            terrain: self.terrain,
            feature: self.feature,
            hill: self.hill,
            mountain: self.mountain,
            mountain_no: self.mountain_no,
            district: self.district,
            resource: self.resource,
            resource_type: self.resource_type,
            improvement: self.improvement,
            rivers: self.rivers,
            within_city_limits: self.within_city_limits,
            city: None,
        }
    }
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            q: tile.coord.q,
            r: tile.coord.r,
            terrain: tile.terrain,
            hill: tile.hill,
            mountain: tile.mountain,
            mountain_no: tile.mountain_no,
            feature: tile.feature,
            district: tile.district,
            resource: tile.resource,
            resource_type: tile.resource_type,
            improvement: tile.improvement,
            rivers: tile.rivers,
            yields: YieldRecord::new(),
            within_city_limits: tile.within_city_limits,
        }
    }
}

/// Floor each value and keep only the strictly positive ones
pub fn floored_yields<'a>(values: impl IntoIterator<Item = (&'a YieldType, &'a f64)>) -> YieldRecord {
    values
        .into_iter()
        .map(|(y, v)| (*y, v.floor()))
        .filter(|(_, v)| *v > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "q": 1, "r": -1,
        "terrain": "plains", "hill": true, "mountain": false, "mountain_no": 0,
        "feature": "woods", "district": "none", "resource": "deer",
        "resourceType": "bonus", "improvement": "camp",
        "rivers": [false, true, false, false, false, false],
        "withinCityLimits": true
    }"#;

    #[test]
    fn test_parse_record_without_yields() {
        let record: TileRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.coord(), HexCoord::new(1, -1));
        assert_eq!(record.resource_type, ResourceType::Bonus);
        assert!(record.yields.is_empty());

        let tile = record.to_tile();
        assert_eq!(tile.feature, Feature::Woods);
        assert_eq!(tile.river_edge_count(), 1);
        assert!(tile.within_city_limits);
        assert!(tile.city.is_none());
    }

    #[test]
    fn test_serialized_key_names() {
        let record = TileRecord::from(&Tile::new(HexCoord::ORIGIN));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["resourceType"], "none");
        assert_eq!(json["withinCityLimits"], false);
        assert_eq!(json["mountain_no"], 1);
        assert_eq!(json["terrain"], "grassland");
    }

    #[test]
    fn test_unknown_tag_fails_validation() {
        let bad = RECORD.replace("\"plains\"", "\"swamp\"");
        assert!(serde_json::from_str::<TileRecord>(&bad).is_err());
    }

    #[test]
    fn test_floored_yields_drop_non_positive() {
        let values = BTreeMap::from([
            (YieldType::Food, 2.5),
            (YieldType::Gold, 0.5),
            (YieldType::Science, 0.0),
        ]);
        let out = floored_yields(&values);
        assert_eq!(out, BTreeMap::from([(YieldType::Food, 2.0)]));
    }
}
