//! A single hex tile and its placement-relevant attributes

use crate::core::types::{District, Feature, Improvement, Resource, ResourceType, Terrain};
use crate::map::city::CityId;
use crate::map::hex::HexCoord;

/// A hex tile on the district map
///
/// `rivers[i]` marks a river on the edge shared with the neighbor in
/// direction `i` (see `HexDirection::ALL`).
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub coord: HexCoord,
    pub terrain: Terrain,
    pub feature: Feature,
    pub hill: bool,
    pub mountain: bool,
    /// Lake/mountain range numbering from the map editor; not used by rules
    pub mountain_no: i32,
    pub district: District,
    pub resource: Resource,
    pub resource_type: ResourceType,
    pub improvement: Improvement,
    pub rivers: [bool; 6],
    pub within_city_limits: bool,
    /// Claiming city, resolved through the owning map's city table
    pub city: Option<CityId>,
}

impl Tile {
    /// Bare grassland tile with no feature, resource or district
    pub fn new(coord: HexCoord) -> Self {
        Self {
            coord,
            terrain: Terrain::Grassland,
            feature: Feature::None,
            hill: false,
            mountain: false,
            mountain_no: 1,
            district: District::None,
            resource: Resource::None,
            resource_type: ResourceType::None,
            improvement: Improvement::None,
            rivers: [false; 6],
            within_city_limits: false,
            city: None,
        }
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.feature = feature;
        self
    }

    pub fn with_hill(mut self) -> Self {
        self.hill = true;
        self
    }

    pub fn with_mountain(mut self) -> Self {
        self.mountain = true;
        self
    }

    pub fn with_resource(mut self, resource: Resource, resource_type: ResourceType) -> Self {
        self.resource = resource;
        self.resource_type = resource_type;
        self
    }

    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }

    pub fn with_district(mut self, district: District) -> Self {
        self.district = district;
        self
    }

    pub fn with_river_edge(mut self, edge: usize) -> Self {
        self.rivers[edge % 6] = true;
        self
    }

    pub fn has_district(&self) -> bool {
        self.district != District::None
    }

    /// True when any edge carries a river
    pub fn has_river(&self) -> bool {
        self.rivers.iter().any(|&r| r)
    }

    pub fn river_edge_count(&self) -> usize {
        self.rivers.iter().filter(|&&r| r).count()
    }

    /// Feature as seen by adjacency scoring: districts clear everything but floodplains
    pub fn effective_feature(&self) -> Feature {
        if self.has_district() && self.feature != Feature::Floodplains {
            Feature::None
        } else {
            self.feature
        }
    }

    /// Resource type as seen by adjacency scoring: only city centers keep it
    pub fn effective_resource_type(&self) -> ResourceType {
        if matches!(self.district, District::None | District::CityCenter) {
            self.resource_type
        } else {
            ResourceType::None
        }
    }

    /// Resource as seen by adjacency scoring: only city centers keep it
    pub fn effective_resource(&self) -> Resource {
        if matches!(self.district, District::None | District::CityCenter) {
            self.resource
        } else {
            Resource::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_river_helpers() {
        let tile = Tile::new(HexCoord::ORIGIN);
        assert!(!tile.has_river());
        let tile = tile.with_river_edge(0).with_river_edge(3);
        assert!(tile.has_river());
        assert_eq!(tile.river_edge_count(), 2);
    }

    #[test]
    fn test_floodplains_survive_district() {
        let tile = Tile::new(HexCoord::ORIGIN)
            .with_feature(Feature::Floodplains)
            .with_district(District::Campus);
        assert_eq!(tile.effective_feature(), Feature::Floodplains);

        let tile = Tile::new(HexCoord::ORIGIN)
            .with_feature(Feature::Woods)
            .with_district(District::Campus);
        assert_eq!(tile.effective_feature(), Feature::None);
    }

    #[test]
    fn test_city_center_keeps_resource() {
        let base = Tile::new(HexCoord::ORIGIN).with_resource(Resource::Iron, ResourceType::Strategic);
        assert_eq!(base.effective_resource_type(), ResourceType::Strategic);

        let center = base.clone().with_district(District::CityCenter);
        assert_eq!(center.effective_resource(), Resource::Iron);
        assert_eq!(center.effective_resource_type(), ResourceType::Strategic);

        let campus = base.with_district(District::Campus);
        assert_eq!(campus.effective_resource(), Resource::None);
        assert_eq!(campus.effective_resource_type(), ResourceType::None);
    }
}
