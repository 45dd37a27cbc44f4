//! Static district placement rule tables
//!
//! Districts are bucketed into placement classes; every class owns one
//! immutable rule record.

use serde::{Deserialize, Serialize};

use crate::core::types::{District, Feature, ResourceType, Terrain};

/// Named bucket of districts sharing one legality rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlacementClass {
    Standard,
    Coast,
    Aerial,
    CityCenter,
    Preserve,
    Aqueduct,
    Encampment,
    Dam,
    Canal,
}

impl PlacementClass {
    pub const ALL: [PlacementClass; 9] = [
        PlacementClass::Standard,
        PlacementClass::Coast,
        PlacementClass::Aerial,
        PlacementClass::CityCenter,
        PlacementClass::Preserve,
        PlacementClass::Aqueduct,
        PlacementClass::Encampment,
        PlacementClass::Dam,
        PlacementClass::Canal,
    ];

    /// Placement class of a district; `None` has no class
    pub fn of(district: District) -> Option<PlacementClass> {
        let class = match district {
            District::None => return None,
            District::Campus
            | District::DiplomaticQuarter
            | District::CommercialHub
            | District::EntertainmentComplex
            | District::GovernmentPlaza
            | District::HolySite
            | District::IndustrialZone
            | District::Neighborhood
            | District::TheaterSquare => PlacementClass::Standard,
            District::Harbor | District::WaterPark => PlacementClass::Coast,
            District::Aerodrome | District::Spaceport => PlacementClass::Aerial,
            District::CityCenter => PlacementClass::CityCenter,
            District::Preserve => PlacementClass::Preserve,
            District::Aqueduct => PlacementClass::Aqueduct,
            District::Encampment => PlacementClass::Encampment,
            District::Dam => PlacementClass::Dam,
            District::Canal => PlacementClass::Canal,
        };
        Some(class)
    }

    /// The immutable rule record for this class
    pub fn rules(self) -> &'static DistrictPlacementRules {
        match self {
            PlacementClass::Standard => &STANDARD_RULES,
            PlacementClass::Coast => &COAST_RULES,
            PlacementClass::Aerial => &AERIAL_RULES,
            PlacementClass::CityCenter => &CITY_CENTER_RULES,
            PlacementClass::Preserve => &PRESERVE_RULES,
            PlacementClass::Aqueduct => &AQUEDUCT_RULES,
            PlacementClass::Encampment => &ENCAMPMENT_RULES,
            PlacementClass::Dam => &DAM_RULES,
            PlacementClass::Canal => &CANAL_RULES,
        }
    }
}

/// Legality rule set for one placement class
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictPlacementRules {
    pub requires_city: bool,
    pub invalid_terrain: &'static [Terrain],
    pub required_terrain: Option<&'static [Terrain]>,
    pub invalid_features: &'static [Feature],
    pub required_features: Option<&'static [Feature]>,
    pub invalid_resource_types: &'static [ResourceType],
    pub requires_flat_land: bool,
    /// At least one neighbor with non-ocean, non-coast terrain
    pub requires_adjacent_land: bool,
    pub requires_city_center: bool,
    pub requires_no_city_center: bool,
    /// Mountain, oasis or lake neighbor, or a river edge not facing the city center
    pub requires_freshwater: bool,
    pub requires_two_river_edges: bool,
    /// Water or city center on two non-adjacent sides
    pub requires_canal_connectivity: bool,
}

const WATER: &[Terrain] = &[Terrain::Coast, Terrain::Ocean, Terrain::Lake];
const HAZARDS: &[Feature] = &[Feature::GeothermalFissure, Feature::Volcano];
const SPECIAL_RESOURCES: &[ResourceType] = &[
    ResourceType::Strategic,
    ResourceType::Luxury,
    ResourceType::Artifact,
];

const BASE_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city: false,
    invalid_terrain: &[],
    required_terrain: None,
    invalid_features: &[],
    required_features: None,
    invalid_resource_types: &[],
    requires_flat_land: false,
    requires_adjacent_land: false,
    requires_city_center: false,
    requires_no_city_center: false,
    requires_freshwater: false,
    requires_two_river_edges: false,
    requires_canal_connectivity: false,
};

pub const STANDARD_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city: true,
    invalid_terrain: WATER,
    invalid_features: HAZARDS,
    invalid_resource_types: SPECIAL_RESOURCES,
    ..BASE_RULES
};

pub const COAST_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city: true,
    invalid_terrain: &[
        Terrain::Grassland,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Snow,
        Terrain::Tundra,
        Terrain::Ocean,
    ],
    invalid_features: &[Feature::Reef],
    invalid_resource_types: SPECIAL_RESOURCES,
    requires_adjacent_land: true,
    ..BASE_RULES
};

pub const AERIAL_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_flat_land: true,
    ..STANDARD_RULES
};

pub const CITY_CENTER_RULES: DistrictPlacementRules = DistrictPlacementRules {
    invalid_terrain: WATER,
    invalid_features: &[Feature::Oasis],
    ..BASE_RULES
};

pub const PRESERVE_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_no_city_center: true,
    ..STANDARD_RULES
};

pub const AQUEDUCT_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city_center: true,
    requires_freshwater: true,
    ..STANDARD_RULES
};

pub const ENCAMPMENT_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_no_city_center: true,
    ..STANDARD_RULES
};

pub const DAM_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city: true,
    invalid_terrain: WATER,
    required_features: Some(&[Feature::Floodplains]),
    invalid_resource_types: SPECIAL_RESOURCES,
    requires_two_river_edges: true,
    ..BASE_RULES
};

pub const CANAL_RULES: DistrictPlacementRules = DistrictPlacementRules {
    requires_city: true,
    invalid_terrain: WATER,
    invalid_features: HAZARDS,
    requires_flat_land: true,
    requires_canal_connectivity: true,
    ..BASE_RULES
};
