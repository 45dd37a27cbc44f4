//! District adjacency tables
//!
//! Each scoring district produces one yield type from an ordered list of
//! weighted neighbor sources.

use crate::core::types::{
    District, Feature, Improvement, NaturalWonder, ResourceType, Terrain, YieldType,
};

pub const MAJOR: f64 = 2.0;
pub const STANDARD: f64 = 1.0;
pub const MINOR: f64 = 0.5;

/// Classification axis of a source, with the values it matches
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceValues {
    Terrain(&'static [Terrain]),
    Feature(&'static [Feature]),
    District(&'static [District]),
    ResourceType(&'static [ResourceType]),
    Improvement(&'static [Improvement]),
    NaturalWonder(&'static [NaturalWonder]),
}

/// One weighted neighbor-matching rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencySource {
    pub values: SourceValues,
    pub weight: f64,
    /// The matching neighbor must also carry a resource
    pub requires_resource: bool,
}

impl AdjacencySource {
    const fn new(values: SourceValues, weight: f64) -> Self {
        Self {
            values,
            weight,
            requires_resource: false,
        }
    }

    const fn with_resource(values: SourceValues, weight: f64) -> Self {
        Self {
            values,
            weight,
            requires_resource: true,
        }
    }

    /// Feature sources listing the river tag also score the center's own river
    pub fn includes_river(&self) -> bool {
        matches!(self.values, SourceValues::Feature(f) if f.contains(&Feature::River))
    }
}

/// Adjacency rule set for one scoring district
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictAdjacencyRules {
    pub yield_type: YieldType,
    pub sources: &'static [AdjacencySource],
}

const ANY_DISTRICT: &[District] = &[
    District::CityCenter,
    District::Campus,
    District::TheaterSquare,
    District::HolySite,
    District::Encampment,
    District::CommercialHub,
    District::Harbor,
    District::IndustrialZone,
    District::Preserve,
    District::EntertainmentComplex,
    District::WaterPark,
    District::Aqueduct,
    District::Neighborhood,
    District::Canal,
    District::Dam,
    District::Aerodrome,
    District::Spaceport,
    District::GovernmentPlaza,
    District::DiplomaticQuarter,
];

const GOVERNMENT_PLAZA: &[District] = &[District::GovernmentPlaza];

const WONDERS_EXCEPT_PAMUKKALE: &[NaturalWonder] = &[
    NaturalWonder::CliffsOfDover,
    NaturalWonder::CraterLake,
    NaturalWonder::DeadSea,
    NaturalWonder::Galapagos,
    NaturalWonder::GreatBarrierReef,
    NaturalWonder::MountEverest,
    NaturalWonder::MountKilimanjaro,
    NaturalWonder::Pantanal,
    NaturalWonder::TorresDelPaine,
    NaturalWonder::TsingyDeBemaraha,
    NaturalWonder::Uluru,
    NaturalWonder::Yosemite,
    NaturalWonder::DelicateArch,
    NaturalWonder::EyeOfTheSahara,
    NaturalWonder::LakeRetba,
    NaturalWonder::Matterhorn,
    NaturalWonder::MountRoraima,
    NaturalWonder::UbsunurHollow,
    NaturalWonder::ZhangyeDanxia,
    NaturalWonder::ChocolateHills,
    NaturalWonder::Gobustan,
    NaturalWonder::IkKil,
    NaturalWonder::MatoTipila,
    NaturalWonder::MountVesuvius,
    NaturalWonder::SaharaElBeyda,
    NaturalWonder::BermudaTriangle,
    NaturalWonder::FountainOfYouth,
    NaturalWonder::Paititi,
    NaturalWonder::HaLongBay,
    NaturalWonder::Eyjafjallajokull,
    NaturalWonder::GiantsCauseway,
    NaturalWonder::Lysefjord,
    NaturalWonder::Piopiotahi,
];

const PAMUKKALE: &[NaturalWonder] = &[NaturalWonder::Pamukkale];

pub const CAMPUS_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Science,
    sources: &[
        AdjacencySource::new(
            SourceValues::Feature(&[Feature::Mountain, Feature::Volcano]),
            STANDARD,
        ),
        AdjacencySource::new(
            SourceValues::Feature(&[Feature::Reef, Feature::GeothermalFissure]),
            MAJOR,
        ),
        AdjacencySource::new(SourceValues::Feature(&[Feature::Jungle]), MINOR),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
        AdjacencySource::new(
            SourceValues::NaturalWonder(&[NaturalWonder::GreatBarrierReef, NaturalWonder::Pamukkale]),
            MAJOR,
        ),
    ],
};

pub const HOLY_SITE_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Faith,
    sources: &[
        AdjacencySource::new(SourceValues::Feature(&[Feature::Mountain]), STANDARD),
        AdjacencySource::new(SourceValues::Feature(&[Feature::Volcano]), STANDARD),
        AdjacencySource::new(SourceValues::Feature(&[Feature::Woods]), MINOR),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::new(SourceValues::NaturalWonder(WONDERS_EXCEPT_PAMUKKALE), MAJOR),
        AdjacencySource::new(SourceValues::NaturalWonder(PAMUKKALE), STANDARD),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
    ],
};

pub const THEATER_SQUARE_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Culture,
    sources: &[
        AdjacencySource::new(
            SourceValues::District(&[District::EntertainmentComplex, District::WaterPark]),
            MAJOR,
        ),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::new(SourceValues::NaturalWonder(PAMUKKALE), MAJOR),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
    ],
};

pub const COMMERCIAL_HUB_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Gold,
    sources: &[
        AdjacencySource::new(SourceValues::District(&[District::Harbor]), MAJOR),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::new(SourceValues::Feature(&[Feature::River]), MAJOR),
        AdjacencySource::new(SourceValues::NaturalWonder(PAMUKKALE), MAJOR),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
    ],
};

pub const HARBOR_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Gold,
    sources: &[
        AdjacencySource::new(SourceValues::District(&[District::CityCenter]), MAJOR),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::with_resource(
            SourceValues::Terrain(&[Terrain::Coast, Terrain::Ocean, Terrain::Lake]),
            STANDARD,
        ),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
    ],
};

pub const INDUSTRIAL_ZONE_RULES: DistrictAdjacencyRules = DistrictAdjacencyRules {
    yield_type: YieldType::Production,
    sources: &[
        AdjacencySource::new(
            SourceValues::District(&[District::Aqueduct, District::Dam, District::Canal]),
            MAJOR,
        ),
        AdjacencySource::new(SourceValues::Improvement(&[Improvement::Quarry]), STANDARD),
        AdjacencySource::new(SourceValues::ResourceType(&[ResourceType::Strategic]), STANDARD),
        AdjacencySource::new(
            SourceValues::Improvement(&[Improvement::Mine, Improvement::LumberMill]),
            MINOR,
        ),
        AdjacencySource::new(SourceValues::District(GOVERNMENT_PLAZA), STANDARD),
        AdjacencySource::new(SourceValues::District(ANY_DISTRICT), MINOR),
    ],
};

/// Adjacency rules for a district; None for non-scoring districts
pub fn adjacency_rules(district: District) -> Option<&'static DistrictAdjacencyRules> {
    match district {
        District::Campus => Some(&CAMPUS_RULES),
        District::HolySite => Some(&HOLY_SITE_RULES),
        District::TheaterSquare => Some(&THEATER_SQUARE_RULES),
        District::CommercialHub => Some(&COMMERCIAL_HUB_RULES),
        District::Harbor => Some(&HARBOR_RULES),
        District::IndustrialZone => Some(&INDUSTRIAL_ZONE_RULES),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_districts() {
        let scoring: Vec<District> = District::ALL
            .iter()
            .copied()
            .filter(|d| adjacency_rules(*d).is_some())
            .collect();
        assert_eq!(scoring.len(), 6);
        assert!(adjacency_rules(District::CityCenter).is_none());
    }

    #[test]
    fn test_any_district_covers_all_placeable() {
        assert_eq!(ANY_DISTRICT.len(), District::placeable().count());
        assert_eq!(WONDERS_EXCEPT_PAMUKKALE.len(), NaturalWonder::COUNT - 2);
    }

    #[test]
    fn test_only_commercial_hub_has_river_source() {
        assert!(COMMERCIAL_HUB_RULES.sources.iter().any(|s| s.includes_river()));
        assert!(!CAMPUS_RULES.sources.iter().any(|s| s.includes_river()));
    }
}
