//! Placement rule engine - district and improvement legality

pub mod district;
pub mod district_rules;
pub mod improvement;

pub use district::{
    can_place_district, canal_connects, canal_endpoints, check_rules, has_valid_river_edge,
    NeighborSlots,
};
pub use district_rules::{DistrictPlacementRules, PlacementClass};
pub use improvement::{can_place_improvement, improvement_rules, ImprovementPlacementRules};
