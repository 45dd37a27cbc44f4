//! Improvement placement rules and legality

use crate::core::types::{Feature, Improvement, Resource, Terrain};
use crate::map::Tile;

/// Legality rule set for one improvement kind
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementPlacementRules {
    pub invalid_terrain: &'static [Terrain],
    pub required_terrain: Option<&'static [Terrain]>,
    pub invalid_features: &'static [Feature],
    pub required_features: Option<&'static [Feature]>,
    /// Blocks the improvement only when the tile has a resource outside this set
    pub valid_resources: Option<&'static [Resource]>,
    /// Tile must carry a resource from this set
    pub required_resources: Option<&'static [Resource]>,
}

const WATER: &[Terrain] = &[Terrain::Coast, Terrain::Ocean, Terrain::Lake];

const BASE_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    invalid_terrain: WATER,
    required_terrain: None,
    invalid_features: &[],
    required_features: None,
    valid_resources: None,
    required_resources: None,
};

pub const FARM_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    invalid_features: &[Feature::GeothermalFissure, Feature::Volcano],
    valid_resources: Some(&[Resource::Wheat, Resource::Rice, Resource::Maize]),
    ..BASE_RULES
};

pub const MINE_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    invalid_features: &[
        Feature::GeothermalFissure,
        Feature::Volcano,
        Feature::Floodplains,
    ],
    valid_resources: Some(&[
        Resource::Iron,
        Resource::Niter,
        Resource::Coal,
        Resource::Aluminum,
        Resource::Uranium,
        Resource::Diamonds,
        Resource::Jade,
        Resource::Mercury,
        Resource::Salt,
        Resource::Silver,
        Resource::Amber,
        Resource::Copper,
    ]),
    ..BASE_RULES
};

pub const QUARRY_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    required_resources: Some(&[Resource::Stone, Resource::Marble, Resource::Gypsum]),
    ..BASE_RULES
};

pub const PLANTATION_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    required_resources: Some(&[
        Resource::Bananas,
        Resource::Citrus,
        Resource::Cocoa,
        Resource::Coffee,
        Resource::Cotton,
        Resource::Dyes,
        Resource::Incense,
        Resource::Olives,
        Resource::Silk,
        Resource::Spices,
        Resource::Sugar,
        Resource::Tea,
        Resource::Tobacco,
        Resource::Wine,
    ]),
    ..BASE_RULES
};

pub const CAMP_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    required_resources: Some(&[
        Resource::Deer,
        Resource::Furs,
        Resource::Ivory,
        Resource::Truffles,
        Resource::Honey,
    ]),
    ..BASE_RULES
};

pub const PASTURE_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    required_resources: Some(&[Resource::Sheep, Resource::Cattle, Resource::Horses]),
    ..BASE_RULES
};

pub const FISHING_BOATS_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    invalid_terrain: &[],
    required_terrain: Some(WATER),
    required_resources: Some(&[
        Resource::Fish,
        Resource::Crabs,
        Resource::Whales,
        Resource::Pearls,
        Resource::Amber,
        Resource::Turtles,
    ]),
    ..BASE_RULES
};

pub const LUMBER_MILL_RULES: ImprovementPlacementRules = ImprovementPlacementRules {
    required_features: Some(&[Feature::Woods, Feature::Jungle]),
    ..BASE_RULES
};

/// Rule record for an improvement; `Improvement::None` has none
pub fn improvement_rules(improvement: Improvement) -> Option<&'static ImprovementPlacementRules> {
    let rules = match improvement {
        Improvement::None => return None,
        Improvement::Farm => &FARM_RULES,
        Improvement::Mine => &MINE_RULES,
        Improvement::Quarry => &QUARRY_RULES,
        Improvement::Plantation => &PLANTATION_RULES,
        Improvement::Camp => &CAMP_RULES,
        Improvement::Pasture => &PASTURE_RULES,
        Improvement::FishingBoats => &FISHING_BOATS_RULES,
        Improvement::LumberMill => &LUMBER_MILL_RULES,
    };
    Some(rules)
}

/// Whether `improvement` may be built on `tile`
pub fn can_place_improvement(tile: &Tile, improvement: Improvement) -> bool {
    let Some(rules) = improvement_rules(improvement) else {
        return true;
    };

    if tile.mountain {
        return false;
    }

    if rules.invalid_terrain.contains(&tile.terrain) {
        return false;
    }
    if let Some(required) = rules.required_terrain {
        if !required.contains(&tile.terrain) {
            return false;
        }
    }

    if rules.invalid_features.contains(&tile.feature) {
        return false;
    }
    if let Some(required) = rules.required_features {
        if !required.contains(&tile.feature) {
            return false;
        }
    }

    if tile.resource != Resource::None {
        if let Some(valid) = rules.valid_resources {
            if !valid.contains(&tile.resource) {
                return false;
            }
        }
    }

    if let Some(required) = rules.required_resources {
        if !required.contains(&tile.resource) {
            return false;
        }
    }

    match improvement {
        Improvement::Mine => can_place_mine(tile),
        Improvement::Farm => can_place_farm(tile),
        _ => true,
    }
}

/// Mines need a hill, volcanic soil, or some resource
fn can_place_mine(tile: &Tile) -> bool {
    tile.hill || tile.feature == Feature::VolcanicSoil || tile.resource != Resource::None
}

/// Desert farms only on floodplains
fn can_place_farm(tile: &Tile) -> bool {
    tile.terrain != Terrain::Desert || tile.feature == Feature::Floodplains
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ResourceType;
    use crate::map::HexCoord;

    fn tile() -> Tile {
        Tile::new(HexCoord::ORIGIN)
    }

    #[test]
    fn test_none_always_allowed() {
        assert!(can_place_improvement(&tile().with_mountain(), Improvement::None));
    }

    #[test]
    fn test_mountain_rejects_everything() {
        let mountain = tile().with_mountain().with_hill();
        for improvement in Improvement::ALL.iter().skip(1) {
            assert!(!can_place_improvement(&mountain, *improvement), "{improvement:?}");
        }
    }

    #[test]
    fn test_farm_rules() {
        assert!(can_place_improvement(&tile(), Improvement::Farm));
        assert!(can_place_improvement(
            &tile().with_resource(Resource::Wheat, ResourceType::Bonus),
            Improvement::Farm
        ));
        assert!(!can_place_improvement(
            &tile().with_resource(Resource::Iron, ResourceType::Strategic),
            Improvement::Farm
        ));
        let desert = tile().with_terrain(Terrain::Desert);
        assert!(!can_place_improvement(&desert, Improvement::Farm));
        assert!(can_place_improvement(
            &desert.with_feature(Feature::Floodplains),
            Improvement::Farm
        ));
    }

    #[test]
    fn test_mine_needs_hill_soil_or_resource() {
        assert!(!can_place_improvement(&tile(), Improvement::Mine));
        assert!(can_place_improvement(&tile().with_hill(), Improvement::Mine));
        assert!(can_place_improvement(
            &tile().with_feature(Feature::VolcanicSoil),
            Improvement::Mine
        ));
        assert!(can_place_improvement(
            &tile().with_resource(Resource::Copper, ResourceType::Bonus),
            Improvement::Mine
        ));
        assert!(!can_place_improvement(
            &tile().with_hill().with_resource(Resource::Wheat, ResourceType::Bonus),
            Improvement::Mine
        ));
        assert!(!can_place_improvement(
            &tile().with_hill().with_feature(Feature::Floodplains),
            Improvement::Mine
        ));
    }

    #[test]
    fn test_required_resources() {
        assert!(!can_place_improvement(&tile(), Improvement::Quarry));
        assert!(can_place_improvement(
            &tile().with_resource(Resource::Marble, ResourceType::Luxury),
            Improvement::Quarry
        ));
        assert!(can_place_improvement(
            &tile().with_resource(Resource::Horses, ResourceType::Strategic),
            Improvement::Pasture
        ));
        assert!(!can_place_improvement(
            &tile().with_resource(Resource::Deer, ResourceType::Bonus),
            Improvement::Pasture
        ));
    }

    #[test]
    fn test_fishing_boats_need_water() {
        let fish = Resource::Fish;
        assert!(!can_place_improvement(
            &tile().with_resource(fish, ResourceType::Bonus),
            Improvement::FishingBoats
        ));
        assert!(can_place_improvement(
            &tile()
                .with_terrain(Terrain::Coast)
                .with_resource(fish, ResourceType::Bonus),
            Improvement::FishingBoats
        ));
    }

    #[test]
    fn test_lumber_mill_needs_forest() {
        assert!(!can_place_improvement(&tile(), Improvement::LumberMill));
        assert!(can_place_improvement(
            &tile().with_feature(Feature::Jungle),
            Improvement::LumberMill
        ));
        assert!(!can_place_improvement(
            &tile().with_terrain(Terrain::Lake).with_feature(Feature::Woods),
            Improvement::LumberMill
        ));
    }
}
