//! Tile yields, district adjacency scoring and full-map aggregation

use std::collections::BTreeMap;

use crate::core::types::{Feature, Improvement, Resource, ResourceType, Terrain, YieldType};
use crate::map::{CivMap, HexCoord, Tile};
use crate::yields::adjacency::{adjacency_rules, AdjacencySource, DistrictAdjacencyRules, SourceValues};
use crate::yields::yield_set::Yields;

/// Per-tile breakdown: yield type to value
pub type TileBreakdown = BTreeMap<YieldType, f64>;

/// Result of scoring a whole map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreResult {
    /// Totals per yield type
    pub summary: Yields,
    /// Breakdown for every tile, keyed by coordinate
    pub tiles: BTreeMap<HexCoord, TileBreakdown>,
}

impl ScoreResult {
    /// Sum over every yield in the summary
    pub fn total(&self) -> f64 {
        self.summary.sum()
    }
}

/// Score every tile of the map
///
/// Districtless tiles count toward the summary only inside city limits.
/// Scoring district tiles always count, wherever they are.
pub fn get_score(map: &CivMap) -> ScoreResult {
    let mut result = ScoreResult::default();

    for (coord, tile) in &map.tiles {
        if !tile.has_district() {
            let yields = tile_score(tile);
            if tile.within_city_limits {
                result.summary += yields;
            }
            result.tiles.insert(*coord, yields.iter().collect());
            continue;
        }

        let Some(rules) = adjacency_rules(tile.district) else {
            tracing::trace!("{} has no adjacency rules ({})", coord, tile.district);
            result.tiles.insert(*coord, TileBreakdown::new());
            continue;
        };

        let score = adjacency_score(map, tile, rules);
        tracing::debug!("{} at {}: {} {}", tile.district, coord, score, rules.yield_type);

        result.summary.add_to(rules.yield_type, score);
        result
            .tiles
            .insert(*coord, TileBreakdown::from([(rules.yield_type, score)]));
    }

    result
}

/// Weighted neighbor score of a district tile under `rules`
pub fn adjacency_score(map: &CivMap, center: &Tile, rules: &DistrictAdjacencyRules) -> f64 {
    let neighbors = map.neighbors(&center.coord);

    rules
        .sources
        .iter()
        .map(|source| {
            let count = neighbors
                .iter()
                .filter(|n| source_matches(source, n))
                .count();
            let mut score = count as f64 * source.weight;
            if source.includes_river() && center.has_river() {
                score += source.weight;
            }
            score
        })
        .sum()
}

/// Whether a neighbor satisfies one adjacency source
pub fn source_matches(source: &AdjacencySource, neighbor: &Tile) -> bool {
    match source.values {
        SourceValues::Terrain(values) => {
            values.contains(&neighbor.terrain)
                && (!source.requires_resource
                    || neighbor.effective_resource_type() != ResourceType::None)
        }
        SourceValues::Feature(values) => {
            // Mountains are a tile flag rather than a feature, so a source
            // listing the mountain tag matches every neighbor.
            values.contains(&neighbor.effective_feature()) || values.contains(&Feature::Mountain)
        }
        SourceValues::District(values) => values.contains(&neighbor.district),
        SourceValues::ResourceType(values) => values.contains(&neighbor.effective_resource_type()),
        SourceValues::Improvement(values) => values.contains(&neighbor.improvement),
        // tiles carry no natural wonder attribute
        SourceValues::NaturalWonder(_) => false,
    }
}

/// Base yields of a districtless tile
pub fn tile_score(tile: &Tile) -> Yields {
    let mut y = Yields::new();

    if tile.mountain {
        return y;
    }

    match tile.terrain {
        Terrain::Grassland => y.food += 2.0,
        Terrain::Plains => {
            y.food += 1.0;
            y.production += 1.0;
        }
        Terrain::Tundra => y.food += 1.0,
        Terrain::Coast | Terrain::Lake | Terrain::Ocean => {
            y.food += 1.0;
            y.gold += 1.0;
        }
        Terrain::Desert if matches!(tile.feature, Feature::Floodplains | Feature::Oasis) => {
            y.food += 3.0;
            if tile.feature == Feature::Oasis {
                y.gold += 1.0;
            }
        }
        Terrain::Desert | Terrain::Snow => {}
    }

    match tile.feature {
        Feature::Woods => y.production += 1.0,
        Feature::Jungle | Feature::Marsh => y.food += 1.0,
        Feature::Reef => {
            y.food += 1.0;
            y.production += 1.0;
        }
        _ => {}
    }

    match tile.improvement {
        Improvement::Farm | Improvement::FishingBoats => y.food += 1.0,
        Improvement::Mine | Improvement::Quarry | Improvement::Pasture | Improvement::LumberMill => {
            y.production += 1.0
        }
        Improvement::Plantation => y.gold += 2.0,
        Improvement::Camp => y.gold += 1.0,
        Improvement::None => {}
    }

    if tile.hill {
        y.production += 1.0;
    }

    y += resource_yields(tile.resource);
    y
}

/// Flat yield bonus granted by a resource
pub fn resource_yields(resource: Resource) -> Yields {
    use Resource::*;

    let mut y = Yields::new();
    match resource {
        Bananas | Cattle | Fish | Rice | Sheep | Wheat => y.food += 1.0,
        Deer | Stone => y.production += 1.0,
        Copper | Crabs | Maize => y.gold += 2.0,
        Amber | Coffee | Jade | Marble | Silk => y.culture += 1.0,
        Incense | Pearls | Tobacco => y.faith += 1.0,
        Furs | Salt | Wine => {
            y.food += 1.0;
            y.gold += 1.0;
        }
        Ivory | Olives | Whales => {
            y.production += 1.0;
            y.gold += 1.0;
        }
        Mercury | Turtles | Tea => y.science += 1.0,
        Citrus | Honey | Spices | Sugar => y.food += 2.0,
        Cocoa | Cotton | Diamonds | Silver | Truffles => y.gold += 3.0,
        Horses | Niter => {
            y.production += 1.0;
            y.food += 1.0;
        }
        Iron | Aluminum => y.science += 1.0,
        Coal | Uranium => y.production += 2.0,
        Oil => y.production += 3.0,
        None | Cinnamon | Cloves | Cosmetics | Dyes | Gypsum | Jeans | Perfume | Toys
        | AntiquitySite | Shipwreck => {}
    }
    y
}

/// Base housing a city center on this tile would provide
pub fn base_city_housing(map: &CivMap, coord: &HexCoord) -> u32 {
    let Some(tile) = map.get(coord) else {
        return 0;
    };
    if tile.has_river() {
        return 5;
    }

    let neighbors = map.neighbors(coord);
    if neighbors
        .iter()
        .any(|n| n.terrain == Terrain::Lake || n.feature == Feature::Oasis)
    {
        5
    } else if neighbors.iter().any(|n| n.terrain == Terrain::Coast) {
        3
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::District;
    use crate::yields::adjacency::{CAMPUS_RULES, COMMERCIAL_HUB_RULES, HARBOR_RULES, INDUSTRIAL_ZONE_RULES};

    fn set(map: &mut CivMap, q: i32, r: i32, f: impl FnOnce(&mut Tile)) {
        f(map.get_mut(&HexCoord::new(q, r)).unwrap());
    }

    #[test]
    fn test_bare_grassland_yields_two_food() {
        let y = tile_score(&Tile::new(HexCoord::ORIGIN));
        assert_eq!(y.food, 2.0);
        assert_eq!(y.sum(), 2.0);
    }

    #[test]
    fn test_mountain_yields_nothing() {
        let tile = Tile::new(HexCoord::ORIGIN)
            .with_mountain()
            .with_resource(Resource::Oil, ResourceType::Strategic);
        assert_eq!(tile_score(&tile).sum(), 0.0);
    }

    #[test]
    fn test_tile_score_stacks_modifiers() {
        let tile = Tile::new(HexCoord::ORIGIN)
            .with_terrain(Terrain::Plains)
            .with_feature(Feature::Woods)
            .with_hill()
            .with_improvement(Improvement::LumberMill)
            .with_resource(Resource::Deer, ResourceType::Bonus);
        let y = tile_score(&tile);
        assert_eq!(y.food, 1.0);
        assert_eq!(y.production, 5.0);
    }

    #[test]
    fn test_desert_oasis_and_bare_desert() {
        let oasis = Tile::new(HexCoord::ORIGIN)
            .with_terrain(Terrain::Desert)
            .with_feature(Feature::Oasis);
        let y = tile_score(&oasis);
        assert_eq!(y.food, 3.0);
        assert_eq!(y.gold, 1.0);

        let desert = Tile::new(HexCoord::ORIGIN).with_terrain(Terrain::Desert);
        assert_eq!(tile_score(&desert).sum(), 0.0);
    }

    #[test]
    fn test_resource_table_samples() {
        assert_eq!(resource_yields(Resource::Oil).production, 3.0);
        assert_eq!(resource_yields(Resource::Diamonds).gold, 3.0);
        assert_eq!(resource_yields(Resource::Tea).science, 1.0);
        assert_eq!(resource_yields(Resource::Wine).sum(), 2.0);
        assert_eq!(resource_yields(Resource::Cinnamon).sum(), 0.0);
    }

    #[test]
    fn test_campus_mountain_fallback_counts_every_neighbor() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| t.district = District::Campus);
        let center = map.get(&HexCoord::ORIGIN).unwrap().clone();
        // six plain neighbors: the mountain/volcano source matches all of them
        assert_eq!(adjacency_score(&map, &center, &CAMPUS_RULES), 6.0);
    }

    #[test]
    fn test_commercial_hub_river_bonus() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| {
            t.district = District::CommercialHub;
            t.rivers[1] = true;
        });
        set(&mut map, 1, 0, |t| t.district = District::Harbor);
        let center = map.get(&HexCoord::ORIGIN).unwrap().clone();
        // harbor 2.0 + any district 0.5 + own river 2.0
        assert_eq!(adjacency_score(&map, &center, &COMMERCIAL_HUB_RULES), 4.5);
    }

    #[test]
    fn test_harbor_coastal_resource_requires_resource() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| {
            t.terrain = Terrain::Coast;
            t.district = District::Harbor;
        });
        set(&mut map, 1, 0, |t| t.terrain = Terrain::Coast);
        set(&mut map, 0, 1, |t| {
            t.terrain = Terrain::Coast;
            t.resource = Resource::Fish;
            t.resource_type = ResourceType::Bonus;
        });
        set(&mut map, -1, 0, |t| t.district = District::CityCenter);
        let center = map.get(&HexCoord::ORIGIN).unwrap().clone();
        // city center 2.0 + one resourced coast 1.0 + any district 0.5
        assert_eq!(adjacency_score(&map, &center, &HARBOR_RULES), 3.5);
    }

    #[test]
    fn test_industrial_zone_ignores_resource_under_district() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| t.district = District::IndustrialZone);
        set(&mut map, 1, 0, |t| {
            t.resource = Resource::Iron;
            t.resource_type = ResourceType::Strategic;
        });
        set(&mut map, 0, 1, |t| {
            t.resource = Resource::Coal;
            t.resource_type = ResourceType::Strategic;
            t.district = District::Campus;
        });
        set(&mut map, -1, 1, |t| t.improvement = Improvement::Quarry);
        let center = map.get(&HexCoord::ORIGIN).unwrap().clone();
        // strategic 1.0 + quarry 1.0 + any district 0.5
        assert_eq!(adjacency_score(&map, &center, &INDUSTRIAL_ZONE_RULES), 2.5);
    }

    #[test]
    fn test_get_score_asymmetry() {
        let mut map = CivMap::empty(4);
        // campus outside any city still counts
        set(&mut map, 4, 0, |t| t.district = District::Campus);
        let result = get_score(&map);
        // 3 neighbors, each matching the mountain source
        assert_eq!(result.summary.science, 3.0);
        // districtless tiles outside city limits do not count
        assert_eq!(result.summary.food, 0.0);
        assert_eq!(result.tiles.len(), 61);
        assert_eq!(result.tiles[&HexCoord::ORIGIN][&YieldType::Food], 2.0);
    }

    #[test]
    fn test_get_score_city_center_empty_breakdown() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| t.district = District::CityCenter);
        map.make_city(HexCoord::ORIGIN, false).unwrap();
        let result = get_score(&map);
        assert!(result.tiles[&HexCoord::ORIGIN].is_empty());
        // 36 in-limits grassland tiles at 2 food each
        assert_eq!(result.summary.food, 72.0);
        assert_eq!(result.total(), 72.0);
    }

    #[test]
    fn test_base_city_housing_tiers() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| t.rivers[0] = true);
        assert_eq!(base_city_housing(&map, &HexCoord::ORIGIN), 5);

        let mut map = CivMap::empty(4);
        set(&mut map, 1, 0, |t| t.terrain = Terrain::Lake);
        assert_eq!(base_city_housing(&map, &HexCoord::ORIGIN), 5);

        let mut map = CivMap::empty(4);
        set(&mut map, 1, 0, |t| t.terrain = Terrain::Coast);
        assert_eq!(base_city_housing(&map, &HexCoord::ORIGIN), 3);

        let map = CivMap::empty(4);
        assert_eq!(base_city_housing(&map, &HexCoord::ORIGIN), 2);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut map = CivMap::empty(4);
        set(&mut map, 0, 0, |t| t.district = District::CityCenter);
        map.make_city(HexCoord::ORIGIN, false).unwrap();
        set(&mut map, 1, 0, |t| t.district = District::HolySite);
        assert_eq!(get_score(&map), get_score(&map));
    }
}
