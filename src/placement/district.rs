//! District placement legality
//!
//! Checks run in a fixed order and stop at the first failure. Every check
//! is a plain predicate over the tile and its neighbors.

use crate::core::types::{District, Feature, Terrain};
use crate::map::{CivMap, HexCoord, Tile};
use crate::placement::district_rules::{DistrictPlacementRules, PlacementClass};

/// Neighbor tiles in edge order; `None` where the map ends
pub type NeighborSlots<'a> = [Option<&'a Tile>; 6];

/// Whether `district` may be placed on the tile at `coord`
///
/// Unknown coordinates and `District::None` are never placeable.
pub fn can_place_district(map: &CivMap, district: District, coord: &HexCoord) -> bool {
    let Some(tile) = map.get(coord) else {
        return false;
    };
    let Some(class) = PlacementClass::of(district) else {
        return false;
    };
    let slots = map.neighbor_slots(coord);
    check_rules(class.rules(), tile, &slots)
}

/// Evaluate one rule record against a tile and its neighbor slots
pub fn check_rules(rules: &DistrictPlacementRules, tile: &Tile, slots: &NeighborSlots<'_>) -> bool {
    if tile.mountain {
        return false;
    }

    if rules.requires_city && !tile.within_city_limits {
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

    if tile.feature != Feature::None && rules.invalid_features.contains(&tile.feature) {
        return false;
    }
    if let Some(required) = rules.required_features {
        if !required.contains(&tile.feature) {
            return false;
        }
    }

    if rules.invalid_resource_types.contains(&tile.resource_type) {
        return false;
    }

    if rules.requires_flat_land && tile.hill {
        return false;
    }

    let mut neighbors = slots.iter().flatten();

    if rules.requires_adjacent_land
        && !neighbors
            .clone()
            .any(|n| !matches!(n.terrain, Terrain::Ocean | Terrain::Coast))
    {
        return false;
    }

    let next_to_city_center = neighbors
        .clone()
        .any(|n| n.district == District::CityCenter);
    if rules.requires_city_center && !next_to_city_center {
        return false;
    }
    if rules.requires_no_city_center && next_to_city_center {
        return false;
    }

    if rules.requires_freshwater {
        let freshwater_neighbor = neighbors.any(|n| {
            n.mountain || n.feature == Feature::Oasis || n.terrain == Terrain::Lake
        });
        if !freshwater_neighbor && !has_valid_river_edge(tile, slots) {
            return false;
        }
    }

    if rules.requires_two_river_edges && tile.river_edge_count() < 2 {
        return false;
    }

    if rules.requires_canal_connectivity && !canal_connects(canal_endpoints(slots)) {
        return false;
    }

    true
}

/// True if the tile has a river on any edge other than the one facing a city center
pub fn has_valid_river_edge(tile: &Tile, slots: &NeighborSlots<'_>) -> bool {
    let city_edge = slots
        .iter()
        .position(|n| n.is_some_and(|n| n.district == District::CityCenter));

    tile.rivers
        .iter()
        .enumerate()
        .any(|(edge, &river)| river && Some(edge) != city_edge)
}

/// Edges whose neighbor is coast, lake or a city center
pub fn canal_endpoints(slots: &NeighborSlots<'_>) -> [bool; 6] {
    (*slots).map(|n| {
        n.is_some_and(|n| {
            matches!(n.terrain, Terrain::Coast | Terrain::Lake) || n.district == District::CityCenter
        })
    })
}

/// True if two qualifying edges are 2, 3 or 4 steps apart around the hex
pub fn canal_connects(endpoints: [bool; 6]) -> bool {
    (0..6).filter(|&i| endpoints[i]).any(|i| {
        [2, 3, 4]
            .iter()
            .any(|gap| endpoints[(i + gap) % 6])
    })
}
