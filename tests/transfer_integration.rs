//! Integration tests for the boundary map format
//!
//! Load a map, plan on it, write it back out.

use district_planner::core::{District, EngineConfig, YieldType};
use district_planner::env::{run_episode, CivEnv, GreedyPolicy};
use district_planner::map::{CivMap, HexCoord};
use district_planner::transfer::{
    load_map_from_str, load_tiles_from_str, map_to_json, map_to_records, ScoreReport,
};
use district_planner::yields::get_score;

fn empty_map_json() -> String {
    map_to_json(&CivMap::empty(4)).unwrap()
}

#[test]
fn test_empty_map_round_trips() {
    let map = load_map_from_str(&empty_map_json()).unwrap();
    assert_eq!(map.len(), 61);
    assert!(!map.has_city());
    assert_eq!(map.radius, 4);
}

#[test]
fn test_records_are_keyed_by_axial_string() {
    let records = map_to_records(&CivMap::empty(4));
    assert!(records.contains_key("0,0"));
    assert!(records.contains_key("-4,2"));
    assert_eq!(records["-4,2"].q, -4);
    assert_eq!(records["-4,2"].r, 2);
}

#[test]
fn test_plan_on_loaded_map_with_city() {
    let mut map = CivMap::empty(4);
    map.get_mut(&HexCoord::new(1, 1)).unwrap().district = District::CityCenter;
    map.make_city(HexCoord::new(1, 1), false).unwrap();
    let json = map_to_json(&map).unwrap();

    let loaded = load_map_from_str(&json).unwrap();
    assert_eq!(loaded.city().unwrap().center, HexCoord::new(1, 1));

    let mut env = CivEnv::with_templates(vec![loaded], EngineConfig::default().with_seed(3)).unwrap();
    let summary = run_episode(&mut env, &mut GreedyPolicy, Some(3)).unwrap();
    assert!(summary.steps >= 1);

    let out = map_to_records(env.map());
    let placed = out
        .values()
        .filter(|r| r.district != District::None)
        .count();
    assert_eq!(placed, summary.steps + 1);
}

#[test]
fn test_score_report_matches_score() {
    let mut map = CivMap::empty(4);
    map.get_mut(&HexCoord::ORIGIN).unwrap().district = District::CityCenter;
    map.make_city(HexCoord::ORIGIN, false).unwrap();
    map.get_mut(&HexCoord::new(0, 1)).unwrap().district = District::Campus;

    let json = map_to_json(&map).unwrap();
    let tiles_only = load_tiles_from_str(&json).unwrap();
    assert!(!tiles_only.has_city());

    let report = ScoreReport::from(&get_score(&tiles_only));
    let direct = get_score(&map);
    assert_eq!(report.summary[&YieldType::Science], direct.summary.science.floor() as i64);
    assert_eq!(report.summary[&YieldType::Food], 70);
    assert_eq!(report.tiles["0,1"][&YieldType::Science], 6.0);
}
