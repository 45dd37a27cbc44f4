//! Adjacency and yield engine

pub mod adjacency;
pub mod scoring;
pub mod yield_set;

pub use adjacency::{adjacency_rules, AdjacencySource, DistrictAdjacencyRules, SourceValues};
pub use scoring::{
    adjacency_score, base_city_housing, get_score, resource_yields, source_matches, tile_score,
    ScoreResult, TileBreakdown,
};
pub use yield_set::Yields;
