//! Boundary map format - JSON tile records in and out

pub mod loader;
pub mod record;
pub mod report;

pub use loader::{
    load_map_from_path, load_map_from_str, load_tiles_from_path, load_tiles_from_str, map_to_json,
    map_to_records,
};
pub use record::{floored_yields, TileRecord, YieldRecord};
pub use report::ScoreReport;
