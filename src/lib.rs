//! District Planner - hex-map district placement, yield scoring and a
//! step/reset environment for placement policies

pub mod core;
pub mod env;
pub mod map;
pub mod placement;
pub mod transfer;
pub mod yields;
