//! Floored score report for the `score` command

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::YieldType;
use crate::transfer::record::{floored_yields, YieldRecord};
use crate::yields::ScoreResult;

/// Whole-map score with every value floored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// All six scored yields, zeros included
    pub summary: BTreeMap<YieldType, i64>,
    /// Positive yields per `"q,r"` tile
    pub tiles: BTreeMap<String, YieldRecord>,
}

impl From<&ScoreResult> for ScoreReport {
    fn from(score: &ScoreResult) -> Self {
        let summary = score
            .summary
            .iter()
            .map(|(y, v)| (y, v.floor() as i64))
            .collect();
        let tiles = score
            .tiles
            .iter()
            .map(|(coord, breakdown)| (coord.to_string(), floored_yields(breakdown)))
            .collect();
        Self { summary, tiles }
    }
}
