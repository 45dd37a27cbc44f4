//! Per-yield value bundle

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::core::types::YieldType;

/// The six scored yields of a tile, district, or whole map
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Yields {
    pub science: f64,
    pub culture: f64,
    pub gold: f64,
    pub faith: f64,
    pub production: f64,
    pub food: f64,
}

impl Add for Yields {
    type Output = Yields;

    fn add(self, other: Yields) -> Yields {
        Yields {
            science: self.science + other.science,
            culture: self.culture + other.culture,
            gold: self.gold + other.gold,
            faith: self.faith + other.faith,
            production: self.production + other.production,
            food: self.food + other.food,
        }
    }
}

impl AddAssign for Yields {
    fn add_assign(&mut self, other: Yields) {
        *self = *self + other;
    }
}

impl Yields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a scored yield; unscored categories read as zero
    pub fn get(&self, yield_type: YieldType) -> f64 {
        match yield_type {
            YieldType::Science => self.science,
            YieldType::Culture => self.culture,
            YieldType::Gold => self.gold,
            YieldType::Faith => self.faith,
            YieldType::Production => self.production,
            YieldType::Food => self.food,
            YieldType::None | YieldType::Housing | YieldType::Amenities => 0.0,
        }
    }

    /// Mutable slot for a scored yield; None for unscored categories
    pub fn get_mut(&mut self, yield_type: YieldType) -> Option<&mut f64> {
        match yield_type {
            YieldType::Science => Some(&mut self.science),
            YieldType::Culture => Some(&mut self.culture),
            YieldType::Gold => Some(&mut self.gold),
            YieldType::Faith => Some(&mut self.faith),
            YieldType::Production => Some(&mut self.production),
            YieldType::Food => Some(&mut self.food),
            YieldType::None | YieldType::Housing | YieldType::Amenities => None,
        }
    }

    /// Add `amount` to one yield (ignored for unscored categories)
    pub fn add_to(&mut self, yield_type: YieldType, amount: f64) {
        if let Some(slot) = self.get_mut(yield_type) {
            *slot += amount;
        }
    }

    /// (yield, value) pairs in `YieldType::SCORED` order
    pub fn iter(&self) -> impl Iterator<Item = (YieldType, f64)> + '_ {
        YieldType::SCORED.iter().map(move |&y| (y, self.get(y)))
    }

    pub fn sum(&self) -> f64 {
        self.science + self.culture + self.gold + self.faith + self.production + self.food
    }
}
