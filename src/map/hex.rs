//! Hex coordinate system for the district map (axial coordinates)
//!
//! Uses axial coordinates (q, r). Edge `i` of a tile is the edge shared with
//! the neighbor at `HexDirection::ALL[i]`; river flags and canal checks are
//! indexed the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PlannerError;

/// Axial hex coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Step distance in hex space
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// All 6 neighboring coordinates, in edge order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        HexDirection::ALL.map(|d| self.step(d))
    }

    /// Coordinate one step away in `direction`
    pub fn step(&self, direction: HexDirection) -> HexCoord {
        let offset = direction.offset();
        HexCoord::new(self.q + offset.q, self.r + offset.r)
    }

    /// Edge index of `other` relative to `self`, or None if not adjacent
    pub fn edge_index(&self, other: &Self) -> Option<usize> {
        let delta = HexCoord::new(other.q - self.q, other.r - self.r);
        HexDirection::ALL
            .iter()
            .position(|d| d.offset() == delta)
    }

    /// True when `self` lies in the hex disk of `radius` around `center`
    pub fn within_radius(&self, center: &Self, radius: i32) -> bool {
        let dq = self.q - center.q;
        let dr = self.r - center.r;
        dq.abs() <= radius && dr.abs() <= radius && (dq + dr).abs() <= radius
    }

    /// Get all hexes within range (inclusive), sorted by (q, r)
    pub fn hexes_in_range(&self, range: i32) -> Vec<HexCoord> {
        let mut results = Vec::new();
        for q in -range..=range {
            for r in (-range).max(-q - range)..=range.min(-q + range) {
                results.push(HexCoord::new(self.q + q, self.r + r));
            }
        }
        results
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// Parses the `"q,r"` keys of the boundary map format
impl FromStr for HexCoord {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidCoordinateKey(s.to_string());
        let (q, r) = s.split_once(',').ok_or_else(invalid)?;
        let q = q.trim().parse::<i32>().map_err(|_| invalid())?;
        let r = r.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(HexCoord::new(q, r))
    }
}

/// The six hex directions, in edge-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HexDirection {
    #[default]
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
        HexDirection::NorthEast,
    ];

    /// Get the hex offset for this direction
    pub fn offset(&self) -> HexCoord {
        match self {
            HexDirection::East => HexCoord::new(1, 0),
            HexDirection::SouthEast => HexCoord::new(0, 1),
            HexDirection::SouthWest => HexCoord::new(-1, 1),
            HexDirection::West => HexCoord::new(-1, 0),
            HexDirection::NorthWest => HexCoord::new(0, -1),
            HexDirection::NorthEast => HexCoord::new(1, -1),
        }
    }

    /// Edge index of this direction
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get opposite direction
    pub fn opposite(&self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}
