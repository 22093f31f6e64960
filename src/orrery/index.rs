//! User-facing record indexes.
//!
//! The core addresses records by zero-based position. Users see and type
//! one-based numbers (`1`, `2`, ...). [`DisplayIndex`] is the only place that
//! converts between the two, so a `0` typed by the user never reaches the
//! core as "the last record minus one".

use crate::model::CelestialBody;
use std::fmt;
use std::str::FromStr;

/// A one-based index as shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBody {
    pub index: DisplayIndex,
    pub body: CelestialBody,
}

/// Pairs each record with its current display index, in collection order.
pub fn index_bodies(bodies: &[CelestialBody]) -> Vec<DisplayBody> {
    bodies
        .iter()
        .enumerate()
        .map(|(position, body)| DisplayBody {
            index: DisplayIndex::from_position(position),
            body: body.clone(),
        })
        .collect()
}
