use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::{AddAssign, Index};
use super::level::Level;

/// Per-endpoint tally of records by severity. All five levels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts([u64; 5]);

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: Level) -> u64 {
        self.0[level.index()]
    }

    pub fn increment(&mut self, level: Level) {
        self.0[level.index()] += 1;
    }

    pub fn set(&mut self, level: Level, count: u64) {
        self.0[level.index()] = count;
    }

    /// Sum over all levels.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, u64)> + '_ {
        Level::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

impl From<[u64; 5]> for LevelCounts {
    fn from(counts: [u64; 5]) -> Self {
        Self(counts)
    }
}

impl Index<Level> for LevelCounts {
    type Output = u64;

    fn index(&self, level: Level) -> &u64 {
        &self.0[level.index()]
    }
}

impl AddAssign for LevelCounts {
    fn add_assign(&mut self, other: Self) {
        for (slot, count) in self.0.iter_mut().zip(other.0) {
            *slot += count;
        }
    }
}

impl AddAssign<&LevelCounts> for LevelCounts {
    fn add_assign(&mut self, other: &LevelCounts) {
        *self += *other;
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::ALL.len()))?;
        for (level, count) in self.iter() {
            map.serialize_entry(level.as_str(), &count)?;
        }
        map.end()
    }
}

/// Endpoint path -> counts. Produced per file by the parser and merged by
/// [`crate::pipeline::aggregate`]. Carries no ordering; reports sort at render time.
pub type HandlerCounts = HashMap<String, LevelCounts>;
