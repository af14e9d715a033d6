use std::collections::HashMap;
use std::fmt;

use crate::domain::PairKeyMode;

/// Registry indices of a colliding pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub first: usize,
    pub second: usize,
}

impl PairKey {
    pub fn new(active: usize, other: usize, mode: PairKeyMode) -> Self {
        match mode {
            PairKeyMode::Ordered => Self { first: active, second: other },
            PairKeyMode::Canonical => Self {
                first: active.min(other),
                second: active.max(other),
            },
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}

/// Contact streak per pair
///
/// Counts only grow: a pair that drifts apart keeps its count until it
/// merges or a split wipes the table.
#[derive(Default)]
pub struct PairCounter {
    counts: HashMap<PairKey, u32>,
}

impl PairCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one contact and return the new count (1 on first contact).
    pub fn bump(&mut self, key: PairKey) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, key: PairKey) -> Option<u32> {
        self.counts.get(&key).copied()
    }

    pub fn remove(&mut self, key: PairKey) {
        self.counts.remove(&key);
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
