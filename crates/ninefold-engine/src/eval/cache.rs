//! Memoized block evaluations.

use std::collections::HashMap;

use ninefold_core::{BlockKey, Mark};

/// Heuristic values keyed by [`BlockKey`], for one perspective mark.
///
/// One cache per game. It only ever grows; a new game gets a new cache.
#[derive(Debug, Clone)]
pub struct EvaluationCache {
    perspective: Mark,
    table: HashMap<BlockKey, i32>,
    hits: u64,
    misses: u64,
}

impl EvaluationCache {
    /// Create an empty cache evaluating from `perspective`'s point of view.
    pub fn new(perspective: Mark) -> Self {
        Self {
            perspective,
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The mark positive values favour.
    #[inline]
    pub fn perspective(&self) -> Mark {
        self.perspective
    }

    /// Look up a stored value. `None` means "not computed yet".
    pub fn probe(&mut self, key: BlockKey) -> Option<i32> {
        let value = self.table.get(&key).copied();
        if value.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        value
    }

    /// Store a freshly computed value.
    pub fn store(&mut self, key: BlockKey, value: i32) {
        self.table.insert(key, value);
    }

    /// Number of distinct block states stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Probes answered from the table.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Probes that required a full scan.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
