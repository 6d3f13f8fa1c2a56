//! Hash tables used for dictionary membership checks.
//!
//! Two collision-resolution strategies, each instrumented with a
//! comparison counter so their lookup costs can be compared.

mod chaining;
mod probing;

pub use chaining::ChainedHashTable;
pub use probing::ProbingHashTable;

use thiserror::Error;

/// A stored dictionary word together with its rank.
///
/// Rank is the 1-based position of the word in the source list. It is
/// carried as payload only; lookups never consult it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub rank: u32,
}

/// Returned when a probing table has no free slot left for an insert.
///
/// Tables never resize, so this is a configuration error: the probing
/// capacity must be sized with comfortable margin over the word list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("probing table is full (capacity {capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Common surface of both table kinds.
///
/// `contains` takes `&mut self` because every lookup updates the table's
/// owned comparison counter. Counters start at zero and never decrease;
/// only constructing a fresh table resets them.
pub trait DictionaryTable {
    /// Stores a word with its rank. Duplicate keys are stored again,
    /// never merged or overwritten.
    fn insert(&mut self, key: &str, rank: u32) -> Result<(), CapacityError>;

    /// Whether the key was previously inserted, counting one comparison
    /// per key-equality check made along the way (the matching check
    /// included).
    fn contains(&mut self, key: &str) -> bool;

    /// Cumulative key comparisons across all lookups since construction.
    fn comparison_count(&self) -> u64;

    /// Number of entries stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
