//! Separate chaining: each bucket holds the insertion-ordered sequence
//! of entries that hashed to it.

use crate::hashing::{HashVariant, hash_index};

use super::{CapacityError, DictionaryTable, Entry};

/// Fixed-bucket-count hash table resolving collisions by chaining.
///
/// The bucket count never changes, so the load factor grows without
/// bound as the word list is inserted and chains lengthen. That growth
/// is exactly the quantity the comparison counter measures, so there is
/// no rehash path.
#[derive(Debug)]
pub struct ChainedHashTable {
    buckets: Vec<Vec<Entry>>,
    variant: HashVariant,
    comparisons: u64,
    len: usize,
}

impl ChainedHashTable {
    /// Creates a table with `capacity` empty buckets. All inserts and
    /// lookups use `variant`.
    pub fn new(capacity: usize, variant: HashVariant) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Self {
            buckets,
            variant,
            comparisons: 0,
            len: 0,
        }
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }
}

impl DictionaryTable for ChainedHashTable {
    fn insert(&mut self, key: &str, rank: u32) -> Result<(), CapacityError> {
        let index = hash_index(key, self.variant, self.buckets.len());
        self.buckets[index].push(Entry {
            key: key.to_owned(),
            rank,
        });
        self.len += 1;
        Ok(())
    }

    fn contains(&mut self, key: &str) -> bool {
        let index = hash_index(key, self.variant, self.buckets.len());
        for entry in &self.buckets[index] {
            self.comparisons += 1;
            if entry.key == key {
                return true;
            }
        }
        false
    }

    fn comparison_count(&self) -> u64 {
        self.comparisons
    }

    fn len(&self) -> usize {
        self.len
    }
}
