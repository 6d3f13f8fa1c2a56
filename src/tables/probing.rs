//! Linear probing: a colliding entry is placed in the next unoccupied
//! slot, scanning forward with wraparound.

use crate::hashing::{HashVariant, hash_index};

use super::{CapacityError, DictionaryTable, Entry};

/// Fixed-capacity open-addressing table with linear probing.
///
/// No deletion exists, so an empty slot proves a key is absent: every
/// probe run since construction is unbroken. Lookups rely on that for
/// termination, which is why a full table rejects further inserts
/// instead of silently filling the last slot.
#[derive(Debug)]
pub struct ProbingHashTable {
    slots: Vec<Option<Entry>>,
    variant: HashVariant,
    comparisons: u64,
    len: usize,
}

impl ProbingHashTable {
    /// Creates a table with `capacity` empty slots. All inserts and
    /// lookups use `variant`.
    pub fn new(capacity: usize, variant: HashVariant) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            variant,
            comparisons: 0,
            len: 0,
        }
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }
}

impl DictionaryTable for ProbingHashTable {
    fn insert(&mut self, key: &str, rank: u32) -> Result<(), CapacityError> {
        let capacity = self.slots.len();
        if self.len == capacity {
            return Err(CapacityError { capacity });
        }

        // no comparisons are counted while scanning for a free slot,
        // only lookups pay
        let mut index = hash_index(key, self.variant, capacity);
        while self.slots[index].is_some() {
            index = (index + 1) % capacity;
        }
        self.slots[index] = Some(Entry {
            key: key.to_owned(),
            rank,
        });
        self.len += 1;
        Ok(())
    }

    fn contains(&mut self, key: &str) -> bool {
        let capacity = self.slots.len();
        let mut index = hash_index(key, self.variant, capacity);
        // a table loaded to capacity has no empty slot to stop at, so
        // the walk is bounded to one full cycle
        for _ in 0..capacity {
            match &self.slots[index] {
                Some(entry) => {
                    self.comparisons += 1;
                    if entry.key == key {
                        return true;
                    }
                }
                None => return false,
            }
            index = (index + 1) % capacity;
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
