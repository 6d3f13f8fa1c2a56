//! String hashing for table index computation.
//!
//! Two deliberately different algorithms are kept side by side so that
//! lookup costs can be compared between them over the same word list.

/// Selects which string-hash algorithm a table instance uses.
///
/// Fixed per table at construction; mixing variants between insert and
/// lookup would break the no-false-negatives guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// Multiplier 37 over a sample of roughly eight characters spread
    /// across the key (`skip = max(1, len / 8)`).
    LegacySampled,
    /// Multiplier 31 over every character in order.
    FullSequential,
}

/// Maps a key to a bucket index in `[0, capacity)`.
///
/// Accumulation wraps on 32-bit signed arithmetic. The wraparound is part
/// of the algorithm, not an accident: changing the width or saturating
/// would shuffle every bucket assignment.
pub fn hash_index(key: &str, variant: HashVariant, capacity: usize) -> usize {
    let h = match variant {
        HashVariant::LegacySampled => {
            let chars: Vec<char> = key.chars().collect();
            let skip = (chars.len() / 8).max(1);
            let mut h: i32 = 0;
            let mut i = 0;
            while i < chars.len() {
                h = h.wrapping_mul(37).wrapping_add(chars[i] as i32);
                i += skip;
            }
            h
        }
        HashVariant::FullSequential => key
            .chars()
            .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32)),
    };

    // abs(i32::MIN) would overflow, unsigned_abs cannot
    h.unsigned_abs() as usize % capacity
}
