//! # Rotating Byte-Sum Hash
//!
//! A small, deterministic string hash used to pick buckets in the chained string table.
//! Each byte is added to a 32-bit accumulator, which is then rotated left by five bits.
//!
//! ```text
//! acc = 0
//! for b in bytes:
//!     acc = rotl32(acc + b, 5)
//! index = acc mod capacity
//! ```
//!
//! ## Key Features
//! - **Bit-exact**: the 32-bit width and the 5-bit rotation are fixed. Changing either changes
//!   every bucket assignment.
//! - **Unseeded**: the same input always lands in the same bucket, across runs and machines.
//! - **Implements** `std::hash::Hasher`, so the raw accumulator can be driven byte-by-byte.
//!
//! **Note**: this is not a general-purpose or collision-resistant hash. Strings that are
//! permutations of each other with matching rotations collide easily, which is exactly what
//! the collision statistics of the table are meant to expose.

use std::hash::Hasher;

/// Rotation applied to the accumulator after each byte.
pub const ROTATION_BITS: u32 = 5;

/// Hashes a byte slice into the raw 32-bit accumulator.
///
/// Overflow wraps; there is no error case. An empty slice yields 0.
#[inline]
pub fn rotate_sum(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, &b| {
        acc.wrapping_add(u32::from(b)).rotate_left(ROTATION_BITS)
    })
}

/// Maps a string onto a bucket in `[0, capacity)`.
///
/// # Panics
/// Panics if `capacity` is zero. Tables reject a zero capacity when they are built.
#[inline]
pub fn bucket_index(s: &str, capacity: usize) -> usize {
    let mut hasher = RotateSumHasher::new();
    hasher.write(s.as_bytes());
    (hasher.finish() as usize) % capacity
}

/// Streaming form of [`rotate_sum`].
///
/// Feeding the same bytes across several `write` calls gives the same result as one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateSumHasher {
    acc: u32,
}

impl RotateSumHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current 32-bit accumulator.
    pub fn value(&self) -> u32 {
        self.acc
    }
}

impl Hasher for RotateSumHasher {
    fn finish(&self) -> u64 {
        u64::from(self.acc)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.acc = self.acc.wrapping_add(u32::from(b)).rotate_left(ROTATION_BITS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(rotate_sum(b""), 0);
        // 'a' = 97, rotated left by 5
        assert_eq!(rotate_sum(b"a"), 97 << 5);
        // ((97 << 5) + 98) << 5, no bits wrap yet
        assert_eq!(rotate_sum(b"ab"), ((97 << 5) + 98) << 5);
    }

    #[test]
    fn rotation_wraps_high_bits() {
        // after seven bytes the accumulator has been shifted 35 bits, so high bits must come back around
        let manual = b"zzzzzzz".iter().fold(0u32, |acc, &b| {
            let acc = acc.wrapping_add(b as u32);
            (acc << 5) | (acc >> 27)
        });
        assert_eq!(rotate_sum(b"zzzzzzz"), manual);
    }

    #[test]
    fn non_ascii_bytes_are_unsigned() {
        let s = "é"; // 0xC3 0xA9
        let expected = ((0xC3u32 << 5) + 0xA9).rotate_left(5);
        assert_eq!(rotate_sum(s.as_bytes()), expected);
    }

    #[test]
    fn bucket_index_in_range_and_deterministic() {
        let words = ["", "a", "hash", "table", "separate chaining", "Zebra", "zebra"];
        for cap in [1usize, 2, 7, 101, 1000] {
            for w in words {
                let i = bucket_index(w, cap);
                assert!(i < cap);
                assert_eq!(i, bucket_index(w, cap));
            }
        }
        assert_eq!(bucket_index("", 7), 0);
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut h = RotateSumHasher::new();
        h.write(b"sepa");
        h.write(b"rate");
        assert_eq!(h.value(), rotate_sum(b"separate"));
        assert_eq!(h.finish(), rotate_sum(b"separate") as u64);
    }
}
