//! Seeded, deterministic hashing of integer sequences.
//!
//! `hash_code()` values must be stable for equal digit sequences across the
//! whole process, so the hash is fixed (MurmurHash3 x86_32 over the
//! little-endian bytes of each element) and the seed depends only on a type
//! name.

use std::io::Cursor;

use sha2::{Digest, Sha256};

/// Derives a hash seed from a type name.
///
/// The seed is the first four bytes of the SHA-256 of the name, read
/// big-endian.
pub fn seed_for(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Hashes a sequence of integers with the given seed.
///
/// An empty sequence always hashes to `0`, whatever the seed.
pub fn hash_sequence<I>(values: I, seed: u32) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let bytes: Vec<u8> = values.into_iter().flat_map(u32::to_le_bytes).collect();
    if bytes.is_empty() {
        return 0;
    }

    // Reading from an in-memory cursor cannot fail.
    murmur3::murmur3_32(&mut Cursor::new(bytes), seed).unwrap_or(0)
}
