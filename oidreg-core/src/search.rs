//! Hashing and ordering of encoded OIDs
//!
//! The registry search table is sorted with [`search_order`] when it is
//! generated and binary-searched with the same comparator at runtime, so the
//! two can never disagree about where an entry lives.
//!
//! # Ordering
//!
//! Entries are ordered by:
//! 1. the 8-bit [`oid_hash`] of the encoding,
//! 2. the encoded length,
//! 3. the encoded bytes compared from the last byte towards the first.
//!
//! OIDs from the same organisation share long prefixes and usually differ in
//! their final arcs, so comparing from the tail finds the mismatch early.

use std::cmp::Ordering;

/// Hash an encoded OID down to 8 bits
///
/// The hash is seeded with `len - 1`, adds `33 * byte` for every byte with
/// 32-bit wraparound, and then folds the four bytes of the result together.
/// Collisions are expected; the search order resolves them.
pub fn oid_hash(data: &[u8]) -> u8 {
    let mut hash = (data.len() as u32).wrapping_sub(1);
    for &byte in data {
        hash = hash.wrapping_add(u32::from(byte) * 33);
    }
    hash = (hash >> 24) ^ (hash >> 16) ^ (hash >> 8) ^ hash;
    (hash & 0xFF) as u8
}

/// Compare two `(hash, encoding)` pairs in search table order
pub fn search_order(a: (u8, &[u8]), b: (u8, &[u8])) -> Ordering {
    let (a_hash, a_data) = a;
    let (b_hash, b_data) = b;

    a_hash
        .cmp(&b_hash)
        .then_with(|| a_data.len().cmp(&b_data.len()))
        .then_with(|| a_data.iter().rev().cmp(b_data.iter().rev()))
}
