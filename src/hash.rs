//! Seeded MurmurHash3 indexing shared by [`add`](crate::BloomFilter::add) and
//! [`check`](crate::BloomFilter::check).
//!
//! Each of the `k` rounds hashes the item with the 32-bit x86 variant of
//! MurmurHash3, seeded with the round number, so a single hash primitive acts
//! as `k` independent hash functions.

use std::io::Cursor;

/// Return the `k` bit indexes probed for `item` in a bit array of `m` bits.
///
/// Round `i` yields `murmur3_32(item, seed = i)` reduced into `0..m`. The
/// sequence is a pure function of `(item, k, m)`.
///
/// ```rust
/// use seedbloom::hash_indices;
///
/// let idx: Vec<_> = hash_indices(b"abound", 4, 124).collect();
/// assert_eq!(idx, [39, 79, 97, 83]);
/// ```
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn hash_indices(item: &[u8], k: usize, m: usize) -> impl Iterator<Item = usize> + '_ {
    assert!(m > 0, "bit array size must be non-zero");

    // k is bounded by -log2(p) for p > f64::MIN_POSITIVE, so the seed always
    // fits in a u32.
    (0..k).map(move |round| reduce(murmur3_32(item, round as u32), m))
}

fn murmur3_32(item: &[u8], seed: u32) -> u32 {
    // Reading from an in-memory slice never returns an IO error.
    murmur3::murmur3_32(&mut Cursor::new(item), seed)
        .expect("murmur3 read from a byte slice cannot fail")
}

/// Map a 32-bit digest into `0..m`.
///
/// The digest is read as a signed `i32` and reduced with a non-negative
/// modulo, so negative digests wrap from the top of the range.
#[inline(always)]
fn reduce(digest: u32, m: usize) -> usize {
    let signed = digest as i32;
    let magnitude = signed.unsigned_abs() as usize % m;

    if signed >= 0 || magnitude == 0 {
        magnitude
    } else {
        m - magnitude
    }
}
