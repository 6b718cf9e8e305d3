//! seedbloom implements a classic, fixed-size bloom filter sized from the
//! number of items it is expected to hold and the false-positive probability
//! the caller is willing to accept.
//!
//! ```rust
//! use seedbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(20, 0.05)?;
//! filter.add("abound");
//! filter.add("abounds");
//! filter.add("abundance");
//!
//! assert!(filter.check("abound"));
//! assert!(!filter.check("abundant"));
//! # Ok::<(), seedbloom::Error>(())
//! ```
//!
//! A [`check`](BloomFilter::check) returning `false` means the item was
//! **definitely not** added. Returning `true` means it **probably** was, with a
//! false-positive rate approaching the configured probability as the filter
//! fills to its expected item count. Adding more items than that pushes the
//! real rate above the target.
//!
//! Items are hashed with `k` rounds of seeded MurmurHash3 (see
//! [`hash_indices`]), with `k` and the bit array size `m` derived once at
//! construction (see [`compute_bit_array_size`] and
//! [`compute_hash_round_count`]). Items cannot be removed and the filter never
//! grows.
//!
//! A `BloomFilter` is a plain owned value: `check` takes `&self` and `add`
//! takes `&mut self`, so sharing one across threads requires the caller to
//! serialise writers (for example with a `RwLock`).
//!
//! ## Features
//!
//! * `serde` - derive (de)serialisation for [`FilterParams`] and
//!   [`SizingPolicy`] with [serde], disabled by default
//!
//! [serde]: https://github.com/serde-rs/serde

mod bitmap;
mod bloom;
mod error;
mod filter_size;
mod hash;

pub use bitmap::*;
pub use bloom::*;
pub use error::*;
pub use filter_size::*;
pub use hash::*;

/// A trait to abstract bit storage for use in a
/// [`BloomFilter`](crate::BloomFilter).
///
/// Storage is fixed-length and monotonic: a bit, once set, stays set.
pub trait Bitmap {
    /// Construct an all-zero bitmap holding `len` bits.
    fn with_len(len: usize) -> Self;

    /// Set the bit indexed by `key`.
    ///
    /// Setting an already set bit is a no-op.
    fn set(&mut self, key: usize);

    /// Return `true` if the bit indexed by `key` was previously set.
    fn get(&self, key: usize) -> bool;

    /// Return the number of addressable bits.
    fn len(&self) -> usize;

    /// Return the number of set bits.
    fn count_ones(&self) -> usize;

    /// Return the size of the bitmap in bytes.
    fn byte_size(&self) -> usize;
}
