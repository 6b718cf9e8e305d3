use crate::{
    bitmap::VecBitmap,
    error::Result,
    filter_size::{FilterParams, SizingPolicy},
    hash::hash_indices,
    Bitmap,
};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Construct [`BloomFilter`] instances with varying parameters.
///
/// ```rust
/// use seedbloom::{BloomFilterBuilder, SizingPolicy, VecBitmap};
///
/// let mut filter = BloomFilterBuilder::new(1000, 0.01)
///                     .sizing(SizingPolicy::RoundUp)
///                     .with_bitmap::<VecBitmap>()
///                     .build()?;
///
/// filter.add("success!");
/// # Ok::<(), seedbloom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<B = VecBitmap> {
    params: FilterParams,
    _bitmap: PhantomData<B>,
}

impl BloomFilterBuilder<VecBitmap> {
    /// Initialise a builder for a filter holding `expected_items` at a
    /// false-positive probability of `false_positive_probability`, backed by a
    /// [`VecBitmap`] and using [`SizingPolicy::Truncate`] unless changed.
    pub fn new(expected_items: usize, false_positive_probability: f64) -> Self {
        Self::from_params(FilterParams::new(
            expected_items,
            false_positive_probability,
        ))
    }

    /// Initialise a builder from a complete set of [`FilterParams`].
    pub fn from_params(params: FilterParams) -> Self {
        Self {
            params,
            _bitmap: PhantomData,
        }
    }
}

impl<B> BloomFilterBuilder<B>
where
    B: Bitmap,
{
    /// Set the rounding applied to the sizing formulas.
    pub fn sizing(mut self, sizing: SizingPolicy) -> Self {
        self.params.sizing = sizing;
        self
    }

    /// Set the bit storage type for the bloom filter.
    pub fn with_bitmap<U: Bitmap>(self) -> BloomFilterBuilder<U> {
        BloomFilterBuilder {
            params: self.params,
            _bitmap: PhantomData,
        }
    }

    /// Validate the parameters, derive the filter dimensions and allocate the
    /// bit storage.
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
    /// the expected item count is zero or the false-positive probability is
    /// not strictly between 0 and 1.
    pub fn build(self) -> Result<BloomFilter<B>> {
        self.params.validate()?;
        let (bit_array_size, hash_round_count) = self.params.dimensions()?;

        debug!(
            expected_items = self.params.expected_items,
            false_positive_probability = self.params.false_positive_probability,
            sizing = ?self.params.sizing,
            bit_array_size,
            hash_round_count,
            "initialised bloom filter"
        );

        Ok(BloomFilter {
            params: self.params,
            bit_array_size,
            hash_round_count,
            bitmap: B::with_len(bit_array_size),
        })
    }
}

/// A fixed-size bloom filter over byte sequences.
///
/// The bit array size `m` and hash round count `k` are derived once at
/// construction and never change. [`add`](BloomFilter::add) sets `k` bits
/// for an item and [`check`](BloomFilter::check) tests the same `k` bits:
///
/// ```rust
/// use seedbloom::BloomFilter;
///
/// let mut b = BloomFilter::new(1000, 0.01)?;
/// b.add("hello 🐐");
/// assert!(b.check("hello 🐐"));
///
/// let data: [u8; 4] = [1, 2, 3, 42];
/// b.add(data);
/// assert!(b.check(&data));
/// # Ok::<(), seedbloom::Error>(())
/// ```
///
/// Anything implementing `AsRef<[u8]>` can be added: strings, byte slices,
/// arrays and vectors. Items are hashed by content, so `"abc"` and `b"abc"`
/// are the same item.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter<B = VecBitmap> {
    params: FilterParams,
    bit_array_size: usize,
    hash_round_count: usize,
    bitmap: B,
}

impl BloomFilter<VecBitmap> {
    /// Construct a filter holding `expected_items` at a false-positive
    /// probability of `false_positive_probability`.
    ///
    /// This is the equivalent of:
    ///
    /// ```rust
    /// use seedbloom::BloomFilterBuilder;
    ///
    /// let b = BloomFilterBuilder::new(20, 0.05).build()?;
    /// assert_eq!(b.bit_array_size(), 124);
    /// assert_eq!(b.hash_round_count(), 4);
    /// # Ok::<(), seedbloom::Error>(())
    /// ```
    pub fn new(expected_items: usize, false_positive_probability: f64) -> Result<Self> {
        BloomFilterBuilder::new(expected_items, false_positive_probability).build()
    }

    /// Construct a filter from a complete set of [`FilterParams`].
    pub fn from_params(params: FilterParams) -> Result<Self> {
        BloomFilterBuilder::from_params(params).build()
    }
}

impl<B> BloomFilter<B>
where
    B: Bitmap,
{
    /// Add `item` to the filter.
    ///
    /// Any subsequent call to [`check`](BloomFilter::check) for the same
    /// `item` returns `true`. Adding an item more than once has no further
    /// effect.
    pub fn add<T: AsRef<[u8]>>(&mut self, item: T) {
        let item = item.as_ref();
        trace!(len = item.len(), "adding item");

        for key in hash_indices(item, self.hash_round_count, self.bit_array_size) {
            self.bitmap.set(key);
        }
    }

    /// Checks if `item` exists in the filter.
    ///
    /// If `check` returns true, `item` has **probably** been added previously.
    /// If `check` returns false, `item` has **definitely not** been added.
    ///
    /// Probing stops at the first unset bit.
    pub fn check<T: AsRef<[u8]>>(&self, item: T) -> bool {
        hash_indices(item.as_ref(), self.hash_round_count, self.bit_array_size)
            .all(|key| self.bitmap.get(key))
    }

    /// The false-positive probability this filter was sized for.
    pub fn false_positive_probability(&self) -> f64 {
        self.params.false_positive_probability
    }

    /// The number of items this filter was sized for (`n`).
    pub fn expected_items(&self) -> usize {
        self.params.expected_items
    }

    /// The number of bits in the filter (`m`).
    pub fn bit_array_size(&self) -> usize {
        self.bit_array_size
    }

    /// The number of hash rounds applied per item (`k`).
    pub fn hash_round_count(&self) -> usize {
        self.hash_round_count
    }

    /// The rounding used to derive `m` and `k`.
    pub fn sizing(&self) -> SizingPolicy {
        self.params.sizing
    }

    /// Return `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.bitmap.count_ones() == 0
    }

    /// The number of bits currently set.
    pub fn count_set_bits(&self) -> usize {
        self.bitmap.count_ones()
    }

    /// The fraction of bits currently set, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.bitmap.count_ones() as f64 / self.bit_array_size as f64
    }

    /// Estimate the probability that [`check`](BloomFilter::check) returns
    /// true for an item never added, given the bits set so far.
    ///
    /// This tracks the configured probability while the filter holds around
    /// [`expected_items`](BloomFilter::expected_items) items, and exceeds it
    /// once the filter is overfilled.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        // k <= ~1075 for any representable probability.
        self.fill_ratio().powi(self.hash_round_count as i32)
    }

    /// Return the byte size of the bit storage.
    pub fn byte_size(&self) -> usize {
        self.bitmap.byte_size()
    }
}
