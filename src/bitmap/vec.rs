use crate::Bitmap;

use super::{bitmask_for_key, index_for_key, words_for_len};

/// A plain, heap-allocated, fixed-length bitmap.
///
/// Bits are packed into `usize` words, so a bitmap of `len` bits occupies
/// `ceil(len / usize::BITS)` words. Reads and writes are `O(1)`.
///
/// Bits can only be set, never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecBitmap {
    bitmap: Vec<usize>,
    len: usize,
}

impl Bitmap for VecBitmap {
    fn with_len(len: usize) -> Self {
        Self {
            bitmap: vec![0; words_for_len(len)],
            len,
        }
    }

    fn set(&mut self, key: usize) {
        assert!(key < self.len, "key {} out of range 0..{}", key, self.len);
        self.bitmap[index_for_key(key)] |= bitmask_for_key(key);
    }

    fn get(&self, key: usize) -> bool {
        assert!(key < self.len, "key {} out of range 0..{}", key, self.len);
        self.bitmap[index_for_key(key)] & bitmask_for_key(key) != 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn count_ones(&self) -> usize {
        // Bits past `len` in the last word are never set.
        self.bitmap.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn byte_size(&self) -> usize {
        self.bitmap.len() * std::mem::size_of::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const LEN: usize = 1028;

    #[test]
    fn test_empty() {
        let b = VecBitmap::with_len(LEN);
        assert_eq!(b.len(), LEN);
        assert_eq!(b.count_ones(), 0);
        assert!((0..LEN).all(|i| !b.get(i)));
    }

    #[test]
    fn test_word_boundaries() {
        let bits = std::mem::size_of::<usize>() * 8;
        let mut b = VecBitmap::with_len(bits + 1);
        assert_eq!(b.byte_size(), 2 * std::mem::size_of::<usize>());

        b.set(bits - 1);
        b.set(bits);
        assert!(b.get(bits - 1));
        assert!(b.get(bits));
        assert!(!b.get(0));
        assert_eq!(b.count_ones(), 2);
    }

    #[test]
    fn test_single_bit() {
        let mut b = VecBitmap::with_len(1);
        assert_eq!(b.byte_size(), std::mem::size_of::<usize>());
        b.set(0);
        assert!(b.get(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range() {
        let mut b = VecBitmap::with_len(124);
        b.set(124);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let b = VecBitmap::with_len(124);
        b.get(200);
    }

    proptest! {
        #[test]
        fn prop_set_get(
            values in prop::collection::hash_set(0..LEN, 0..20),
        ) {
            let mut b = VecBitmap::with_len(LEN);

            for v in &values {
                b.set(*v);
            }

            // Ensure all values are equal in the test range.
            for i in 0..LEN {
                assert_eq!(b.get(i), values.contains(&i));
            }

            assert_eq!(b.count_ones(), values.len());
        }

        #[test]
        fn prop_set_idempotent(
            values in prop::collection::vec(0..LEN, 0..20),
        ) {
            let mut once = VecBitmap::with_len(LEN);
            let mut twice = VecBitmap::with_len(LEN);

            for v in &values {
                once.set(*v);
                twice.set(*v);
                twice.set(*v);
            }

            // Invariant: setting a bit again never changes the bitmap.
            assert_eq!(once, twice);
        }
    }
}
