//! Bitmap implementations for the backing storage of a
//! [`BloomFilter`](crate::BloomFilter).

mod vec;
pub use vec::*;

use std::mem;

const BITS_PER_WORD: usize = mem::size_of::<usize>() * 8;

#[inline(always)]
fn bitmask_for_key(key: usize) -> usize {
    1 << (key % BITS_PER_WORD)
}

#[inline(always)]
fn index_for_key(key: usize) -> usize {
    key / BITS_PER_WORD
}

#[inline(always)]
fn words_for_len(len: usize) -> usize {
    (len + BITS_PER_WORD - 1) / BITS_PER_WORD
}
