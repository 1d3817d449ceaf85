//! Range minimum query data structures. These data structures allow to calculate the index of the
//! minimum element in a range of a static sequence in constant time. The public structure is
//! [`DirectRmq`][direct_rmq::DirectRmq], which is assembled from a sparse table over block minima
//! and a per-position bitmask index for ranges within one block.

pub mod direct_rmq;

mod masks;
mod sparse_table;

/// Number of consecutive positions that form one block. Each position of a block gets a 32-bit
/// mask with one bit per position of the block.
pub const BLOCK_SIZE: usize = 32;

/// Unsigned integer backing the intra-block bitmasks.
pub(crate) type MaskWord = u32;

const _: () = assert!(
    BLOCK_SIZE <= MaskWord::BITS as usize && MaskWord::BITS as usize % BLOCK_SIZE == 0,
    "block size must evenly divide the mask word width"
);

/// A common trait for range minimum query sources bound to their data, to allow generic
/// implementations.
pub trait RangeMinimum {
    /// Returns the index of the minimum element in the half-open range `[l, r)`.
    fn range_min(&self, l: usize, r: usize) -> usize;

    /// Returns the number of elements that can be queried.
    fn len(&self) -> usize;

    /// Returns true if there are no elements to query.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
