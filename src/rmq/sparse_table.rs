//! Sparse table over the block minima. It pre-computes the minimum position in windows of 2^k
//! consecutive blocks for all k and uses this information to answer queries over whole blocks in
//! constant time, with O(b log b) space for b blocks.

use std::mem::size_of;
use std::ops::Index;

use crate::compare::{arg_min, Compare};

/// Level k holds, for every block i, the absolute position of the minimum element in blocks
/// `[i, i + 2^k)`. Only the first `blocks - 2^k + 1` entries of level k are meaningful, the rest
/// of the row is padding.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct BlockSparseTable {
    blocks: usize,

    // levels are stored one after another in a single vector of length levels * blocks, so a
    // query touches a single allocation.
    table: Vec<usize>,
}

impl BlockSparseTable {
    /// Builds the table from the position of the minimum of each block. `data` is the sequence the
    /// positions point into.
    pub(crate) fn new<T, C: Compare<T>>(block_argmin: Vec<usize>, data: &[T], cmp: &C) -> Self {
        let blocks = block_argmin.len();
        debug_assert!(blocks > 0, "sparse table needs at least one block");

        let levels = blocks.ilog2() as usize + 1;
        let mut table = block_argmin;
        table.resize(levels * blocks, 0);

        // each window of 2^k blocks is the union of two adjacent windows of 2^(k-1) blocks from
        // the previous level
        for k in 1..levels {
            let half = 1 << (k - 1);
            let (lower, upper) = table.split_at_mut(k * blocks);
            let previous = &lower[(k - 1) * blocks..];
            for i in 0..=blocks - (1 << k) {
                upper[i] = arg_min(cmp, data, previous[i], previous[i + half]);
            }
        }

        Self { blocks, table }
    }

    /// Returns the position of the minimum element within blocks `[i, j]` (inclusive) in
    /// constant time. On ties, the leftmost position wins.
    ///
    /// The window is covered by two overlapping power-of-two windows, which may both contain the
    /// same block. That is harmless, since comparing a position with itself keeps it.
    pub(crate) fn range_min<T, S, C>(&self, i: usize, j: usize, data: &S, cmp: &C) -> usize
    where
        S: Index<usize, Output = T> + ?Sized,
        C: Compare<T>,
    {
        debug_assert!(i <= j && j < self.blocks, "block range out of bounds");
        let k = (j - i + 1).ilog2() as usize;
        let level = &self.table[k * self.blocks..(k + 1) * self.blocks];
        arg_min(cmp, data, level[i], level[j + 1 - (1 << k)])
    }

    /// Number of blocks covered by the table.
    pub(crate) fn block_count(&self) -> usize {
        self.blocks
    }

    pub(crate) fn heap_size(&self) -> usize {
        self.table.len() * size_of::<usize>()
    }
}
