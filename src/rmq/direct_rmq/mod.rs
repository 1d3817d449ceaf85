//! A range minimum query index with linear construction time and constant query time.
//! The sequence is split into blocks of [`BLOCK_SIZE`] elements. Queries spanning multiple blocks
//! are answered by a sparse table over the block minima, and the partial blocks at either end are
//! answered by per-position bitmasks. The index stores positions only, the sequence itself stays
//! with the caller and is passed to every query.

use std::ops::{Bound, Deref, Index, RangeBounds};

use crate::compare::{arg_min, Compare, NaturalOrder};
use crate::rmq::masks::BlockMasks;
use crate::rmq::sparse_table::BlockSparseTable;
use crate::rmq::{RangeMinimum, BLOCK_SIZE};

/// A data structure for range minimum queries over a borrowed sequence, with O(n) construction
/// time and space and O(1) query time. It does not own or copy the elements, so the same
/// sequence (or one with identical length and order) must be passed to every query.
///
/// The minimum is decided by a [`Compare`] implementation, which defaults to [`NaturalOrder`].
/// If the minimum occurs more than once in a range, the leftmost occurrence is returned.
///
/// # Example
/// ```rust
/// use direct_rmq::DirectRmq;
///
/// let data = vec![2, 10, 1, 100];
/// let rmq = DirectRmq::new(&data);
///
/// assert_eq!(rmq.query(0, 4, &data), 2);
/// assert_eq!(rmq.query(0, 1, &data), 0);
/// assert_eq!(rmq.query(1, 3, &data), 2);
/// assert_eq!(rmq.query(3, 4, &data), 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectRmq<C = NaturalOrder> {
    len: usize,
    cmp: C,
    blocks: BlockSparseTable,
    masks: BlockMasks,
}

impl DirectRmq {
    /// Creates a new range minimum query index over `data` using the natural order of `T`.
    /// Creation time and space overhead are O(n).
    ///
    /// # Panics
    /// This function will panic if `data` is empty.
    #[must_use]
    pub fn new<T: PartialOrd>(data: &[T]) -> Self {
        Self::with_comparator(data, NaturalOrder)
    }
}

impl<C> DirectRmq<C> {
    /// Creates a new range minimum query index over `data`, where `cmp` decides which of two
    /// elements is smaller. The comparator is kept and used by every query.
    ///
    /// # Example
    /// ```rust
    /// use direct_rmq::{DirectRmq, NaturalOrder, Reverse};
    ///
    /// let data = vec![4, 10, 3, 11, 2, 12];
    /// let max_rmq = DirectRmq::with_comparator(&data, Reverse(NaturalOrder));
    /// assert_eq!(max_rmq.query(0, 4, &data), 3);
    /// ```
    ///
    /// # Panics
    /// This function will panic if `data` is empty.
    #[must_use]
    pub fn with_comparator<T>(data: &[T], cmp: C) -> Self
    where
        C: Compare<T>,
    {
        assert!(
            !data.is_empty(),
            "cannot build a range minimum query index over an empty sequence"
        );

        let blocks = BlockSparseTable::new(block_minima(data, &cmp), data, &cmp);
        let masks = BlockMasks::new(data, &cmp);

        Self {
            len: data.len(),
            cmp,
            blocks,
            masks,
        }
    }

    /// Returns the index of the minimum element of `data` in the half-open range `[l, r)` in O(1)
    /// time. If the minimum occurs multiple times, the leftmost index is returned.
    ///
    /// `data` must be the sequence the index was built from, or one with the same length and
    /// the same relative order of elements.
    ///
    /// # Panics
    /// Calling this function with `l >= r` or `r > len()` is a contract violation. It panics in
    /// debug builds and will produce either a panic or an incorrect result in release builds.
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn query<T, S>(&self, l: usize, r: usize, data: &S) -> usize
    where
        S: Index<usize, Output = T> + ?Sized,
        C: Compare<T>,
    {
        debug_assert!(l < r, "empty or inverted query range [{}, {})", l, r);
        debug_assert!(
            r <= self.len,
            "query range [{}, {}) out of bounds for length {}",
            l,
            r,
            self.len
        );

        let last = r - 1;
        let block_l = l / BLOCK_SIZE;
        let block_r = last / BLOCK_SIZE;

        // if the range is contained in a single block, the masks answer it directly
        if block_l == block_r {
            return self.masks.range_min(block_l, l, last);
        }

        let head = self.masks.range_min(block_l, l, (block_l + 1) * BLOCK_SIZE - 1);
        let tail = self.masks.range_min(block_r, block_r * BLOCK_SIZE, last);

        // if there are full blocks between the two partial blocks, the sparse table provides
        // their minimum. Candidates are combined left to right, so ties go to the left.
        if block_l + 1 < block_r {
            let middle = self
                .blocks
                .range_min(block_l + 1, block_r - 1, data, &self.cmp);
            let left = arg_min(&self.cmp, data, head, middle);
            arg_min(&self.cmp, data, left, tail)
        } else {
            arg_min(&self.cmp, data, head, tail)
        }
    }

    /// Convenience function for [`DirectRmq::query`] for using range operators.
    /// Unbounded ends are resolved to `0` and `len()` respectively.
    ///
    /// # Example
    /// ```rust
    /// use direct_rmq::DirectRmq;
    ///
    /// let data = vec![5, 4, 3, 2, 1];
    /// let rmq = DirectRmq::new(&data);
    /// assert_eq!(rmq.query_with_range(0..3, &data), 2);
    /// assert_eq!(rmq.query_with_range(0..=3, &data), 3);
    /// assert_eq!(rmq.query_with_range(.., &data), 4);
    /// ```
    ///
    /// # Panics
    /// The resolved range has the same preconditions as [`DirectRmq::query`].
    #[must_use]
    pub fn query_with_range<T, S, R>(&self, range: R, data: &S) -> usize
    where
        S: Index<usize, Output = T> + ?Sized,
        C: Compare<T>,
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(i) => *i,
            Bound::Excluded(i) => *i + 1,
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(i) => *i + 1,
            Bound::Excluded(i) => *i,
            Bound::Unbounded => self.len,
        };

        self.query(start, end, data)
    }

    /// Binds the index to `data`, so queries no longer need the sequence passed explicitly.
    ///
    /// # Example
    /// ```rust
    /// use direct_rmq::DirectRmq;
    ///
    /// let data = vec![7, 3, 9, 3];
    /// let rmq = DirectRmq::new(&data);
    /// let view = rmq.view(&data);
    /// assert_eq!(view.range_min(0, 4), 1);
    /// assert_eq!(*view.min(2, 4), 3);
    /// ```
    ///
    /// # Panics
    /// This function will panic if `data` does not have the length the index was built with.
    #[must_use]
    pub fn view<'a, T>(&'a self, data: &'a [T]) -> RmqView<'a, T, C>
    where
        C: Compare<T>,
    {
        assert_eq!(
            data.len(),
            self.len,
            "sequence length does not match the indexed length"
        );
        RmqView { rmq: self, data }
    }

    /// Returns the number of positions covered by the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index covers no positions. Since empty sequences are rejected at
    /// construction, this is always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of blocks the sequence was split into.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.block_count()
    }

    /// Returns the comparator used by this index.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the amount of memory used by the index in bytes. Does not include space allocated
    /// but not in use (e.g. unused capacity of vectors), nor the indexed sequence.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.blocks.heap_size() + self.masks.heap_size()
    }
}

impl<T: PartialOrd> From<&[T]> for DirectRmq {
    fn from(data: &[T]) -> Self {
        Self::new(data)
    }
}

/// Position of the minimum of every block, ties going to the earliest position.
fn block_minima<T, C: Compare<T>>(data: &[T], cmp: &C) -> Vec<usize> {
    data.chunks(BLOCK_SIZE)
        .enumerate()
        .map(|(block_index, block)| {
            let mut min_index = 0;
            for (i, elem) in block.iter().enumerate().skip(1) {
                if cmp.less(elem, &block[min_index]) {
                    min_index = i;
                }
            }
            block_index * BLOCK_SIZE + min_index
        })
        .collect()
}

/// A [`DirectRmq`] bound to the sequence it indexes. Created by [`DirectRmq::view`].
///
/// The view dereferences to the sequence, which allows indexing syntax and iterators on it.
#[derive(Debug)]
pub struct RmqView<'a, T, C = NaturalOrder> {
    rmq: &'a DirectRmq<C>,
    data: &'a [T],
}

impl<'a, T, C: Compare<T>> RmqView<'a, T, C> {
    /// Returns the index of the minimum element in `[l, r)`. See [`DirectRmq::query`].
    #[must_use]
    pub fn range_min(&self, l: usize, r: usize) -> usize {
        self.rmq.query(l, r, self.data)
    }

    /// Returns a reference to the minimum element in `[l, r)`.
    #[must_use]
    pub fn min(&self, l: usize, r: usize) -> &'a T {
        &self.data[self.range_min(l, r)]
    }

    /// Returns the underlying index.
    #[must_use]
    pub fn rmq(&self) -> &'a DirectRmq<C> {
        self.rmq
    }
}

impl<T, C> Clone for RmqView<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for RmqView<'_, T, C> {}

impl<T, C> Deref for RmqView<'_, T, C> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T, C: Compare<T>> RangeMinimum for RmqView<'_, T, C> {
    fn range_min(&self, l: usize, r: usize) -> usize {
        self.rmq.query(l, r, self.data)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
