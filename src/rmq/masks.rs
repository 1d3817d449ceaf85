//! Per-position bitmasks answering minimum queries confined to one block.
//!
//! While sweeping a block from left to right, a stack holds the positions that are not yet
//! dominated by a strictly smaller element to their right. The mask of position j has one bit set
//! for every position on that stack just before j is pushed. Restricted to bits at or after some
//! offset l, the lowest remaining bit is the leftmost minimum of `[l, j]`, and if no bit remains,
//! j itself is the minimum.

use std::mem::size_of;

use crate::compare::Compare;
use crate::rmq::{MaskWord, BLOCK_SIZE};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct BlockMasks {
    masks: Vec<MaskWord>,
}

impl BlockMasks {
    pub(crate) fn new<T, C: Compare<T>>(data: &[T], cmp: &C) -> Self {
        let mut masks: Vec<MaskWord> = vec![0; data.len()];

        // local offsets of the undominated positions, reused for every block
        let mut stack: Vec<usize> = Vec::with_capacity(BLOCK_SIZE);

        data.chunks(BLOCK_SIZE)
            .zip(masks.chunks_mut(BLOCK_SIZE))
            .for_each(|(block, block_masks)| {
                stack.clear();
                for (j, elem) in block.iter().enumerate() {
                    // equal elements stay on the stack, so the earlier one keeps winning
                    while let Some(&top) = stack.last() {
                        if cmp.less(elem, &block[top]) {
                            stack.pop();
                        } else {
                            break;
                        }
                    }

                    if let Some(&top) = stack.last() {
                        block_masks[j] = block_masks[top] | (1 << top);
                    }
                    stack.push(j);
                }
            });

        Self { masks }
    }

    /// Returns the position of the minimum in `[l, r]` (inclusive), where both bounds lie in
    /// `block`. On ties, the leftmost position wins.
    #[inline]
    pub(crate) fn range_min(&self, block: usize, l: usize, r: usize) -> usize {
        let block_start = block * BLOCK_SIZE;
        debug_assert!(block_start <= l && l <= r && r < block_start + BLOCK_SIZE);

        let mask = self.masks[r] & (MaskWord::MAX << (l - block_start));
        if mask == 0 {
            r
        } else {
            block_start + mask.trailing_zeros() as usize
        }
    }

    pub(crate) fn heap_size(&self) -> usize {
        self.masks.len() * size_of::<MaskWord>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{NaturalOrder, Reverse};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn naive_leftmost<T: PartialOrd>(data: &[T], l: usize, r: usize) -> usize {
        (l..=r).fold(l, |m, p| if data[p] < data[m] { p } else { m })
    }

    #[test]
    fn test_mask_layout() {
        let data = [2, 10, 1, 100];
        let masks = BlockMasks::new(&data, &NaturalOrder);

        // stack before each push: [], [0], [0, 1] -> popped to [], [2]
        assert_eq!(masks.masks, vec![0b0, 0b1, 0b0, 0b100]);
    }

    #[test]
    fn test_within_block() {
        let data = [5, 3, 8, 3, 9, 1, 4];
        let masks = BlockMasks::new(&data, &NaturalOrder);

        assert_eq!(masks.range_min(0, 0, 0), 0);
        assert_eq!(masks.range_min(0, 0, 2), 1);
        assert_eq!(masks.range_min(0, 1, 4), 1);
        assert_eq!(masks.range_min(0, 2, 4), 3);
        assert_eq!(masks.range_min(0, 2, 6), 5);
        assert_eq!(masks.range_min(0, 6, 6), 6);
    }

    #[test]
    fn test_exhaustive_blocks() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let data: Vec<u8> = (0..5 * BLOCK_SIZE + 7).map(|_| rng.gen_range(0..6)).collect();
        let masks = BlockMasks::new(&data, &NaturalOrder);

        for (block, chunk) in data.chunks(BLOCK_SIZE).enumerate() {
            let start = block * BLOCK_SIZE;
            for l in start..start + chunk.len() {
                for r in l..start + chunk.len() {
                    assert_eq!(
                        masks.range_min(block, l, r),
                        naive_leftmost(&data, l, r),
                        "block = {}, l = {}, r = {}",
                        block,
                        l,
                        r
                    );
                }
            }
        }
    }

    #[test]
    fn test_reversed_order() {
        let data = [4, 7, 7, 2, 7];
        let masks = BlockMasks::new(&data, &Reverse(NaturalOrder));

        assert_eq!(masks.range_min(0, 0, 4), 1);
        assert_eq!(masks.range_min(0, 2, 4), 2);
        assert_eq!(masks.range_min(0, 3, 3), 3);
    }
}
