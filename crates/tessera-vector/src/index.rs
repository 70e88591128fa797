//! The block index: an ordered partition of the logical length.
//!
//! Stored as parallel arrays (struct-of-arrays) so the position-adjustment
//! routine runs over a flat `Vec<usize>`. Slot `i` of each array describes
//! block `i`; `blocks[i] == None` marks a run of empty positions.

use std::ops::Range;

use smallvec::SmallVec;
use tessera_block::BlockFuncs;
use tessera_core::{ElementType, IntegrityError};

use crate::adjust::adjust_positions;
use crate::config::VectorConfig;

/// One block in transit: a run length plus its element block, if any.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Block<B> {
    pub(crate) size: usize,
    pub(crate) data: Option<B>,
}

impl<B: BlockFuncs> Block<B> {
    pub(crate) fn empty(size: usize) -> Self {
        Self { size, data: None }
    }

    pub(crate) fn filled(data: B) -> Self {
        Self {
            size: data.len(),
            data: Some(data),
        }
    }
}

/// Small batch of blocks; most restructurings touch at most a handful.
pub(crate) type Pieces<B> = SmallVec<[Block<B>; 4]>;

/// Tag of an optional element block.
pub(crate) fn tag_of<B: BlockFuncs>(data: Option<&B>) -> ElementType {
    data.map_or(ElementType::EMPTY, |b| b.element_type())
}

pub(crate) struct BlockIndex<B> {
    pub(crate) positions: Vec<usize>,
    pub(crate) sizes: Vec<usize>,
    pub(crate) blocks: Vec<Option<B>>,
}

impl<B: BlockFuncs> BlockIndex<B> {
    pub(crate) fn new() -> Self {
        Self {
            positions: Vec::new(),
            sizes: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn element_type(&self, i: usize) -> ElementType {
        tag_of(self.blocks[i].as_ref())
    }

    /// One past the last position of block `i`.
    pub(crate) fn end_of(&self, i: usize) -> usize {
        self.positions[i] + self.sizes[i]
    }

    /// Index of the block holding `pos`, searching from block `from`.
    ///
    /// `pos` must be less than the logical length. Looking at `from` and
    /// its successor first makes sequential access O(1).
    pub(crate) fn find(&self, pos: usize, from: usize) -> usize {
        let from = from.min(self.count() - 1);
        if self.positions[from] <= pos {
            if pos < self.end_of(from) {
                return from;
            }
            let next = from + 1;
            if next < self.count() && pos < self.end_of(next) {
                return next;
            }
            from + self.positions[from..].partition_point(|&p| p <= pos) - 1
        } else {
            self.positions[..from].partition_point(|&p| p <= pos) - 1
        }
    }

    pub(crate) fn insert(&mut self, i: usize, position: usize, block: Block<B>) {
        self.positions.insert(i, position);
        self.sizes.insert(i, block.size);
        self.blocks.insert(i, block.data);
    }

    pub(crate) fn remove(&mut self, i: usize) -> Block<B> {
        self.positions.remove(i);
        Block {
            size: self.sizes.remove(i),
            data: self.blocks.remove(i),
        }
    }

    /// Replace blocks `range` with `new`, laid out from `start_position`.
    ///
    /// Positions after the spliced region are left untouched.
    pub(crate) fn splice(
        &mut self,
        range: Range<usize>,
        new: Pieces<B>,
        start_position: usize,
    ) -> Pieces<B> {
        let mut positions: SmallVec<[usize; 4]> = SmallVec::with_capacity(new.len());
        let mut sizes: SmallVec<[usize; 4]> = SmallVec::with_capacity(new.len());
        let mut data: SmallVec<[Option<B>; 4]> = SmallVec::with_capacity(new.len());
        let mut at = start_position;
        for block in new {
            positions.push(at);
            sizes.push(block.size);
            data.push(block.data);
            at += block.size;
        }
        self.positions.splice(range.clone(), positions);
        let removed_sizes: SmallVec<[usize; 4]> = self.sizes.splice(range.clone(), sizes).collect();
        let removed_data: SmallVec<[Option<B>; 4]> = self.blocks.splice(range, data).collect();
        removed_sizes
            .into_iter()
            .zip(removed_data)
            .map(|(size, data)| Block { size, data })
            .collect()
    }

    pub(crate) fn adjust(&mut self, from: usize, delta: isize, config: &VectorConfig) {
        adjust_positions(&mut self.positions, from, delta, config);
    }

    /// Remove every block, yielding their element blocks.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = B> + '_ {
        self.positions.clear();
        self.sizes.clear();
        self.blocks.drain(..).flatten()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.positions.shrink_to_fit();
        self.sizes.shrink_to_fit();
        self.blocks.shrink_to_fit();
        for block in self.blocks.iter_mut().flatten() {
            block.shrink_to_fit();
        }
    }

    /// Verify every structural invariant against logical length `len`.
    pub(crate) fn check_integrity(&self, len: usize) -> Result<(), IntegrityError> {
        if self.positions.len() != self.sizes.len() || self.sizes.len() != self.blocks.len() {
            return Err(IntegrityError::ArrayLengthMismatch {
                positions: self.positions.len(),
                sizes: self.sizes.len(),
                blocks: self.blocks.len(),
            });
        }
        let mut expected = 0;
        for i in 0..self.count() {
            if self.sizes[i] == 0 {
                return Err(IntegrityError::ZeroSizeBlock { index: i });
            }
            if self.positions[i] != expected {
                return Err(IntegrityError::PositionMismatch {
                    index: i,
                    expected,
                    actual: self.positions[i],
                });
            }
            if let Some(block) = &self.blocks[i] {
                if block.len() != self.sizes[i] {
                    return Err(IntegrityError::StoreSizeMismatch {
                        index: i,
                        recorded: self.sizes[i],
                        store: block.len(),
                    });
                }
            }
            if i > 0 && self.element_type(i - 1) == self.element_type(i) {
                return Err(IntegrityError::AdjacentSameType {
                    index: i - 1,
                    element_type: self.element_type(i),
                });
            }
            expected += self.sizes[i];
        }
        if expected != len {
            return Err(IntegrityError::TotalSizeMismatch {
                expected: len,
                actual: expected,
            });
        }
        Ok(())
    }
}
