//! Block iteration.
//!
//! [`Blocks`] walks the block index front to back (or back to front),
//! yielding one [`BlockRef`] descriptor per block. It is the contract that
//! row-wise views over several containers are built on: restartable by
//! cloning, exact-sized, and never touching individual values unless asked.

use std::iter::FusedIterator;

use tessera_block::{BlockFuncs, Element, ElementStore, ElementType};

use crate::index::{tag_of, BlockIndex};

/// Descriptor of one block.
#[derive(Debug, PartialEq)]
pub struct BlockRef<'a, B> {
    /// Index of the block.
    pub index: usize,
    /// Logical position of its first element.
    pub position: usize,
    /// Number of positions it covers.
    pub size: usize,
    /// Tag of its values; [`ElementType::EMPTY`] for empty runs.
    pub element_type: ElementType,
    /// Its element block; `None` for empty runs.
    pub data: Option<&'a B>,
}

impl<B> Clone for BlockRef<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for BlockRef<'_, B> {}

impl<'a, B: BlockFuncs> BlockRef<'a, B> {
    /// Whether this is a run of empty positions.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// One past the last logical position of the block.
    pub fn end(&self) -> usize {
        self.position + self.size
    }

    /// The store of this block, if it holds `T`.
    pub fn store<T: Element<B>>(&self) -> Option<&'a T::Store> {
        self.data.and_then(T::store)
    }

    /// Iterator over the values of this block, if it holds `T`.
    pub fn values<T: Element<B>>(&self) -> Option<<T::Store as ElementStore>::Iter<'a>> {
        self.store::<T>().map(|store| store.iter())
    }
}

/// Iterator over the blocks of a [`SegmentedVec`](crate::SegmentedVec).
pub struct Blocks<'a, B> {
    index: &'a BlockIndex<B>,
    front: usize,
    back: usize,
}

impl<'a, B: BlockFuncs> Blocks<'a, B> {
    pub(crate) fn new(index: &'a BlockIndex<B>) -> Self {
        Self {
            index,
            front: 0,
            back: index.count(),
        }
    }

    fn describe(&self, i: usize) -> BlockRef<'a, B> {
        let data = self.index.blocks[i].as_ref();
        BlockRef {
            index: i,
            position: self.index.positions[i],
            size: self.index.sizes[i],
            element_type: tag_of(data),
            data,
        }
    }
}

impl<B> Clone for Blocks<'_, B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, B: BlockFuncs> Iterator for Blocks<'a, B> {
    type Item = BlockRef<'a, B>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.describe(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<B: BlockFuncs> DoubleEndedIterator for Blocks<'_, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.describe(self.back))
    }
}

impl<B: BlockFuncs> ExactSizeIterator for Blocks<'_, B> {}

impl<B: BlockFuncs> FusedIterator for Blocks<'_, B> {}
