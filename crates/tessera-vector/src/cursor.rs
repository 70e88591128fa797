//! Position cursors.
//!
//! A [`Cursor`] names a block of one container at one generation. It is
//! generation-scoped: any structural change bumps the container's
//! generation, so presenting an old cursor is detected in O(1) instead of
//! silently addressing a block that has since moved or disappeared.

use std::fmt;

use tessera_core::InstanceId;

/// Opaque handle to a block, returned by every mutator.
///
/// Passing the cursor of the previous call to the next `*_with_hint` call
/// starts the block search at the remembered block, which makes sequential
/// access amortised O(1) rather than O(log B).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Container that issued the cursor.
    pub(crate) instance: InstanceId,
    /// Container generation when the cursor was issued.
    pub(crate) generation: u64,
    /// Index of the referenced block; equal to the block count for the end.
    pub(crate) block_index: usize,
    /// Logical position of the first element of the referenced block.
    pub(crate) block_position: usize,
}

impl Cursor {
    /// Container that issued this cursor.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Generation this cursor belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the referenced block.
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    /// Logical position of the first element of the referenced block.
    pub fn block_position(&self) -> usize {
        self.block_position
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cursor(vec={}, gen={}, block={}@{})",
            self.instance, self.generation, self.block_index, self.block_position
        )
    }
}

/// A logical position resolved to a block and an offset within it.
///
/// Step through a container with
/// [`SegmentedVec::advance_position`](crate::SegmentedVec::advance_position).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// The block holding the position.
    pub cursor: Cursor,
    /// Offset of the position from the start of the block.
    pub offset: usize,
}

impl Position {
    /// The logical position this resolves.
    pub fn logical(&self) -> usize {
        self.cursor.block_position + self.offset
    }
}
