//! The segmented container: construction, access, and restructuring.
//!
//! Public mutators live in `ops` and cross-container moves in `transfer`;
//! both funnel every structural change through the restructuring
//! primitives at the bottom of this file.

use std::fmt;

use smallvec::smallvec;
use tessera_block::{BlockFuncs, Element, ElementStore};
use tessera_core::{ElementType, HookError, InstanceId, IntegrityError, VectorError};

use crate::config::VectorConfig;
use crate::cursor::{Cursor, Position};
use crate::event::{trace_call, EventHandler, Hooks, NoEvents};
use crate::index::{Block, BlockIndex, Pieces};
use crate::iter::Blocks;

/// A logical array whose positions each hold a value of one registered
/// type, or nothing.
///
/// Physically the array is a sequence of blocks: maximal runs of
/// positions sharing one element type, each backed by one store. Every
/// mutation re-establishes the partition:
///
/// - block sizes sum to [`len`](Self::len);
/// - no block is empty;
/// - no two neighbouring blocks share an element type;
/// - each block starts where the previous one ends.
///
/// `B` is the closed set of element blocks (see
/// [`element_blocks!`](tessera_block::element_blocks)); `H` receives block
/// acquire/release notifications.
pub struct SegmentedVec<B: BlockFuncs, H: EventHandler<B> = NoEvents> {
    pub(crate) index: BlockIndex<B>,
    pub(crate) len: usize,
    pub(crate) instance: InstanceId,
    pub(crate) generation: u64,
    pub(crate) config: VectorConfig,
    pub(crate) hooks: Hooks<H>,
}

// ── Construction ────────────────────────────────────────────────

impl<B: BlockFuncs> SegmentedVec<B> {
    /// An empty container without event hooks.
    pub fn new() -> Self {
        Self::with_events(NoEvents)
    }

    /// A container of `len` empty positions.
    pub fn with_len(len: usize) -> Self {
        let mut vec = Self::new();
        vec.resize(len);
        vec
    }

    /// A container of `len` copies of `value`.
    pub fn filled<T: Element<B>>(len: usize, value: T) -> Self {
        Self::from_values(vec![value; len])
    }

    /// A container holding `values` in order.
    pub fn from_values<T, I>(values: I) -> Self
    where
        T: Element<B>,
        I: IntoIterator<Item = T>,
    {
        let mut vec = Self::new();
        vec.insert_at(0, values.into_iter().collect(), 0);
        vec
    }

    /// A container of `len` default values of the registered type
    /// `element_type`.
    ///
    /// Fails with [`VectorError::UnknownElementType`] for a tag that is not
    /// registered in `B`, including [`ElementType::EMPTY`].
    pub fn with_default(element_type: ElementType, len: usize) -> Result<Self, VectorError> {
        let block = B::create(element_type, len)
            .ok_or(VectorError::UnknownElementType { element_type })?;
        let mut vec = Self::new();
        if len > 0 {
            vec.replace_range(0, 0, smallvec![Block::filled(block)], 0);
        }
        Ok(vec)
    }
}

impl<B: BlockFuncs, H: EventHandler<B>> SegmentedVec<B, H> {
    /// An empty container reporting block events to `handler`.
    pub fn with_events(handler: H) -> Self {
        let vec = Self {
            index: BlockIndex::new(),
            len: 0,
            instance: InstanceId::next(),
            generation: 0,
            config: VectorConfig::default(),
            hooks: Hooks::new(handler),
        };
        trace_call!(vec, Constructor, "with_events");
        vec
    }

    /// An empty container with an explicit configuration.
    pub fn with_config(config: VectorConfig, handler: H) -> Result<Self, VectorError> {
        config.validate()?;
        let mut vec = Self::with_events(handler);
        vec.config = config;
        Ok(vec)
    }

    // ── Access ──────────────────────────────────────────────────

    /// Number of logical positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.index.count()
    }

    /// Process-unique identity of this container.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Current generation; bumped by every structural change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The configuration in effect.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// The event handler.
    pub fn events(&self) -> &H {
        &self.hooks.handler
    }

    /// The event handler, mutably.
    pub fn events_mut(&mut self) -> &mut H {
        &mut self.hooks.handler
    }

    /// Drain the hook failures recorded since the last call.
    pub fn take_hook_errors(&mut self) -> Vec<HookError> {
        std::mem::take(&mut self.hooks.errors)
    }

    /// The value at `pos`.
    ///
    /// Fails with [`VectorError::TypeMismatch`] when `pos` holds another
    /// type or is empty.
    pub fn get<T: Element<B>>(&self, pos: usize) -> Result<&T, VectorError> {
        trace_call!(self, Accessor, "get", pos);
        self.get_from(pos, 0)
    }

    /// [`get`](Self::get), starting the block search at `hint`.
    pub fn get_with_hint<T: Element<B>>(&self, hint: &Cursor, pos: usize) -> Result<&T, VectorError> {
        trace_call!(self, AccessorWithHint, "get", pos);
        let from = self.hint_block(hint)?;
        self.get_from(pos, from)
    }

    /// The value at `pos`, mutably. Writing through it keeps the block
    /// structure, so outstanding cursors stay valid.
    pub fn get_mut<T: Element<B>>(&mut self, pos: usize) -> Result<&mut T, VectorError> {
        trace_call!(self, Accessor, "get_mut", pos);
        self.check_pos(pos)?;
        let i = self.index.find(pos, 0);
        let offset = pos - self.index.positions[i];
        let actual = self.index.element_type(i);
        self.index.blocks[i]
            .as_mut()
            .and_then(T::store_mut)
            .and_then(|store| store.get_mut(offset))
            .ok_or(VectorError::TypeMismatch {
                pos,
                expected: T::ELEMENT_TYPE,
                actual,
            })
    }

    /// Element type stored at `pos`.
    pub fn element_type(&self, pos: usize) -> Result<ElementType, VectorError> {
        trace_call!(self, Accessor, "element_type", pos);
        self.check_pos(pos)?;
        Ok(self.index.element_type(self.index.find(pos, 0)))
    }

    /// Whether `pos` is empty.
    pub fn is_empty_at(&self, pos: usize) -> Result<bool, VectorError> {
        Ok(self.element_type(pos)?.is_empty())
    }

    /// Resolve `pos` to a block and offset. `pos == len` yields the end
    /// position, whose cursor references one past the last block.
    pub fn position(&self, pos: usize) -> Result<Position, VectorError> {
        trace_call!(self, Accessor, "position", pos);
        self.position_from(pos, 0)
    }

    /// [`position`](Self::position), starting the block search at `hint`.
    pub fn position_with_hint(&self, hint: &Cursor, pos: usize) -> Result<Position, VectorError> {
        trace_call!(self, AccessorWithHint, "position", pos);
        let from = self.hint_block(hint)?;
        self.position_from(pos, from)
    }

    /// Move `pos` by `steps` positions, forward or backward.
    ///
    /// Stays in the block when the target is inside it; otherwise the
    /// block search starts from the block `pos` refers to. The target may
    /// be `len`, which yields the end position. Fails with
    /// [`VectorError::OutOfRange`] when the target falls outside
    /// `0..=len`; the error names the target, or the starting position
    /// when the target is not representable.
    pub fn advance_position(&self, pos: Position, steps: isize) -> Result<Position, VectorError> {
        trace_call!(self, AccessorWithHint, "advance_position", pos, steps);
        let from = self.hint_block(&pos.cursor)?;
        let current = pos.logical();
        let target = match current.checked_add_signed(steps) {
            Some(target) if target <= self.len => target,
            Some(target) => return Err(VectorError::OutOfRange { pos: target, len: self.len }),
            None => return Err(VectorError::OutOfRange { pos: current, len: self.len }),
        };
        let start = pos.cursor.block_position;
        if from < self.index.count() && target >= start && target < self.index.end_of(from) {
            return Ok(Position {
                cursor: pos.cursor,
                offset: target - start,
            });
        }
        self.position_from(target, from)
    }

    /// The position right after `pos`; see [`advance_position`](Self::advance_position).
    pub fn next_position(&self, pos: Position) -> Result<Position, VectorError> {
        self.advance_position(pos, 1)
    }

    /// Iterate over the blocks, front to back.
    pub fn blocks(&self) -> Blocks<'_, B> {
        trace_call!(self, Accessor, "blocks");
        Blocks::new(&self.index)
    }

    /// Verify the block partition invariants.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        self.index.check_integrity(self.len)
    }

    // ── Lookup helpers ──────────────────────────────────────────

    pub(crate) fn hint_block(&self, hint: &Cursor) -> Result<usize, VectorError> {
        if hint.instance != self.instance {
            return Err(VectorError::ForeignCursor {
                cursor: hint.instance,
                container: self.instance,
            });
        }
        if hint.generation != self.generation {
            return Err(VectorError::StaleCursor {
                cursor: hint.generation,
                current: self.generation,
            });
        }
        Ok(hint.block_index)
    }

    pub(crate) fn check_pos(&self, pos: usize) -> Result<(), VectorError> {
        if pos >= self.len {
            return Err(VectorError::OutOfRange { pos, len: self.len });
        }
        Ok(())
    }

    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<(), VectorError> {
        if start > end || end > self.len {
            return Err(VectorError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Check that `pos..pos + n` fits inside this container.
    pub(crate) fn check_destination(&self, pos: usize, n: usize) -> Result<(), VectorError> {
        match pos.checked_add(n) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(VectorError::DestinationOutOfRange {
                pos,
                len: n,
                dest_len: self.len,
            }),
        }
    }

    fn get_from<T: Element<B>>(&self, pos: usize, from: usize) -> Result<&T, VectorError> {
        self.check_pos(pos)?;
        let i = self.index.find(pos, from);
        let offset = pos - self.index.positions[i];
        self.index.blocks[i]
            .as_ref()
            .and_then(T::store)
            .and_then(|store| store.get(offset))
            .ok_or_else(|| VectorError::TypeMismatch {
                pos,
                expected: T::ELEMENT_TYPE,
                actual: self.index.element_type(i),
            })
    }

    fn position_from(&self, pos: usize, from: usize) -> Result<Position, VectorError> {
        if pos > self.len {
            return Err(VectorError::OutOfRange { pos, len: self.len });
        }
        let cursor = self.cursor_for(pos, from);
        Ok(Position {
            cursor,
            offset: pos - cursor.block_position,
        })
    }

    /// Index of the block holding `pos`, or the block count for `len`.
    pub(crate) fn block_of(&self, pos: usize, from: usize) -> usize {
        if pos < self.len {
            self.index.find(pos, from)
        } else {
            self.index.count()
        }
    }

    pub(crate) fn cursor_at(&self, block_index: usize) -> Cursor {
        let block_position = if block_index < self.index.count() {
            self.index.positions[block_index]
        } else {
            self.len
        };
        Cursor {
            instance: self.instance,
            generation: self.generation,
            block_index,
            block_position,
        }
    }

    pub(crate) fn cursor_for(&self, pos: usize, from: usize) -> Cursor {
        self.cursor_at(self.block_of(pos, from))
    }

    // ── Restructuring ───────────────────────────────────────────

    /// Replace positions `start..end` with the blocks `new`.
    ///
    /// Blocks partially covered at either edge are trimmed in place; a
    /// block covering both edges is split. Fully covered blocks are
    /// released, new element blocks acquired, later positions shifted by
    /// the length difference, and equal-typed neighbours merged. Returns
    /// the index of the block now holding `start`.
    pub(crate) fn replace_range(&mut self, start: usize, end: usize, new: Pieces<B>, from: usize) -> usize {
        let mut pieces: Pieces<B> = new.into_iter().filter(|b| b.size > 0).collect();
        let added: usize = pieces.iter().map(|b| b.size).sum();
        let count = self.index.count();
        let i0 = self.block_of(start, from);

        let rm_start;
        let rm_end;
        if i0 < count && start > self.index.positions[i0] {
            let offset = start - self.index.positions[i0];
            let block_end = self.index.end_of(i0);
            if end < block_end {
                // Both edges inside one block: keep the head, split off the tail.
                let cut = end - self.index.positions[i0];
                let rest = self.index.blocks[i0].as_mut().map(|block| {
                    let rest = block.split_off(cut);
                    block.erase(offset..cut);
                    rest
                });
                pieces.push(Block {
                    size: block_end - end,
                    data: rest,
                });
                self.index.sizes[i0] = offset;
                rm_start = i0 + 1;
                rm_end = i0 + 1;
            } else {
                let size = self.index.sizes[i0];
                if let Some(block) = self.index.blocks[i0].as_mut() {
                    block.erase(offset..size);
                }
                self.index.sizes[i0] = offset;
                rm_start = i0 + 1;
                rm_end = self.trim_front(end, rm_start);
            }
        } else {
            rm_start = i0;
            rm_end = self.trim_front(end, i0);
        }

        let inserted = pieces.len();
        let removed = self.index.splice(rm_start..rm_end, pieces, start);
        for block in removed {
            if let Some(data) = block.data {
                self.hooks.released(&data);
            }
        }
        for slot in rm_start..rm_start + inserted {
            if let Some(data) = &self.index.blocks[slot] {
                self.hooks.acquired(data);
            }
        }

        let delta = (added as isize).wrapping_sub((end - start) as isize);
        self.index.adjust(rm_start + inserted, delta, &self.config);
        self.len = self.len - (end - start) + added;
        self.generation += 1;
        self.merge_around(rm_start, inserted);
        self.debug_check();
        self.block_of(start, rm_start.saturating_sub(1))
    }

    /// Drop the part of the block holding `end` that lies before `end`.
    ///
    /// Returns the index of that block, or the block count when `end` is
    /// the logical length. The trimmed block's position is set to `end` in
    /// pre-mutation coordinates.
    fn trim_front(&mut self, end: usize, from: usize) -> usize {
        if end >= self.len {
            return self.index.count();
        }
        let i = self.index.find(end, from);
        let cut = end - self.index.positions[i];
        if cut > 0 {
            if let Some(block) = self.index.blocks[i].as_mut() {
                block.erase(0..cut);
            }
            self.index.sizes[i] -= cut;
            self.index.positions[i] = end;
        }
        i
    }

    /// Make `pos` a block boundary, returning the index of the block that
    /// starts there.
    pub(crate) fn split_at(&mut self, pos: usize, from: usize) -> usize {
        if pos >= self.len {
            return self.index.count();
        }
        let i = self.index.find(pos, from);
        let offset = pos - self.index.positions[i];
        if offset == 0 {
            return i;
        }
        let size = self.index.sizes[i];
        let rest = self.index.blocks[i].as_mut().map(|block| block.split_off(offset));
        self.index.sizes[i] = offset;
        self.index.insert(
            i + 1,
            pos,
            Block {
                size: size - offset,
                data: rest,
            },
        );
        if let Some(data) = &self.index.blocks[i + 1] {
            self.hooks.acquired(data);
        }
        self.generation += 1;
        i + 1
    }

    /// Move the blocks covering `start..end` out, leaving the range empty.
    pub(crate) fn take_blocks(&mut self, start: usize, end: usize, from: usize) -> Pieces<B> {
        if start == end {
            return Pieces::new();
        }
        let a = self.split_at(start, from);
        let b = self.split_at(end, a);
        let removed = self.index.splice(a..b, smallvec![Block::empty(end - start)], start);
        for block in &removed {
            if let Some(data) = &block.data {
                self.hooks.released(data);
            }
        }
        self.generation += 1;
        self.merge_around(a, 1);
        self.debug_check();
        removed
    }

    /// Merge equal-typed neighbours around the `n` blocks starting at `i`.
    fn merge_around(&mut self, i: usize, n: usize) {
        let count = self.index.count();
        if count < 2 {
            return;
        }
        let hi = (i + n).min(count - 1);
        for j in (i.saturating_sub(1)..hi).rev() {
            self.merge_with_next(j);
        }
    }

    fn merge_with_next(&mut self, j: usize) -> bool {
        if self.index.element_type(j) != self.index.element_type(j + 1) {
            return false;
        }
        let right = self.index.remove(j + 1);
        self.index.sizes[j] += right.size;
        let (Some(data), Some(left)) = (right.data, self.index.blocks[j].as_mut()) else {
            return true;
        };
        self.hooks.released(&data);
        if let Err(data) = left.try_append(data) {
            log::error!(
                "blocks {j} and {} share type {} but refused to merge",
                j + 1,
                data.element_type()
            );
            self.index.sizes[j] -= right.size;
            let position = self.index.end_of(j);
            self.index.insert(j + 1, position, Block::filled(data));
            if let Some(data) = &self.index.blocks[j + 1] {
                self.hooks.acquired(data);
            }
            return false;
        }
        true
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.index.check_integrity(self.len), Ok(()));
    }
}

// ── Whole-container traits ──────────────────────────────────────

impl<B: BlockFuncs> Default for SegmentedVec<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlockFuncs, H: EventHandler<B>> Drop for SegmentedVec<B, H> {
    fn drop(&mut self) {
        trace_call!(self, Destructor, "drop");
        for block in self.index.drain() {
            self.hooks.released(&block);
        }
    }
}

impl<B, H> Clone for SegmentedVec<B, H>
where
    B: BlockFuncs,
    H: EventHandler<B> + Clone,
{
    /// Deep copy through each value type's `Clone`, firing `acquired` on
    /// the clone's handler for every copied block. The clone gets a fresh
    /// identity, so cursors of the original do not apply to it.
    fn clone(&self) -> Self {
        let mut clone = Self {
            index: BlockIndex {
                positions: self.index.positions.clone(),
                sizes: self.index.sizes.clone(),
                blocks: clone_blocks(&self.index.blocks, &self.config),
            },
            len: self.len,
            instance: InstanceId::next(),
            generation: 0,
            config: self.config.clone(),
            hooks: Hooks::new(self.hooks.handler.clone()),
        };
        for block in clone.index.blocks.iter().flatten() {
            clone.hooks.acquired(block);
        }
        trace_call!(clone, Constructor, "clone");
        clone
    }
}

#[cfg(feature = "parallel")]
fn clone_blocks<B: BlockFuncs>(blocks: &[Option<B>], config: &VectorConfig) -> Vec<Option<B>> {
    use rayon::prelude::*;

    if config.fans_out(config.clone_policy, blocks.len()) {
        blocks.par_iter().cloned().collect()
    } else {
        blocks.to_vec()
    }
}

#[cfg(not(feature = "parallel"))]
fn clone_blocks<B: BlockFuncs>(blocks: &[Option<B>], config: &VectorConfig) -> Vec<Option<B>> {
    if config.fans_out(config.clone_policy, blocks.len()) {
        log::debug!(
            "parallel clone requested without the `parallel` feature; cloning {} blocks sequentially",
            blocks.len()
        );
    }
    blocks.to_vec()
}

/// Value-wise equality, independent of how either side is partitioned
/// into blocks and of either side's event handler.
impl<B, H, H2> PartialEq<SegmentedVec<B, H2>> for SegmentedVec<B, H>
where
    B: BlockFuncs,
    H: EventHandler<B>,
    H2: EventHandler<B>,
{
    fn eq(&self, other: &SegmentedVec<B, H2>) -> bool {
        if self.len != other.len {
            return false;
        }
        let (a, b) = (&self.index, &other.index);
        let (mut i, mut j, mut pos) = (0, 0, 0);
        while pos < self.len {
            let end = a.end_of(i).min(b.end_of(j));
            let n = end - pos;
            let same = match (&a.blocks[i], &b.blocks[j]) {
                (None, None) => true,
                (Some(x), Some(y)) => {
                    let at = pos - a.positions[i];
                    x.values_eq(at..at + n, y, pos - b.positions[j])
                }
                _ => false,
            };
            if !same {
                return false;
            }
            pos = end;
            if pos == a.end_of(i) {
                i += 1;
            }
            if pos == b.end_of(j) {
                j += 1;
            }
        }
        true
    }
}

impl<B: BlockFuncs, H: EventHandler<B>> fmt::Debug for SegmentedVec<B, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedVec")
            .field("instance", &self.instance)
            .field("generation", &self.generation)
            .field("len", &self.len)
            .field("blocks", &Blocks::new(&self.index).collect::<Vec<_>>())
            .finish()
    }
}
