//! Moving blocks between containers.
//!
//! All three operations validate both sides before the first mutation, so
//! a rejected call leaves both containers untouched. Whole blocks move
//! without copying their values; blocks straddling a range edge are split
//! first.

use std::ops::Range;

use tessera_block::BlockFuncs;
use tessera_core::VectorError;

use crate::cursor::Cursor;
use crate::event::{trace_call, EventHandler};
use crate::vector::SegmentedVec;

impl<B: BlockFuncs, H: EventHandler<B>> SegmentedVec<B, H> {
    /// Move the values in `range` into `dest`, overwriting
    /// `dest[dest_pos..dest_pos + range.len()]`.
    ///
    /// The source range becomes empty; both lengths are unchanged. `dest`
    /// may report to a different event handler type: the moved blocks are
    /// released on this side and acquired on the other. Returns a cursor
    /// to the start of the (now empty) source range.
    pub fn transfer<H2: EventHandler<B>>(
        &mut self,
        range: Range<usize>,
        dest: &mut SegmentedVec<B, H2>,
        dest_pos: usize,
    ) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "transfer", range, dest_pos);
        self.transfer_from(range, dest, dest_pos, 0)
    }

    /// [`transfer`](Self::transfer), starting the source block search at `hint`.
    pub fn transfer_with_hint<H2: EventHandler<B>>(
        &mut self,
        hint: &Cursor,
        range: Range<usize>,
        dest: &mut SegmentedVec<B, H2>,
        dest_pos: usize,
    ) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "transfer", range, dest_pos);
        let from = self.hint_block(hint)?;
        self.transfer_from(range, dest, dest_pos, from)
    }

    /// Exchange the values in `range` with those of
    /// `other[other_pos..other_pos + range.len()]`.
    pub fn swap_range<H2: EventHandler<B>>(
        &mut self,
        range: Range<usize>,
        other: &mut SegmentedVec<B, H2>,
        other_pos: usize,
    ) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "swap_range", range, other_pos);
        self.swap_range_from(range, other, other_pos, 0)
    }

    /// [`swap_range`](Self::swap_range), starting the block search at `hint`.
    pub fn swap_range_with_hint<H2: EventHandler<B>>(
        &mut self,
        hint: &Cursor,
        range: Range<usize>,
        other: &mut SegmentedVec<B, H2>,
        other_pos: usize,
    ) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "swap_range", range, other_pos);
        let from = self.hint_block(hint)?;
        self.swap_range_from(range, other, other_pos, from)
    }

    /// Exchange the entire contents, and the event handlers, of two
    /// containers in O(1).
    ///
    /// Blocks stay with their handler, so no events fire. Each container
    /// keeps its own identity and configuration; both generations advance.
    pub fn swap(&mut self, other: &mut Self) {
        trace_call!(self, Mutator, "swap");
        std::mem::swap(&mut self.index, &mut other.index);
        std::mem::swap(&mut self.len, &mut other.len);
        std::mem::swap(&mut self.hooks.handler, &mut other.hooks.handler);
        self.generation += 1;
        other.generation += 1;
    }

    fn transfer_from<H2: EventHandler<B>>(
        &mut self,
        range: Range<usize>,
        dest: &mut SegmentedVec<B, H2>,
        dest_pos: usize,
        from: usize,
    ) -> Result<Cursor, VectorError> {
        self.check_range(range.start, range.end)?;
        let n = range.end - range.start;
        dest.check_destination(dest_pos, n)?;
        if n == 0 {
            return Ok(self.cursor_for(range.start, from));
        }
        let pieces = self.take_blocks(range.start, range.end, from);
        dest.replace_range(dest_pos, dest_pos + n, pieces, 0);
        Ok(self.cursor_for(range.start, 0))
    }

    fn swap_range_from<H2: EventHandler<B>>(
        &mut self,
        range: Range<usize>,
        other: &mut SegmentedVec<B, H2>,
        other_pos: usize,
        from: usize,
    ) -> Result<Cursor, VectorError> {
        self.check_range(range.start, range.end)?;
        let n = range.end - range.start;
        other.check_destination(other_pos, n)?;
        if n == 0 {
            return Ok(self.cursor_for(range.start, from));
        }
        let ours = self.take_blocks(range.start, range.end, from);
        let theirs = other.take_blocks(other_pos, other_pos + n, 0);
        other.replace_range(other_pos, other_pos + n, ours, 0);
        let i = self.replace_range(range.start, range.end, theirs, 0);
        Ok(self.cursor_at(i))
    }
}
