//! Single-container mutators.
//!
//! Each position-taking mutator validates its arguments before touching
//! the container, then either edits one block in place (same-type writes,
//! growth of an existing block, erasure inside one block) or goes through
//! the general range replacement. Every mutator has a `*_with_hint` twin
//! that starts the block search at a previously returned [`Cursor`].

use std::ops::Range;

use smallvec::smallvec;
use tessera_block::{BlockFuncs, Element, ElementStore, ElementType};
use tessera_core::VectorError;

use crate::cursor::Cursor;
use crate::event::{trace_call, EventHandler};
use crate::index::{Block, Pieces};
use crate::vector::SegmentedVec;

impl<B: BlockFuncs, H: EventHandler<B>> SegmentedVec<B, H> {
    // ── Overwrite ───────────────────────────────────────────────

    /// Store `value` at `pos`, replacing whatever was there.
    pub fn set<T: Element<B>>(&mut self, pos: usize, value: T) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "set", pos);
        self.check_pos(pos)?;
        Ok(self.set_at(pos, value, 0))
    }

    /// [`set`](Self::set), starting the block search at `hint`.
    pub fn set_with_hint<T: Element<B>>(
        &mut self,
        hint: &Cursor,
        pos: usize,
        value: T,
    ) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "set", pos);
        let from = self.hint_block(hint)?;
        self.check_pos(pos)?;
        Ok(self.set_at(pos, value, from))
    }

    /// Overwrite `pos..pos + n` with the `n` values yielded by `values`.
    pub fn set_range<T, I>(&mut self, pos: usize, values: I) -> Result<Cursor, VectorError>
    where
        T: Element<B>,
        I: IntoIterator<Item = T>,
    {
        trace_call!(self, Mutator, "set_range", pos);
        let values: Vec<T> = values.into_iter().collect();
        self.check_range(pos, pos.saturating_add(values.len()))?;
        Ok(self.set_range_at(pos, values, 0))
    }

    /// [`set_range`](Self::set_range), starting the block search at `hint`.
    pub fn set_range_with_hint<T, I>(
        &mut self,
        hint: &Cursor,
        pos: usize,
        values: I,
    ) -> Result<Cursor, VectorError>
    where
        T: Element<B>,
        I: IntoIterator<Item = T>,
    {
        trace_call!(self, MutatorWithHint, "set_range", pos);
        let from = self.hint_block(hint)?;
        let values: Vec<T> = values.into_iter().collect();
        self.check_range(pos, pos.saturating_add(values.len()))?;
        Ok(self.set_range_at(pos, values, from))
    }

    /// Make every position in `range` empty.
    pub fn set_empty(&mut self, range: Range<usize>) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "set_empty", range);
        self.check_range(range.start, range.end)?;
        Ok(self.set_empty_at(range.start, range.end, 0))
    }

    /// [`set_empty`](Self::set_empty), starting the block search at `hint`.
    pub fn set_empty_with_hint(&mut self, hint: &Cursor, range: Range<usize>) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "set_empty", range);
        let from = self.hint_block(hint)?;
        self.check_range(range.start, range.end)?;
        Ok(self.set_empty_at(range.start, range.end, from))
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Insert `values` before `pos`, shifting later positions up.
    pub fn insert<T, I>(&mut self, pos: usize, values: I) -> Result<Cursor, VectorError>
    where
        T: Element<B>,
        I: IntoIterator<Item = T>,
    {
        trace_call!(self, Mutator, "insert", pos);
        let values: Vec<T> = values.into_iter().collect();
        self.check_insert(pos, values.len())?;
        Ok(self.insert_at(pos, values, 0))
    }

    /// [`insert`](Self::insert), starting the block search at `hint`.
    pub fn insert_with_hint<T, I>(&mut self, hint: &Cursor, pos: usize, values: I) -> Result<Cursor, VectorError>
    where
        T: Element<B>,
        I: IntoIterator<Item = T>,
    {
        trace_call!(self, MutatorWithHint, "insert", pos);
        let from = self.hint_block(hint)?;
        let values: Vec<T> = values.into_iter().collect();
        self.check_insert(pos, values.len())?;
        Ok(self.insert_at(pos, values, from))
    }

    /// Insert `n` empty positions before `pos`.
    pub fn insert_empty(&mut self, pos: usize, n: usize) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "insert_empty", pos, n);
        self.check_insert(pos, n)?;
        Ok(self.insert_empty_at(pos, n, 0))
    }

    /// [`insert_empty`](Self::insert_empty), starting the block search at `hint`.
    pub fn insert_empty_with_hint(&mut self, hint: &Cursor, pos: usize, n: usize) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "insert_empty", pos, n);
        let from = self.hint_block(hint)?;
        self.check_insert(pos, n)?;
        Ok(self.insert_empty_at(pos, n, from))
    }

    /// Append one value.
    pub fn push_back<T: Element<B>>(&mut self, value: T) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "push_back");
        self.check_insert(self.len, 1)?;
        let last = self.block_count().saturating_sub(1);
        Ok(self.insert_at(self.len, vec![value], last))
    }

    /// Append one empty position.
    pub fn push_back_empty(&mut self) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "push_back_empty");
        self.check_insert(self.len, 1)?;
        let last = self.block_count().saturating_sub(1);
        Ok(self.insert_empty_at(self.len, 1, last))
    }

    /// Append the value built by `make`, returning a reference to it.
    ///
    /// `make` is not called when the container is already at its maximum
    /// length.
    pub fn emplace_back<T, F>(&mut self, make: F) -> Result<&mut T, VectorError>
    where
        T: Element<B>,
        F: FnOnce() -> T,
    {
        trace_call!(self, Mutator, "emplace_back");
        self.check_insert(self.len, 1)?;
        let last = self.block_count().saturating_sub(1);
        let cursor = self.insert_at(self.len, vec![make()], last);
        let i = cursor.block_index;
        let offset = self.index.sizes[i] - 1;
        let actual = self.index.element_type(i);
        let pos = self.len - 1;
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

    // ── Removal ─────────────────────────────────────────────────

    /// Remove the positions in `range`, shifting later positions down.
    pub fn erase(&mut self, range: Range<usize>) -> Result<Cursor, VectorError> {
        trace_call!(self, Mutator, "erase", range);
        self.check_range(range.start, range.end)?;
        Ok(self.erase_at(range.start, range.end, 0))
    }

    /// [`erase`](Self::erase), starting the block search at `hint`.
    pub fn erase_with_hint(&mut self, hint: &Cursor, range: Range<usize>) -> Result<Cursor, VectorError> {
        trace_call!(self, MutatorWithHint, "erase", range);
        let from = self.hint_block(hint)?;
        self.check_range(range.start, range.end)?;
        Ok(self.erase_at(range.start, range.end, from))
    }

    /// Grow with empty positions or truncate to exactly `len` positions.
    pub fn resize(&mut self, len: usize) {
        trace_call!(self, Mutator, "resize", len);
        if len > self.len {
            let last = self.block_count().saturating_sub(1);
            self.insert_empty_at(self.len, len - self.len, last);
        } else if len < self.len {
            self.erase_at(len, self.len, 0);
        }
    }

    /// Remove every position.
    pub fn clear(&mut self) {
        trace_call!(self, Mutator, "clear");
        for block in self.index.drain() {
            self.hooks.released(&block);
        }
        self.len = 0;
        self.generation += 1;
    }

    /// Take the value at `pos` out, leaving the position empty.
    pub fn release<T: Element<B>>(&mut self, pos: usize) -> Result<T, VectorError> {
        trace_call!(self, Mutator, "release", pos);
        self.release_at(pos, 0)
    }

    /// [`release`](Self::release), starting the block search at `hint`.
    pub fn release_with_hint<T: Element<B>>(&mut self, hint: &Cursor, pos: usize) -> Result<T, VectorError> {
        trace_call!(self, MutatorWithHint, "release", pos);
        let from = self.hint_block(hint)?;
        self.release_at(pos, from)
    }

    /// Take the element blocks covering `range` out, leaving the range empty.
    ///
    /// Blocks partially covered are split first, so the returned blocks
    /// hold exactly the values of `range`, in order. Empty runs inside the
    /// range yield nothing.
    pub fn release_range(&mut self, range: Range<usize>) -> Result<Vec<B>, VectorError> {
        trace_call!(self, Mutator, "release_range", range);
        self.check_range(range.start, range.end)?;
        Ok(self.release_range_at(range.start, range.end, 0))
    }

    /// [`release_range`](Self::release_range), starting the block search at `hint`.
    pub fn release_range_with_hint(&mut self, hint: &Cursor, range: Range<usize>) -> Result<Vec<B>, VectorError> {
        trace_call!(self, MutatorWithHint, "release_range", range);
        let from = self.hint_block(hint)?;
        self.check_range(range.start, range.end)?;
        Ok(self.release_range_at(range.start, range.end, from))
    }

    /// Release spare capacity of the block index and every store.
    pub fn shrink_to_fit(&mut self) {
        trace_call!(self, Mutator, "shrink_to_fit");
        self.index.shrink_to_fit();
    }

    // ── Validated internals ─────────────────────────────────────

    fn check_insert(&self, pos: usize, additional: usize) -> Result<(), VectorError> {
        if pos > self.len {
            return Err(VectorError::OutOfRange { pos, len: self.len });
        }
        if self.len.checked_add(additional).is_none() {
            return Err(VectorError::LengthOverflow {
                len: self.len,
                additional,
            });
        }
        Ok(())
    }

    fn set_at<T: Element<B>>(&mut self, pos: usize, value: T, from: usize) -> Cursor {
        let i = self.index.find(pos, from);
        let offset = pos - self.index.positions[i];
        if let Some(store) = self.index.blocks[i].as_mut().and_then(T::store_mut) {
            store.replace(offset, value);
            return self.cursor_at(i);
        }
        let block = Block::filled(T::block_from_values(vec![value]));
        let i = self.replace_range(pos, pos + 1, smallvec![block], i);
        self.cursor_at(i)
    }

    fn set_range_at<T: Element<B>>(&mut self, pos: usize, values: Vec<T>, from: usize) -> Cursor {
        if values.is_empty() {
            return self.cursor_for(pos, from);
        }
        let end = pos + values.len();
        let i = self.index.find(pos, from);
        let offset = pos - self.index.positions[i];
        if end <= self.index.end_of(i) {
            if let Some(store) = self.index.blocks[i].as_mut().and_then(T::store_mut) {
                store.overwrite(offset, values);
                return self.cursor_at(i);
            }
        }
        let block = Block::filled(T::block_from_values(values));
        let i = self.replace_range(pos, end, smallvec![block], i);
        self.cursor_at(i)
    }

    pub(crate) fn set_empty_at(&mut self, start: usize, end: usize, from: usize) -> Cursor {
        if start == end {
            return self.cursor_for(start, from);
        }
        let i = self.index.find(start, from);
        if self.index.blocks[i].is_none() && end <= self.index.end_of(i) {
            return self.cursor_at(i);
        }
        let i = self.replace_range(start, end, smallvec![Block::empty(end - start)], i);
        self.cursor_at(i)
    }

    /// Block that can absorb an insertion of `element_type` values at
    /// `pos`, with the offset inside it.
    fn growth_target(&self, pos: usize, element_type: ElementType, from: usize) -> Option<(usize, usize)> {
        let count = self.index.count();
        if pos < self.len {
            let i = self.index.find(pos, from);
            if self.index.element_type(i) == element_type {
                return Some((i, pos - self.index.positions[i]));
            }
            let at_start = pos == self.index.positions[i];
            if at_start && i > 0 && self.index.element_type(i - 1) == element_type {
                return Some((i - 1, self.index.sizes[i - 1]));
            }
            None
        } else if count > 0 && self.index.element_type(count - 1) == element_type {
            Some((count - 1, self.index.sizes[count - 1]))
        } else {
            None
        }
    }

    /// Account for `n` positions added to block `i` in place.
    fn grow(&mut self, i: usize, n: usize) {
        self.index.sizes[i] += n;
        self.index.adjust(i + 1, n as isize, &self.config);
        self.len += n;
        self.generation += 1;
    }

    pub(crate) fn insert_at<T: Element<B>>(&mut self, pos: usize, values: Vec<T>, from: usize) -> Cursor {
        let n = values.len();
        if n == 0 {
            return self.cursor_for(pos, from);
        }
        if let Some((i, offset)) = self.growth_target(pos, T::ELEMENT_TYPE, from) {
            if let Some(store) = self.index.blocks[i].as_mut().and_then(T::store_mut) {
                store.insert_values(offset, values);
                self.grow(i, n);
                return self.cursor_at(i);
            }
        }
        let block = Block::filled(T::block_from_values(values));
        let i = self.replace_range(pos, pos, smallvec![block], from);
        self.cursor_at(i)
    }

    fn insert_empty_at(&mut self, pos: usize, n: usize, from: usize) -> Cursor {
        if n == 0 {
            return self.cursor_for(pos, from);
        }
        if let Some((i, _)) = self.growth_target(pos, ElementType::EMPTY, from) {
            self.grow(i, n);
            return self.cursor_at(i);
        }
        let i = self.replace_range(pos, pos, smallvec![Block::empty(n)], from);
        self.cursor_at(i)
    }

    fn erase_at(&mut self, start: usize, end: usize, from: usize) -> Cursor {
        if start == end {
            return self.cursor_for(start, from);
        }
        let n = end - start;
        let i = self.index.find(start, from);
        let block_start = self.index.positions[i];
        let whole = start == block_start && end == self.index.end_of(i);
        if end <= self.index.end_of(i) && !whole {
            let offset = start - block_start;
            if let Some(block) = self.index.blocks[i].as_mut() {
                block.erase(offset..offset + n);
            }
            self.index.sizes[i] -= n;
            self.index.adjust(i + 1, (n as isize).wrapping_neg(), &self.config);
            self.len -= n;
            self.generation += 1;
            return self.cursor_for(start, i);
        }
        let i = self.replace_range(start, end, Pieces::new(), i);
        self.cursor_at(i)
    }

    fn release_at<T: Element<B>>(&mut self, pos: usize, from: usize) -> Result<T, VectorError> {
        self.check_pos(pos)?;
        let i = self.index.find(pos, from);
        let offset = pos - self.index.positions[i];
        let actual = self.index.element_type(i);
        let value = self.index.blocks[i]
            .as_mut()
            .and_then(T::store_mut)
            .and_then(|store| store.get_mut(offset))
            .map(std::mem::take)
            .ok_or(VectorError::TypeMismatch {
                pos,
                expected: T::ELEMENT_TYPE,
                actual,
            })?;
        self.set_empty_at(pos, pos + 1, i);
        Ok(value)
    }

    fn release_range_at(&mut self, start: usize, end: usize, from: usize) -> Vec<B> {
        self.take_blocks(start, end, from)
            .into_iter()
            .filter_map(|block| block.data)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_block::StandardBlocks;

    type Vec64 = SegmentedVec<StandardBlocks>;

    fn layout(vec: &Vec64) -> Vec<(usize, usize, ElementType)> {
        vec.blocks()
            .map(|b| (b.position, b.size, b.element_type))
            .collect()
    }

    #[test]
    fn set_same_type_writes_in_place() {
        let mut vec = Vec64::filled(4, 0i32);
        let generation = vec.generation();
        let cursor = vec.set(2, 5i32).unwrap();
        assert_eq!(vec.generation(), generation);
        assert_eq!(vec.get::<i32>(2), Ok(&5));
        assert!(vec.set_with_hint(&cursor, 3, 6i32).is_ok());
        assert_eq!(vec.block_count(), 1);
    }

    #[test]
    fn set_other_type_splits_in_three() {
        let mut vec = Vec64::filled(5, 1i32);
        vec.set(2, 2.0f64).unwrap();
        assert_eq!(
            layout(&vec),
            [
                (0, 2, ElementType::INT32),
                (2, 1, ElementType::FLOAT64),
                (3, 2, ElementType::INT32),
            ]
        );
        vec.set(2, 9i32).unwrap();
        assert_eq!(layout(&vec), [(0, 5, ElementType::INT32)]);
        assert_eq!(vec.get::<i32>(2), Ok(&9));
        assert_eq!(vec.get::<i32>(4), Ok(&1));
    }

    #[test]
    fn set_range_spanning_blocks() {
        let mut vec = Vec64::with_len(10);
        vec.set_range(0, [1u8, 2, 3]).unwrap();
        vec.set_range(6, [true, true]).unwrap();
        vec.set_range(2, ["a".to_string(), "b".into(), "c".into(), "d".into(), "e".into()])
            .unwrap();
        assert_eq!(
            layout(&vec),
            [
                (0, 2, ElementType::UINT8),
                (2, 5, ElementType::STRING),
                (7, 1, ElementType::BOOLEAN),
                (8, 2, ElementType::EMPTY),
            ]
        );
        assert!(vec.check_integrity().is_ok());
    }

    #[test]
    fn set_range_past_end_is_rejected() {
        let mut vec = Vec64::with_len(3);
        assert_eq!(
            vec.set_range(2, [1i16, 2]),
            Err(VectorError::InvalidRange {
                start: 2,
                end: 4,
                len: 3
            })
        );
        assert_eq!(layout(&vec), [(0, 3, ElementType::EMPTY)]);
    }

    #[test]
    fn insert_into_same_type_block_grows_it() {
        let mut vec = Vec64::from_values([1i64, 4]);
        vec.insert(1, [2i64, 3]).unwrap();
        assert_eq!(vec.block_count(), 1);
        assert_eq!(vec.get::<i64>(2), Ok(&3));
        assert_eq!(vec.len(), 4);
    }

    #[test]
    fn insert_other_type_splits() {
        let mut vec = Vec64::from_values([1i64, 4]);
        let cursor = vec.insert(1, [0.5f32]).unwrap();
        assert_eq!(cursor.block_index(), 1);
        assert_eq!(
            layout(&vec),
            [
                (0, 1, ElementType::INT64),
                (1, 1, ElementType::FLOAT32),
                (2, 1, ElementType::INT64),
            ]
        );
    }

    #[test]
    fn insert_at_block_start_appends_to_previous() {
        let mut vec = Vec64::from_values([1i32]);
        vec.push_back(true).unwrap();
        vec.insert(1, [2i32]).unwrap();
        assert_eq!(
            layout(&vec),
            [(0, 2, ElementType::INT32), (2, 1, ElementType::BOOLEAN)]
        );
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut vec = Vec64::with_len(2);
        assert_eq!(
            vec.insert(3, [1i32]),
            Err(VectorError::OutOfRange { pos: 3, len: 2 })
        );
    }

    #[test]
    fn erase_inside_block() {
        let mut vec = Vec64::from_values([1u32, 2, 3, 4, 5]);
        vec.push_back_empty().unwrap();
        vec.erase(1..3).unwrap();
        assert_eq!(
            layout(&vec),
            [(0, 3, ElementType::UINT32), (3, 1, ElementType::EMPTY)]
        );
        assert_eq!(vec.get::<u32>(1), Ok(&4));
    }

    #[test]
    fn erase_whole_middle_block_merges_neighbours() {
        let mut vec = Vec64::from_values([1i32, 2]);
        vec.push_back(0.5f64).unwrap();
        vec.push_back(3i32).unwrap();
        vec.erase(2..3).unwrap();
        assert_eq!(layout(&vec), [(0, 3, ElementType::INT32)]);
        assert_eq!(vec.get::<i32>(2), Ok(&3));
    }

    #[test]
    fn push_back_and_emplace_back() {
        let mut vec = Vec64::new();
        vec.push_back(1i16).unwrap();
        vec.push_back(2i16).unwrap();
        *vec.emplace_back(|| 3i16).unwrap() += 10;
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.block_count(), 1);
        assert_eq!(vec.get::<i16>(2), Ok(&13));
    }

    #[test]
    fn growth_past_maximum_length_is_rejected() {
        let mut vec = Vec64::with_len(usize::MAX);
        let overflow = Err(VectorError::LengthOverflow {
            len: usize::MAX,
            additional: 1,
        });
        let generation = vec.generation();
        assert_eq!(vec.insert_empty(0, 1), overflow);
        assert_eq!(vec.insert(usize::MAX, [1i32]), overflow);
        assert_eq!(vec.push_back(1i32), overflow);
        assert_eq!(vec.push_back_empty(), overflow);
        let mut called = false;
        assert!(matches!(
            vec.emplace_back(|| {
                called = true;
                1i32
            }),
            Err(VectorError::LengthOverflow { .. })
        ));
        assert!(!called);
        assert!(vec.insert(0, Vec::<i32>::new()).is_ok());
        vec.resize(usize::MAX);
        assert_eq!(vec.generation(), generation);
        assert_eq!(layout(&vec), [(0, usize::MAX, ElementType::EMPTY)]);
    }

    #[test]
    fn growth_up_to_maximum_length() {
        let mut vec = Vec64::with_len(usize::MAX - 2);
        vec.push_back(7i32).unwrap();
        vec.push_back_empty().unwrap();
        assert_eq!(vec.len(), usize::MAX);
        assert_eq!(vec.get::<i32>(usize::MAX - 2), Ok(&7));
        assert!(matches!(
            vec.push_back(8i32),
            Err(VectorError::LengthOverflow { .. })
        ));
        assert!(vec.check_integrity().is_ok());
    }

    #[test]
    fn resize_grows_and_truncates() {
        let mut vec = Vec64::from_values([1i32, 2, 3]);
        vec.resize(5);
        assert_eq!(
            layout(&vec),
            [(0, 3, ElementType::INT32), (3, 2, ElementType::EMPTY)]
        );
        vec.resize(2);
        assert_eq!(layout(&vec), [(0, 2, ElementType::INT32)]);
        vec.resize(0);
        assert!(vec.is_empty());
        assert_eq!(vec.block_count(), 0);
    }

    #[test]
    fn release_takes_value_and_empties_position() {
        let mut vec = Vec64::from_values(["a".to_string(), "b".into(), "c".into()]);
        assert_eq!(vec.release::<String>(1).unwrap(), "b");
        assert!(vec.is_empty_at(1).unwrap());
        assert_eq!(vec.len(), 3);
        assert!(matches!(
            vec.release::<String>(1),
            Err(VectorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn release_range_returns_exact_blocks() {
        let mut vec = Vec64::from_values([1i32, 2, 3, 4]);
        vec.push_back(true).unwrap();
        let blocks = vec.release_range(2..5).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], <i32 as Element<StandardBlocks>>::block_from_values(vec![3, 4]));
        assert_eq!(blocks[1], <bool as Element<StandardBlocks>>::block_from_values(vec![true]));
        assert_eq!(
            layout(&vec),
            [(0, 2, ElementType::INT32), (2, 3, ElementType::EMPTY)]
        );
    }

    #[test]
    fn stale_hint_is_rejected() {
        let mut vec = Vec64::with_len(4);
        let old = vec.set(0, 1i32).unwrap();
        vec.set(2, 2i32).unwrap();
        assert!(matches!(
            vec.set_with_hint(&old, 1, 3i32),
            Err(VectorError::StaleCursor { .. })
        ));
    }

    #[test]
    fn hint_chaining_walks_forward() {
        let mut vec = Vec64::with_len(100);
        let mut cursor = vec.position(0).unwrap().cursor;
        for pos in 0..100 {
            let value = if pos % 10 < 5 { pos as i32 } else { -1 };
            cursor = vec.set_with_hint(&cursor, pos, value).unwrap();
        }
        assert_eq!(vec.block_count(), 1);
        assert_eq!(vec.get::<i32>(42), Ok(&42));
    }

    #[test]
    fn clear_removes_everything() {
        let mut vec = Vec64::from_values([1i32, 2]);
        vec.clear();
        assert!(vec.is_empty());
        assert!(vec.check_integrity().is_ok());
    }
}
