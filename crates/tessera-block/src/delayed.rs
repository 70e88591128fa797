//! An array store with deferred front erasure.
//!
//! Splitting a block keeps its head in place and moves the tail out, but
//! trimming a block from the front (the common case when a range is
//! overwritten from the left) would shift every remaining value. The
//! [`DelayedDeleteVec`] records such trims as an offset into the backing
//! array and reclaims the dead prefix lazily.

use std::fmt;
use std::ops::Range;

use crate::store::{ElementStore, ElementValue};

/// `Vec`-backed store whose front erasure only advances an offset.
///
/// The dead prefix is compacted by the next operation that reallocates or
/// reorders the backing array (`insert_values`, `resize`, `append`,
/// `shrink_to_fit`, `into_values`), or as soon as it grows larger than the
/// live part.
pub struct DelayedDeleteVec<T> {
    /// Backing array; `values[..front]` are dead.
    values: Vec<T>,
    /// Number of values logically erased from the front.
    front: usize,
}

impl<T> DelayedDeleteVec<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            front: 0,
        }
    }

    /// Number of erased values still occupying the backing array.
    pub fn removed_prefix(&self) -> usize {
        self.front
    }

    /// The live values as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.values[self.front..]
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values[self.front..]
    }

    fn compact(&mut self) {
        if self.front > 0 {
            self.values.drain(..self.front);
            self.front = 0;
        }
    }
}

impl<T> Default for DelayedDeleteVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DelayedDeleteVec<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.as_slice().to_vec(),
            front: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for DelayedDeleteVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DelayedDeleteVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> From<Vec<T>> for DelayedDeleteVec<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values, front: 0 }
    }
}

impl<T: ElementValue> ElementStore for DelayedDeleteVec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T>;

    fn from_values(values: Vec<T>) -> Self {
        Self::from(values)
    }

    fn len(&self) -> usize {
        self.values.len() - self.front
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn push(&mut self, value: T) {
        self.values.push(value);
    }

    fn insert_values(&mut self, at: usize, values: Vec<T>) {
        self.compact();
        let tail = self.values.split_off(at);
        self.values.extend(values);
        self.values.extend(tail);
    }

    fn overwrite(&mut self, at: usize, values: Vec<T>) {
        for (slot, value) in self.as_mut_slice()[at..].iter_mut().zip(values) {
            *slot = value;
        }
    }

    fn erase(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        if range.start == 0 {
            self.front += range.end;
            let live = self.values.len() - self.front;
            if live == 0 {
                self.values.clear();
                self.front = 0;
            } else if self.front > live {
                self.compact();
            }
            return;
        }
        let base = self.front;
        self.values.drain(base + range.start..base + range.end);
    }

    fn split_off(&mut self, at: usize) -> Self {
        let tail = self.values.split_off(self.front + at);
        Self::from(tail)
    }

    fn append(&mut self, other: &mut Self) {
        other.compact();
        self.values.append(&mut other.values);
    }

    fn resize(&mut self, len: usize) {
        self.compact();
        self.values.resize(len, T::default());
    }

    fn shrink_to_fit(&mut self) {
        self.compact();
        self.values.shrink_to_fit();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn into_values(mut self) -> Vec<T> {
        self.compact();
        self.values
    }
}
