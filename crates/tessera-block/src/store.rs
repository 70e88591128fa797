//! The per-type element store contract and its array-backed implementations.
//!
//! An [`ElementStore`] holds the values of one block. The container never
//! touches the values directly; it only splits, joins, trims, and compares
//! stores through this trait, so any of the three layouts can back any
//! registered type:
//!
//! - `Vec<T>`: resizable array, the default.
//! - `VecDeque<T>`: double-ended array, cheap erasure at either end.
//! - [`DelayedDeleteVec<T>`](crate::DelayedDeleteVec): array whose front
//!   erasure is deferred until the next reallocation.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;

/// Bounds every value held in a block must satisfy.
///
/// `Clone` is the per-type clone capability: a managed type that owns an
/// external resource specialises its deep copy by implementing `Clone`.
/// `Default` backs creation of default-initialised blocks by tag.
pub trait ElementValue: Clone + PartialEq + fmt::Debug + Default + Send + Sync + 'static {}

impl<T> ElementValue for T where T: Clone + PartialEq + fmt::Debug + Default + Send + Sync + 'static {}

/// Storage for the values of a single block.
///
/// Index arguments are relative to the start of the store. Callers keep
/// indices in bounds; out-of-bounds indices panic in the underlying
/// array, except for [`get`](ElementStore::get) and
/// [`get_mut`](ElementStore::get_mut) which return `None`.
pub trait ElementStore: Clone + PartialEq + fmt::Debug + Default + Send + Sync + 'static {
    /// The value type.
    type Item: ElementValue;

    /// Forward iterator over the stored values.
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Item> + ExactSizeIterator + Clone
    where
        Self: 'a;

    /// Build a store holding `values` in order.
    fn from_values(values: Vec<Self::Item>) -> Self;

    /// Build a store of `len` default values.
    fn with_len(len: usize) -> Self {
        let mut store = Self::default();
        store.resize(len);
        store
    }

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Whether the store holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable value at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Overwrite the value at `index`, returning the previous value.
    fn replace(&mut self, index: usize, value: Self::Item) -> Option<Self::Item> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Append one value.
    fn push(&mut self, value: Self::Item);

    /// Insert `values` before `at`.
    fn insert_values(&mut self, at: usize, values: Vec<Self::Item>);

    /// Overwrite `at..at + values.len()` with `values`.
    fn overwrite(&mut self, at: usize, values: Vec<Self::Item>) {
        for (offset, value) in values.into_iter().enumerate() {
            if let Some(slot) = self.get_mut(at + offset) {
                *slot = value;
            }
        }
    }

    /// Remove the values in `range`.
    fn erase(&mut self, range: Range<usize>);

    /// Split into `[0, at)` (kept) and `[at, len)` (returned).
    fn split_off(&mut self, at: usize) -> Self;

    /// Move every value of `other` to the end of `self`, leaving `other` empty.
    fn append(&mut self, other: &mut Self);

    /// Truncate, or extend with default values, to exactly `len` values.
    fn resize(&mut self, len: usize);

    /// Release spare capacity.
    fn shrink_to_fit(&mut self);

    /// Iterate over the stored values.
    fn iter(&self) -> Self::Iter<'_>;

    /// Consume the store, yielding its values in order.
    fn into_values(self) -> Vec<Self::Item>;
}

impl<T: ElementValue> ElementStore for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T>;

    fn from_values(values: Vec<T>) -> Self {
        values
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert_values(&mut self, at: usize, values: Vec<T>) {
        if at == Vec::len(self) {
            Vec::extend(self, values);
            return;
        }
        let tail = Vec::split_off(self, at);
        Vec::extend(self, values);
        Vec::extend(self, tail);
    }

    fn overwrite(&mut self, at: usize, values: Vec<T>) {
        for (slot, value) in self.as_mut_slice()[at..].iter_mut().zip(values) {
            *slot = value;
        }
    }

    fn erase(&mut self, range: Range<usize>) {
        Vec::drain(self, range);
    }

    fn split_off(&mut self, at: usize) -> Self {
        Vec::split_off(self, at)
    }

    fn append(&mut self, other: &mut Self) {
        Vec::append(self, other);
    }

    fn resize(&mut self, len: usize) {
        Vec::resize(self, len, T::default());
    }

    fn shrink_to_fit(&mut self) {
        Vec::shrink_to_fit(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn into_values(self) -> Vec<T> {
        self
    }
}

impl<T: ElementValue> ElementStore for VecDeque<T> {
    type Item = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T>;

    fn from_values(values: Vec<T>) -> Self {
        VecDeque::from(values)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn push(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn insert_values(&mut self, at: usize, values: Vec<T>) {
        // Prepending walks the values backwards onto the front.
        if at == 0 {
            for value in values.into_iter().rev() {
                VecDeque::push_front(self, value);
            }
            return;
        }
        let mut tail = VecDeque::split_off(self, at);
        VecDeque::extend(self, values);
        VecDeque::append(self, &mut tail);
    }

    fn erase(&mut self, range: Range<usize>) {
        VecDeque::drain(self, range);
    }

    fn split_off(&mut self, at: usize) -> Self {
        VecDeque::split_off(self, at)
    }

    fn append(&mut self, other: &mut Self) {
        VecDeque::append(self, other);
    }

    fn resize(&mut self, len: usize) {
        VecDeque::resize(self, len, T::default());
    }

    fn shrink_to_fit(&mut self) {
        VecDeque::shrink_to_fit(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn into_values(self) -> Vec<T> {
        Vec::from(self)
    }
}
