//! Capability traits binding value types to a closed block set.

use std::fmt;
use std::ops::Range;

use tessera_core::ElementType;

use crate::store::{ElementStore, ElementValue};

/// Capability table of a closed set of element blocks.
///
/// An implementor is an enum with one variant per registered element type,
/// each wrapping that type's [`ElementStore`]. Every method dispatches with a
/// single `match`, so the container pays no virtual call per operation.
/// Implementations are normally generated by
/// [`element_blocks!`](crate::element_blocks).
///
/// Destruction is `Drop`; cloning is the derived `Clone`, which clones each
/// value through its own `Clone` impl.
pub trait BlockFuncs: Clone + PartialEq + fmt::Debug + Send + Sync + Sized + 'static {
    /// Tags of every registered element type, in declaration order.
    const ELEMENT_TYPES: &'static [ElementType];

    /// Tag of the values held by this block.
    fn element_type(&self) -> ElementType;

    /// Number of values held by this block.
    fn len(&self) -> usize;

    /// Whether the block holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a block of `len` default values of type `element_type`.
    ///
    /// Returns `None` when the tag is not registered in this set.
    fn create(element_type: ElementType, len: usize) -> Option<Self>;

    /// Whether `element_type` is registered in this set.
    fn is_registered(element_type: ElementType) -> bool {
        Self::ELEMENT_TYPES.contains(&element_type)
    }

    /// Split into `[0, at)` (kept) and `[at, len)` (returned).
    fn split_off(&mut self, at: usize) -> Self;

    /// Append the values of `other`, or hand it back if its type differs.
    fn try_append(&mut self, other: Self) -> Result<(), Self>;

    /// Insert the values of `other` before `at`, or hand it back if its
    /// type differs.
    fn try_insert(&mut self, at: usize, other: Self) -> Result<(), Self>;

    /// Overwrite `at..at + other.len()` with the values of `other`, or hand
    /// it back if its type differs.
    fn try_overwrite(&mut self, at: usize, other: Self) -> Result<(), Self>;

    /// Remove the values in `range`.
    fn erase(&mut self, range: Range<usize>);

    /// Truncate, or extend with default values, to exactly `len` values.
    fn resize(&mut self, len: usize);

    /// Release spare capacity.
    fn shrink_to_fit(&mut self);

    /// Whether `self[range]` equals `other[other_start..other_start + range.len()]`.
    ///
    /// Blocks of different types never compare equal.
    fn values_eq(&self, range: Range<usize>, other: &Self, other_start: usize) -> bool;
}

/// A value type registered in the block set `B`.
///
/// Maps the type to its tag, its store, and the variant of `B` that wraps
/// that store. A value type may be registered in several block sets.
pub trait Element<B: BlockFuncs>: ElementValue {
    /// Tag under which the type is registered.
    const ELEMENT_TYPE: ElementType;

    /// Store backing blocks of this type.
    type Store: ElementStore<Item = Self>;

    /// Wrap a store into its block variant.
    fn wrap(store: Self::Store) -> B;

    /// The store of `block`, if it holds this type.
    fn store(block: &B) -> Option<&Self::Store>;

    /// The mutable store of `block`, if it holds this type.
    fn store_mut(block: &mut B) -> Option<&mut Self::Store>;

    /// Take the store out of `block`, or hand the block back if it holds
    /// another type.
    fn unwrap(block: B) -> Result<Self::Store, B>;

    /// Build a block holding `values` in order.
    fn block_from_values(values: Vec<Self>) -> B {
        Self::wrap(<Self::Store as ElementStore>::from_values(values))
    }
}
