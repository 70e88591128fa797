//! Element type tags and container identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag identifying the type of the values stored in a block.
///
/// Tags `0..=11` are the built-in value types. Tags from
/// [`ElementType::USER_START`] upwards are reserved for types registered by
/// the embedding application. [`ElementType::EMPTY`] is the pseudo-type of
/// runs of unset positions; it never has a backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementType(pub i32);

impl ElementType {
    /// Unset positions.
    pub const EMPTY: Self = Self(-1);
    /// `bool` values.
    pub const BOOLEAN: Self = Self(0);
    /// `i8` values.
    pub const INT8: Self = Self(1);
    /// `u8` values.
    pub const UINT8: Self = Self(2);
    /// `i16` values.
    pub const INT16: Self = Self(3);
    /// `u16` values.
    pub const UINT16: Self = Self(4);
    /// `i32` values.
    pub const INT32: Self = Self(5);
    /// `u32` values.
    pub const UINT32: Self = Self(6);
    /// `i64` values.
    pub const INT64: Self = Self(7);
    /// `u64` values.
    pub const UINT64: Self = Self(8);
    /// `f32` values.
    pub const FLOAT32: Self = Self(9);
    /// `f64` values.
    pub const FLOAT64: Self = Self(10);
    /// `String` values.
    pub const STRING: Self = Self(11);
    /// First tag of the user-extension range.
    pub const USER_START: Self = Self(50);

    /// Tag `USER_START + offset` in the user-extension range.
    pub const fn user(offset: u16) -> Self {
        Self(Self::USER_START.0 + offset as i32)
    }

    /// Whether this is the empty pseudo-type.
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Whether this tag is one of the built-in value types.
    pub const fn is_builtin(self) -> bool {
        self.0 >= Self::BOOLEAN.0 && self.0 <= Self::STRING.0
    }

    /// Whether this tag lies in the user-extension range.
    pub const fn is_user_defined(self) -> bool {
        self.0 >= Self::USER_START.0
    }

    /// Name of a built-in type, or `None` for user-defined tags.
    pub fn builtin_name(self) -> Option<&'static str> {
        let name = match self {
            Self::EMPTY => "empty",
            Self::BOOLEAN => "boolean",
            Self::INT8 => "int8",
            Self::UINT8 => "uint8",
            Self::INT16 => "int16",
            Self::UINT16 => "uint16",
            Self::INT32 => "int32",
            Self::UINT32 => "uint32",
            Self::INT64 => "int64",
            Self::UINT64 => "uint64",
            Self::FLOAT32 => "float32",
            Self::FLOAT64 => "float64",
            Self::STRING => "string",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None if self.is_user_defined() => {
                write!(f, "user({})", self.0 - Self::USER_START.0)
            }
            None => write!(f, "unknown({})", self.0),
        }
    }
}

impl From<i32> for ElementType {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`InstanceId`] allocation.
static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a container.
///
/// Allocated from a monotonic atomic counter via [`InstanceId::next`].
/// Cursors carry the id of the container that issued them, so a cursor
/// handed to a different container is detected instead of silently
/// addressing the wrong block list. Clones get a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_range_is_disjoint_from_builtins() {
        let first = ElementType::user(0);
        assert_eq!(first, ElementType::USER_START);
        assert!(first.is_user_defined());
        assert!(!first.is_builtin());
        assert!(ElementType::STRING.is_builtin());
        assert!(!ElementType::STRING.is_user_defined());
    }

    #[test]
    fn empty_is_neither_builtin_nor_user() {
        assert!(ElementType::EMPTY.is_empty());
        assert!(!ElementType::EMPTY.is_builtin());
        assert!(!ElementType::EMPTY.is_user_defined());
    }

    #[test]
    fn display_names() {
        assert_eq!(ElementType::FLOAT64.to_string(), "float64");
        assert_eq!(ElementType::EMPTY.to_string(), "empty");
        assert_eq!(ElementType::user(3).to_string(), "user(3)");
        assert_eq!(ElementType(20).to_string(), "unknown(20)");
    }

    #[test]
    fn instance_ids_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
    }

    proptest::proptest! {
        #[test]
        fn user_tags_stay_in_user_range(offset in 0u16..=u16::MAX) {
            let tag = ElementType::user(offset);
            proptest::prop_assert!(tag.is_user_defined());
            proptest::prop_assert!(!tag.is_builtin());
            proptest::prop_assert!(tag.builtin_name().is_none());
        }
    }
}
