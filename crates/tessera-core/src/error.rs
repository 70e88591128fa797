//! Error types for the Tessera container.
//!
//! Organised by concern: programming errors rejected before any mutation
//! ([`VectorError`]), event hook failures that are reported but never
//! rolled back ([`HookError`]), and structural integrity violations found
//! by the block index checker ([`IntegrityError`]).

use std::error::Error;
use std::fmt;

use crate::id::{ElementType, InstanceId};

/// Errors returned by container operations.
///
/// Every operation that returns one of these has left the container
/// exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// A position lies outside the container.
    OutOfRange {
        /// The requested position.
        pos: usize,
        /// Logical length of the container.
        len: usize,
    },
    /// A range is reversed or extends past the end of the container.
    InvalidRange {
        /// Start of the requested range.
        start: usize,
        /// End (exclusive) of the requested range.
        end: usize,
        /// Logical length of the container.
        len: usize,
    },
    /// Typed access to a position holding a different type.
    TypeMismatch {
        /// The accessed position.
        pos: usize,
        /// Type requested by the caller.
        expected: ElementType,
        /// Type actually stored at `pos`.
        actual: ElementType,
    },
    /// A cursor issued before the last structural change.
    StaleCursor {
        /// Generation encoded in the cursor.
        cursor: u64,
        /// Current generation of the container.
        current: u64,
    },
    /// A cursor issued by a different container.
    ForeignCursor {
        /// Container that issued the cursor.
        cursor: InstanceId,
        /// Container the cursor was presented to.
        container: InstanceId,
    },
    /// The destination of a transfer or range swap is too short.
    DestinationOutOfRange {
        /// Requested destination position.
        pos: usize,
        /// Number of positions to move.
        len: usize,
        /// Logical length of the destination container.
        dest_len: usize,
    },
    /// Growing the container would push its length past `usize::MAX`.
    LengthOverflow {
        /// Logical length of the container.
        len: usize,
        /// Number of positions the operation tried to add.
        additional: usize,
    },
    /// A type tag that is not registered in the block set.
    UnknownElementType {
        /// The unregistered tag.
        element_type: ElementType,
    },
    /// Container configuration failed validation.
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} out of range for length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for length {len}")
            }
            Self::TypeMismatch {
                pos,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "type mismatch at position {pos}: expected {expected}, found {actual}"
                )
            }
            Self::StaleCursor { cursor, current } => {
                write!(
                    f,
                    "stale cursor: generation {cursor}, container is at generation {current}"
                )
            }
            Self::ForeignCursor { cursor, container } => {
                write!(
                    f,
                    "cursor issued by container {cursor} used on container {container}"
                )
            }
            Self::DestinationOutOfRange { pos, len, dest_len } => {
                write!(
                    f,
                    "destination range {pos}..{} exceeds destination length {dest_len}",
                    pos.saturating_add(*len)
                )
            }
            Self::LengthOverflow { len, additional } => {
                write!(f, "cannot add {additional} positions to length {len}")
            }
            Self::UnknownElementType { element_type } => {
                write!(f, "element type {element_type} is not registered")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for VectorError {}

/// Which block event a hook was handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockEvent {
    /// An element block entered the container.
    Acquired,
    /// An element block left the container.
    Released,
}

impl fmt::Display for BlockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquired => f.write_str("acquired"),
            Self::Released => f.write_str("released"),
        }
    }
}

/// An event hook reported a failure.
///
/// The structural change that triggered the hook has already been applied
/// and is not undone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookError {
    /// The event being delivered.
    pub event: BlockEvent,
    /// Type of the block the event was about.
    pub element_type: ElementType,
    /// Failure description supplied by the hook.
    pub reason: String,
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hook failed for {} block: {}",
            self.event, self.element_type, self.reason
        )
    }
}

impl Error for HookError {}

/// A broken block index invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// The parallel block arrays have different lengths.
    ArrayLengthMismatch {
        /// Length of the positions array.
        positions: usize,
        /// Length of the sizes array.
        sizes: usize,
        /// Length of the element block array.
        blocks: usize,
    },
    /// A block of size zero.
    ZeroSizeBlock {
        /// Index of the offending block.
        index: usize,
    },
    /// Two neighbouring blocks with the same element type.
    AdjacentSameType {
        /// Index of the first of the two blocks.
        index: usize,
        /// The shared element type.
        element_type: ElementType,
    },
    /// A block does not start where the previous one ends.
    PositionMismatch {
        /// Index of the offending block.
        index: usize,
        /// Position implied by the previous blocks.
        expected: usize,
        /// Position recorded for the block.
        actual: usize,
    },
    /// A block's recorded size differs from its store's length.
    StoreSizeMismatch {
        /// Index of the offending block.
        index: usize,
        /// Size recorded in the index.
        recorded: usize,
        /// Length of the element store.
        store: usize,
    },
    /// The block sizes do not add up to the container length.
    TotalSizeMismatch {
        /// Logical length of the container.
        expected: usize,
        /// Sum of block sizes.
        actual: usize,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArrayLengthMismatch {
                positions,
                sizes,
                blocks,
            } => write!(
                f,
                "block arrays disagree: {positions} positions, {sizes} sizes, {blocks} blocks"
            ),
            Self::ZeroSizeBlock { index } => write!(f, "block {index} has size 0"),
            Self::AdjacentSameType {
                index,
                element_type,
            } => write!(
                f,
                "blocks {index} and {} are both of type {element_type}",
                index + 1
            ),
            Self::PositionMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "block {index} starts at {actual}, expected {expected}"
            ),
            Self::StoreSizeMismatch {
                index,
                recorded,
                store,
            } => write!(
                f,
                "block {index} records size {recorded} but its store holds {store}"
            ),
            Self::TotalSizeMismatch { expected, actual } => {
                write!(f, "block sizes sum to {actual}, container length is {expected}")
            }
        }
    }
}

impl Error for IntegrityError {}
