//! Typed segmented sequence container.
//!
//! [`SegmentedVec`] is a logical array in which each position holds a value
//! of one registered type, or nothing. Physically it is a sequence of
//! homogeneously typed blocks, kept maximal by splitting and merging on
//! every mutation.
//!
//! # Architecture
//!
//! ```text
//! SegmentedVec<B, H>
//! ├── BlockIndex   positions[] / sizes[] / blocks[]  (struct-of-arrays)
//! │   └── adjust_positions   unrolled / parallel shift after insert & erase
//! ├── Cursor       (instance, generation, block) hint for O(1) sequential access
//! ├── Hooks<H>     block acquired / released events, trace hook
//! └── VectorConfig unrolling factor, execution policies
//! ```
//!
//! Every mutator validates its arguments before the first change, so an
//! `Err` always leaves the container as it was.
//!
//! # Example
//!
//! ```
//! use tessera_block::{ElementType, StandardBlocks};
//! use tessera_vector::SegmentedVec;
//!
//! let mut vec = SegmentedVec::<StandardBlocks>::with_len(20);
//! vec.set(0, 1.1f64).unwrap();
//! vec.set_range(1, [1.2f64, 1.3]).unwrap();
//! vec.set(10, "Andy".to_string()).unwrap();
//!
//! let layout: Vec<_> = vec
//!     .blocks()
//!     .map(|b| (b.position, b.size, b.element_type))
//!     .collect();
//! assert_eq!(
//!     layout,
//!     [
//!         (0, 3, ElementType::FLOAT64),
//!         (3, 7, ElementType::EMPTY),
//!         (10, 1, ElementType::STRING),
//!         (11, 9, ElementType::EMPTY),
//!     ]
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjust;
pub mod config;
pub mod cursor;
pub mod event;
mod index;
pub mod iter;
mod ops;
mod transfer;
pub mod vector;

pub use adjust::adjust_positions;
pub use config::{ExecutionPolicy, LoopUnrolling, VectorConfig};
pub use cursor::{Cursor, Position};
pub use event::{EventHandler, NoEvents, TraceEvent, TraceKind};
pub use iter::{BlockRef, Blocks};
pub use vector::SegmentedVec;
