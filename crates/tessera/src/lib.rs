//! Tessera: a typed segmented sequence container.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // Ten empty positions.
//! let mut vec = SegmentedVec::<StandardBlocks>::with_len(10);
//!
//! // Typed writes split and merge blocks as needed.
//! let hint = vec.set_range(2, [1.5f64, 2.5, 3.5]).unwrap();
//! vec.set_with_hint(&hint, 5, 4.5f64).unwrap();
//! vec.set(8, "end".to_string()).unwrap();
//! assert_eq!(vec.block_count(), 5);
//! assert_eq!(vec.get::<f64>(5), Ok(&4.5));
//! assert_eq!(vec.element_type(8), Ok(ElementType::STRING));
//!
//! // Insertion shifts everything after it.
//! vec.insert_empty(0, 2).unwrap();
//! assert_eq!(vec.len(), 12);
//! assert_eq!(vec.get::<String>(10).unwrap(), "end");
//! ```
//!
//! # User-defined element types
//!
//! ```rust
//! use tessera::prelude::*;
//! use tessera::block::element_blocks;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Rgb(u8, u8, u8);
//!
//! element_blocks! {
//!     /// Numbers and colours.
//!     pub enum Cells {
//!         Number(f64 => Vec<f64>) = ElementType::FLOAT64,
//!         Colour(Rgb => Vec<Rgb>) = ElementType::user(0),
//!     }
//! }
//!
//! let mut vec = SegmentedVec::<Cells>::with_len(3);
//! vec.set(1, Rgb(255, 0, 0)).unwrap();
//! assert_eq!(vec.get::<Rgb>(1), Ok(&Rgb(255, 0, 0)));
//! assert!(vec.get::<f64>(1).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Element type tags, instance IDs, error types |
//! | [`block`] | `tessera-block` | Element stores, block dispatch, `element_blocks!` |
//! | [`vector`] | `tessera-vector` | The container, cursors, events, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element type tags, identities, and errors (`tessera-core`).
pub use tessera_core as types;

/// Element stores and closed block dispatch (`tessera-block`).
///
/// Declare a block set with [`block::element_blocks!`], or use the
/// built-in [`block::StandardBlocks`].
pub use tessera_block as block;

/// The segmented container (`tessera-vector`).
///
/// [`vector::SegmentedVec`] is the container; [`vector::Cursor`] the hint
/// handle; [`vector::EventHandler`] the block event hook.
pub use tessera_vector as vector;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{ElementType, HookError, VectorError};

    // Blocks
    pub use tessera_block::{BlockFuncs, Element, ElementStore, StandardBlocks};

    // Container
    pub use tessera_vector::{
        BlockRef, Cursor, EventHandler, NoEvents, Position, SegmentedVec, VectorConfig,
    };
}
