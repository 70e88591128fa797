//! Element stores and the block capability registry.
//!
//! A block is a homogeneously typed run of values. This crate defines how
//! a closed set of value types is registered so that the container can
//! create, split, merge, and compare blocks without dynamic dispatch.
//!
//! # Architecture
//!
//! ```text
//! element_blocks! { enum MyBlocks { ... } }   (registration, compile time)
//! ├── MyBlocks: BlockFuncs        capability table, one match per call
//! ├── T: Element<MyBlocks>        value type → variant + store mapping
//! └── Store: ElementStore         Vec<T> | VecDeque<T> | DelayedDeleteVec<T>
//! ```
//!
//! Tags are checked at compile time: the macro rejects duplicate tags and
//! the reserved [`ElementType::EMPTY`] tag.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod delayed;
pub mod funcs;
mod macros;
pub mod standard;
pub mod store;

pub use delayed::DelayedDeleteVec;
pub use funcs::{BlockFuncs, Element};
pub use standard::StandardBlocks;
pub use store::{ElementStore, ElementValue};
pub use tessera_core::ElementType;
