//! Core types for the Tessera segmented container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element type tags, container identity, and the error types shared
//! by the block registry and the container itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{BlockEvent, HookError, IntegrityError, VectorError};
pub use id::{ElementType, InstanceId};
