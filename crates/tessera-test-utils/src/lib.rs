//! Test utilities for Tessera development.
//!
//! Provides a block set exercising every store layout and a managed
//! user type ([`TestBlocks`]), a shared-state event recorder
//! ([`RecordingEvents`]), and a flat reference model ([`Cell`]) for
//! checking container contents position by position.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod blocks;
pub mod events;
pub mod model;

pub use blocks::{Managed, Point, TestBlocks};
pub use events::{EventCounts, RecordingEvents};
pub use model::{assert_matches_model, read_cells, write_cell, Cell};
