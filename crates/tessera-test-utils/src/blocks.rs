//! A block set covering every store layout plus two user types.

use std::collections::VecDeque;

use tessera_block::{element_blocks, DelayedDeleteVec, ElementType};

/// A managed value owning a heap buffer.
///
/// Cloning copies the buffer, which is what a block-level deep copy of a
/// managed block has to do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Managed {
    pub id: u32,
    pub payload: Box<[u8]>,
}

impl Managed {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            payload: vec![id as u8; 8].into_boxed_slice(),
        }
    }
}

/// A plain-old-data user type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

element_blocks! {
    /// Blocks used throughout the integration tests.
    pub enum TestBlocks {
        Flag(bool => Vec<bool>) = ElementType::BOOLEAN,
        Int(i32 => Vec<i32>) = ElementType::INT32,
        Real(f64 => DelayedDeleteVec<f64>) = ElementType::FLOAT64,
        Text(String => VecDeque<String>) = ElementType::STRING,
        Managed(Managed => Vec<Managed>) = ElementType::user(0),
        Point(Point => Vec<Point>) = ElementType::user(1),
    }
}
