//! Flat reference model of a [`TestBlocks`] container.

use tessera_block::ElementStore;
use tessera_vector::{EventHandler, SegmentedVec};

use crate::blocks::{Managed, Point, TestBlocks};

/// One logical position.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Flag(bool),
    Int(i32),
    Real(f64),
    Text(String),
    Managed(Managed),
    Point(Point),
}

/// Expand a container into one [`Cell`] per position.
pub fn read_cells<H: EventHandler<TestBlocks>>(vec: &SegmentedVec<TestBlocks, H>) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(vec.len());
    for block in vec.blocks() {
        match block.data {
            None => cells.extend(std::iter::repeat_n(Cell::Empty, block.size)),
            Some(TestBlocks::Flag(s)) => cells.extend(s.iter().copied().map(Cell::Flag)),
            Some(TestBlocks::Int(s)) => cells.extend(s.iter().copied().map(Cell::Int)),
            Some(TestBlocks::Real(s)) => cells.extend(s.iter().copied().map(Cell::Real)),
            Some(TestBlocks::Text(s)) => cells.extend(s.iter().cloned().map(Cell::Text)),
            Some(TestBlocks::Managed(s)) => cells.extend(s.iter().cloned().map(Cell::Managed)),
            Some(TestBlocks::Point(s)) => cells.extend(s.iter().copied().map(Cell::Point)),
        }
    }
    cells
}

/// Store `cell` at `pos` through the matching typed `set`.
pub fn write_cell<H: EventHandler<TestBlocks>>(
    vec: &mut SegmentedVec<TestBlocks, H>,
    pos: usize,
    cell: Cell,
) {
    let result = match cell {
        Cell::Empty => vec.set_empty(pos..pos + 1),
        Cell::Flag(v) => vec.set(pos, v),
        Cell::Int(v) => vec.set(pos, v),
        Cell::Real(v) => vec.set(pos, v),
        Cell::Text(v) => vec.set(pos, v),
        Cell::Managed(v) => vec.set(pos, v),
        Cell::Point(v) => vec.set(pos, v),
    };
    if let Err(e) = result {
        panic!("write_cell({pos}) failed: {e}");
    }
}

/// Assert that `vec` holds exactly `model` and that its block partition
/// is sound.
pub fn assert_matches_model<H: EventHandler<TestBlocks>>(
    vec: &SegmentedVec<TestBlocks, H>,
    model: &[Cell],
) {
    if let Err(e) = vec.check_integrity() {
        panic!("integrity violated: {e}\n{vec:?}");
    }
    assert_eq!(vec.len(), model.len(), "length mismatch");
    assert_eq!(read_cells(vec), model, "contents mismatch");
}
