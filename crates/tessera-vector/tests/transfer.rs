//! Integration test: moving and exchanging ranges between containers.
//!
//! Checks the resulting layouts on both sides, and that every rejected
//! call leaves both containers exactly as they were, generation included.

use tessera_block::ElementType;
use tessera_core::VectorError;
use tessera_test_utils::{assert_matches_model, read_cells, Cell, Point, TestBlocks};
use tessera_vector::SegmentedVec;

type Vec6 = SegmentedVec<TestBlocks>;

fn layout(vec: &Vec6) -> Vec<(usize, usize, ElementType)> {
    vec.blocks()
        .map(|b| (b.position, b.size, b.element_type))
        .collect()
}

/// `[1, 2, 3, "a", "b", -, -]`
fn source() -> Vec6 {
    let mut vec = Vec6::from_values([1i32, 2, 3]);
    vec.insert(3, ["a".to_string(), "b".to_string()]).unwrap();
    vec.resize(7);
    vec
}

#[test]
fn transfer_moves_mixed_range() {
    let mut src = source();
    let mut dest = Vec6::from_values([0.5f64; 6]);
    src.transfer(2..6, &mut dest, 1).unwrap();

    assert_eq!(
        layout(&src),
        [(0, 2, ElementType::INT32), (2, 5, ElementType::EMPTY)]
    );
    assert_eq!(
        layout(&dest),
        [
            (0, 1, ElementType::FLOAT64),
            (1, 1, ElementType::INT32),
            (2, 2, ElementType::STRING),
            (4, 1, ElementType::EMPTY),
            (5, 1, ElementType::FLOAT64),
        ]
    );
    assert_matches_model(
        &dest,
        &[
            Cell::Real(0.5),
            Cell::Int(3),
            Cell::Text("a".into()),
            Cell::Text("b".into()),
            Cell::Empty,
            Cell::Real(0.5),
        ],
    );
}

#[test]
fn transfer_keeps_both_lengths() {
    let mut src = source();
    let mut dest = Vec6::with_len(3);
    src.transfer(0..3, &mut dest, 0).unwrap();
    assert_eq!(src.len(), 7);
    assert_eq!(dest.len(), 3);
    assert_eq!(dest, Vec6::from_values([1i32, 2, 3]));
    assert!(src.is_empty_at(0).unwrap());
}

#[test]
fn rejected_transfer_changes_nothing() {
    let mut src = source();
    let mut dest = Vec6::from_values([0.5f64; 6]);
    let (src_before, dest_before) = (read_cells(&src), read_cells(&dest));
    let (src_gen, dest_gen) = (src.generation(), dest.generation());

    assert_eq!(
        src.transfer(0..4, &mut dest, 4),
        Err(VectorError::DestinationOutOfRange {
            pos: 4,
            len: 4,
            dest_len: 6,
        })
    );
    assert!(matches!(
        src.transfer(5..9, &mut dest, 0),
        Err(VectorError::InvalidRange { .. })
    ));
    assert!(matches!(
        src.transfer(3..2, &mut dest, 0),
        Err(VectorError::InvalidRange { .. })
    ));

    assert_eq!(read_cells(&src), src_before);
    assert_eq!(read_cells(&dest), dest_before);
    assert_eq!(src.generation(), src_gen);
    assert_eq!(dest.generation(), dest_gen);
}

#[test]
fn empty_transfer_is_a_no_op() {
    let mut src = source();
    let mut dest = Vec6::with_len(2);
    let generation = src.generation();
    src.transfer(4..4, &mut dest, 2).unwrap();
    assert_eq!(src.generation(), generation);
    assert_eq!(read_cells(&src), read_cells(&source()));
}

#[test]
fn swap_range_exchanges_across_types() {
    let mut a = Vec6::from_values([1i32; 4]);
    let mut b = Vec6::from_values(["x".to_string(), "y".into(), "z".into()]);
    a.swap_range(1..3, &mut b, 0).unwrap();

    assert_matches_model(
        &a,
        &[
            Cell::Int(1),
            Cell::Text("x".into()),
            Cell::Text("y".into()),
            Cell::Int(1),
        ],
    );
    assert_matches_model(
        &b,
        &[Cell::Int(1), Cell::Int(1), Cell::Text("z".into())],
    );
}

#[test]
fn swap_range_merges_with_destination_neighbours() {
    let mut a = Vec6::from_values([Point { x: 1, y: 1 }; 3]);
    let mut b = Vec6::from_values([Point { x: 2, y: 2 }]);
    b.push_back(7i32).unwrap();
    b.push_back(Point { x: 3, y: 3 }).unwrap();
    // Swapping b's lone int for a point joins b into one block.
    a.swap_range(0..1, &mut b, 1).unwrap();
    assert_eq!(layout(&b), [(0, 3, ElementType::user(1))]);
    assert_eq!(
        layout(&a),
        [(0, 1, ElementType::INT32), (1, 2, ElementType::user(1))]
    );
}

#[test]
fn rejected_swap_range_changes_nothing() {
    let mut a = source();
    let mut b = Vec6::with_len(2);
    let before = read_cells(&a);
    assert!(matches!(
        a.swap_range(0..3, &mut b, 0),
        Err(VectorError::DestinationOutOfRange { .. })
    ));
    assert_eq!(read_cells(&a), before);
    assert_eq!(b.len(), 2);
    assert_eq!(b.block_count(), 1);
}

#[test]
fn whole_swap_exchanges_contents() {
    let mut a = source();
    let mut b = Vec6::filled(2, true);
    let (a_id, b_id) = (a.instance(), b.instance());
    a.swap(&mut b);
    assert_eq!(a, Vec6::filled(2, true));
    assert_eq!(b, source());
    assert_eq!(a.instance(), a_id);
    assert_eq!(b.instance(), b_id);
}
