//! Integration test: block acquire/release notifications.
//!
//! The recorder's live count (acquired minus released) must always equal
//! the number of element blocks the containers sharing it hold. Empty
//! runs never fire.

use tessera_block::ElementType;
use tessera_core::{BlockEvent, HookError};
use tessera_test_utils::{EventCounts, Managed, RecordingEvents, TestBlocks};
use tessera_vector::SegmentedVec;

type Recorded = SegmentedVec<TestBlocks, RecordingEvents>;

fn recorded() -> (Recorded, RecordingEvents) {
    let events = RecordingEvents::new();
    (Recorded::with_events(events.clone()), events)
}

fn element_blocks(vec: &Recorded) -> isize {
    vec.blocks().filter(|b| !b.is_empty()).count() as isize
}

#[test]
fn empty_runs_fire_nothing() {
    let (mut vec, events) = recorded();
    vec.resize(10);
    vec.insert_empty(3, 4).unwrap();
    vec.erase(0..2).unwrap();
    assert_eq!(events.total(), EventCounts::default());
}

#[test]
fn live_count_tracks_element_blocks() {
    let (mut vec, events) = recorded();
    vec.resize(10);

    vec.set_range(2, [1i32, 2, 3]).unwrap();
    vec.set(4, true).unwrap();
    assert_eq!(
        events.counts(ElementType::INT32),
        EventCounts {
            acquired: 1,
            released: 0
        }
    );
    assert_eq!(
        events.counts(ElementType::BOOLEAN),
        EventCounts {
            acquired: 1,
            released: 0
        }
    );
    assert_eq!(events.live(), element_blocks(&vec));

    vec.set(3, true).unwrap();
    assert_eq!(events.live(), element_blocks(&vec));
    vec.set(6, Managed::new(1)).unwrap();
    vec.insert(7, [Managed::new(2)]).unwrap();
    assert_eq!(events.live(), element_blocks(&vec));
    vec.set_empty(0..5).unwrap();
    assert_eq!(events.live(), element_blocks(&vec));
    vec.erase(5..7).unwrap();
    assert_eq!(events.live(), element_blocks(&vec));
    let _ = vec.release_range(0..vec.len()).unwrap();
    assert_eq!(events.live(), 0);
    assert_eq!(events.seen_types()[..2], [ElementType::INT32, ElementType::BOOLEAN]);
}

#[test]
fn split_acquires_the_tail() {
    let (mut vec, events) = recorded();
    vec.insert(0, 0..6i32).unwrap();
    vec.set(2, true).unwrap();
    assert_eq!(vec.block_count(), 3);
    assert_eq!(events.counts(ElementType::INT32).acquired, 2);
    assert_eq!(events.counts(ElementType::BOOLEAN).acquired, 1);
    assert_eq!(events.live(), 3);
}

#[test]
fn failing_hooks_are_collected_and_do_not_undo() {
    let (mut vec, events) = recorded();
    vec.insert(0, 0..6i32).unwrap();
    vec.set(2, true).unwrap();
    events.fail_on_release(true);

    // Dropping the flag releases it; the following merge releases the
    // right-hand int run.
    vec.erase(2..3).unwrap();
    assert_eq!(vec.block_count(), 1);
    assert_eq!(vec.len(), 5);
    assert_eq!(
        vec.take_hook_errors(),
        vec![
            HookError {
                event: BlockEvent::Released,
                element_type: ElementType::BOOLEAN,
                reason: "refusing to release 1 values".to_string(),
            },
            HookError {
                event: BlockEvent::Released,
                element_type: ElementType::INT32,
                reason: "refusing to release 3 values".to_string(),
            },
        ]
    );
    assert!(vec.take_hook_errors().is_empty());
    events.fail_on_release(false);
}

#[test]
fn drop_and_clear_release_everything() {
    let events = RecordingEvents::new();
    {
        let mut vec = Recorded::with_events(events.clone());
        vec.push_back(1i32).unwrap();
        vec.push_back_empty().unwrap();
        vec.push_back("x".to_string()).unwrap();
        vec.push_back(0.5f64).unwrap();
        assert_eq!(events.live(), 3);
        vec.clear();
        assert_eq!(events.live(), 0);
        assert!(vec.is_empty());
        vec.push_back(true).unwrap();
        assert_eq!(events.live(), 1);
    }
    let total = events.total();
    assert_eq!(total.acquired, total.released);
    assert_eq!(total.acquired, 4);
}

#[test]
fn clone_acquires_on_the_clone_handler() {
    let (mut vec, events) = recorded();
    vec.push_back(1i32).unwrap();
    vec.push_back_empty().unwrap();
    vec.push_back(2.5f64).unwrap();
    let copy = vec.clone();
    assert_eq!(events.live(), 4);
    assert_eq!(events.counts(ElementType::FLOAT64).acquired, 2);
    drop(copy);
    assert_eq!(events.live(), 2);
}

#[test]
fn transfer_moves_blocks_between_handlers() {
    let (mut src, src_events) = recorded();
    src.insert(0, [1i32, 2, 3, 4]).unwrap();
    let (mut dest, dest_events) = recorded();
    dest.resize(4);

    src.transfer(1..3, &mut dest, 0).unwrap();
    assert_eq!(src_events.live(), element_blocks(&src));
    assert_eq!(dest_events.live(), element_blocks(&dest));
    assert_eq!(src_events.live(), 2);
    assert_eq!(dest_events.live(), 1);
    assert_eq!(src_events.counts(ElementType::INT32).released, 1);
}

#[test]
fn transfer_into_unhooked_container() {
    let (mut src, events) = recorded();
    src.insert(0, ["a".to_string(), "b".to_string()]).unwrap();
    let mut plain = SegmentedVec::<TestBlocks>::with_len(2);
    src.transfer(0..2, &mut plain, 0).unwrap();
    assert_eq!(events.live(), 0);
    assert_eq!(plain.get::<String>(1).unwrap(), "b");
}

#[test]
fn whole_swap_fires_nothing_and_moves_handlers() {
    let (mut a, a_events) = recorded();
    let (mut b, b_events) = recorded();
    a.push_back(1i32).unwrap();
    b.push_back(true).unwrap();
    b.push_back(2i32).unwrap();
    let (a_before, b_before) = (a_events.total(), b_events.total());

    a.swap(&mut b);
    assert_eq!(a_events.total(), a_before);
    assert_eq!(b_events.total(), b_before);

    drop(a);
    assert_eq!(b_events.live(), 0);
    assert_eq!(a_events.live(), 1);
    drop(b);
    assert_eq!(a_events.live(), 0);
}

#[cfg(feature = "trace")]
mod trace {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tessera_block::StandardBlocks;
    use tessera_vector::{EventHandler, SegmentedVec, TraceEvent, TraceKind};

    #[derive(Clone, Default)]
    struct Tracer(Rc<RefCell<Vec<(TraceKind, &'static str)>>>);

    impl EventHandler<StandardBlocks> for Tracer {
        fn trace(&self, event: &TraceEvent) {
            self.0.borrow_mut().push((event.kind, event.function));
        }
    }

    #[test]
    fn public_methods_are_traced() {
        let tracer = Tracer::default();
        {
            let mut vec = SegmentedVec::<StandardBlocks, _>::with_events(tracer.clone());
            vec.resize(3);
            let hint = vec.set(1, 5i64).unwrap();
            vec.get_with_hint::<i64>(&hint, 1).unwrap();
        }
        let seen = tracer.0.borrow();
        assert_eq!(seen.first(), Some(&(TraceKind::Constructor, "with_events")));
        assert!(seen.contains(&(TraceKind::Mutator, "set")));
        assert!(seen.contains(&(TraceKind::AccessorWithHint, "get")));
        assert_eq!(seen.last(), Some(&(TraceKind::Destructor, "drop")));
    }
}
