//! Event recorder with shared state.
//!
//! Clones of a [`RecordingEvents`] share one log, so a test can keep a
//! handle while the container owns another and still observe the events
//! fired by drop, clone and swap.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tessera_block::{BlockFuncs, ElementType};
use tessera_vector::EventHandler;

/// Number of acquire and release events seen for one element type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub acquired: usize,
    pub released: usize,
}

impl EventCounts {
    /// Blocks acquired and not yet released.
    pub fn live(&self) -> isize {
        self.acquired as isize - self.released as isize
    }
}

#[derive(Debug, Default)]
struct Log {
    counts: IndexMap<ElementType, EventCounts>,
    fail_on_release: bool,
}

/// Counts block events per element type, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct RecordingEvents {
    log: Rc<RefCell<Log>>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `block_released` call report a failure.
    pub fn fail_on_release(&self, fail: bool) {
        self.log.borrow_mut().fail_on_release = fail;
    }

    pub fn counts(&self, element_type: ElementType) -> EventCounts {
        self.log
            .borrow()
            .counts
            .get(&element_type)
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self) -> EventCounts {
        self.log
            .borrow()
            .counts
            .values()
            .fold(EventCounts::default(), |acc, c| EventCounts {
                acquired: acc.acquired + c.acquired,
                released: acc.released + c.released,
            })
    }

    /// Element blocks acquired and not yet released, over all types.
    pub fn live(&self) -> isize {
        self.total().live()
    }

    /// Element types seen so far, in first-seen order.
    pub fn seen_types(&self) -> Vec<ElementType> {
        self.log.borrow().counts.keys().copied().collect()
    }

    pub fn reset(&self) {
        self.log.borrow_mut().counts.clear();
    }
}

impl<B: BlockFuncs> EventHandler<B> for RecordingEvents {
    fn block_acquired(&mut self, block: &B) -> Result<(), String> {
        let mut log = self.log.borrow_mut();
        log.counts.entry(block.element_type()).or_default().acquired += 1;
        Ok(())
    }

    fn block_released(&mut self, block: &B) -> Result<(), String> {
        let mut log = self.log.borrow_mut();
        log.counts.entry(block.element_type()).or_default().released += 1;
        if log.fail_on_release {
            return Err(format!("refusing to release {} values", block.len()));
        }
        Ok(())
    }
}
