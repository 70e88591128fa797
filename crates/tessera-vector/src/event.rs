//! Block event hooks and the diagnostic trace hook.
//!
//! Hooks run synchronously on the mutating thread. A failing hook never
//! undoes the structural change that triggered it: the failure is logged,
//! recorded as a [`HookError`], and drained by the caller with
//! [`SegmentedVec::take_hook_errors`](crate::SegmentedVec::take_hook_errors).

use std::fmt;

use tessera_block::BlockFuncs;
use tessera_core::{BlockEvent, HookError, InstanceId};

/// Callbacks fired as element blocks enter and leave a container.
///
/// A block is acquired when it enters the container (built from values,
/// split off an existing block, cloned, received by transfer or swap) and
/// released when it leaves (merged into a neighbour, erased, overwritten,
/// cleared, transferred out, dropped with the container). Runs of empty
/// positions carry no element block and fire nothing.
pub trait EventHandler<B: BlockFuncs> {
    /// An element block entered the container.
    fn block_acquired(&mut self, _block: &B) -> Result<(), String> {
        Ok(())
    }

    /// An element block is about to leave the container.
    fn block_released(&mut self, _block: &B) -> Result<(), String> {
        Ok(())
    }

    /// Entry into a public container method.
    ///
    /// Only called when the `trace` feature is enabled. The default writes
    /// a `trace`-level log record.
    fn trace(&self, event: &TraceEvent) {
        log::trace!("{event}");
    }
}

/// Handler that ignores every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoEvents;

impl<B: BlockFuncs> EventHandler<B> for NoEvents {}

/// Category of a traced method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceKind {
    /// Read-only access.
    Accessor,
    /// Read-only access resolved through a cursor.
    AccessorWithHint,
    /// Mutation.
    Mutator,
    /// Mutation resolved through a cursor.
    MutatorWithHint,
    /// Construction, including clone.
    Constructor,
    /// Destruction.
    Destructor,
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accessor => "accessor",
            Self::AccessorWithHint => "accessor_with_hint",
            Self::Mutator => "mutator",
            Self::MutatorWithHint => "mutator_with_hint",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
        };
        f.write_str(name)
    }
}

/// One traced method entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// Category of the method.
    pub kind: TraceKind,
    /// Container the method was called on.
    pub instance: InstanceId,
    /// Method name.
    pub function: &'static str,
    /// Rendering of the arguments.
    pub args: String,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] vec={} {}({})",
            self.kind, self.instance, self.function, self.args
        )
    }
}

/// An event handler plus the failures it has reported.
#[derive(Clone, Debug, Default)]
pub(crate) struct Hooks<H> {
    pub(crate) handler: H,
    pub(crate) errors: Vec<HookError>,
}

impl<H> Hooks<H> {
    pub(crate) fn new(handler: H) -> Self {
        Self {
            handler,
            errors: Vec::new(),
        }
    }

    pub(crate) fn acquired<B>(&mut self, block: &B)
    where
        B: BlockFuncs,
        H: EventHandler<B>,
    {
        if let Err(reason) = self.handler.block_acquired(block) {
            self.report(BlockEvent::Acquired, block, reason);
        }
    }

    pub(crate) fn released<B>(&mut self, block: &B)
    where
        B: BlockFuncs,
        H: EventHandler<B>,
    {
        if let Err(reason) = self.handler.block_released(block) {
            self.report(BlockEvent::Released, block, reason);
        }
    }

    fn report<B: BlockFuncs>(&mut self, event: BlockEvent, block: &B, reason: String) {
        let error = HookError {
            event,
            element_type: block.element_type(),
            reason,
        };
        log::warn!("{error}");
        self.errors.push(error);
    }
}

/// Emit a trace event through the container's handler.
///
/// Compiles to nothing without the `trace` feature.
macro_rules! trace_call {
    ($vec:expr, $kind:ident, $function:literal $(, $arg:ident)* $(,)?) => {{
        #[cfg(feature = "trace")]
        {
            #[allow(unused_mut)]
            let mut args = String::new();
            $(
                if !args.is_empty() {
                    args.push_str(", ");
                }
                args.push_str(&format!("{}={:?}", stringify!($arg), $arg));
            )*
            $crate::event::EventHandler::trace(
                &$vec.hooks.handler,
                &$crate::event::TraceEvent {
                    kind: $crate::event::TraceKind::$kind,
                    instance: $vec.instance,
                    function: $function,
                    args,
                },
            );
        }
    }};
}

pub(crate) use trace_call;
