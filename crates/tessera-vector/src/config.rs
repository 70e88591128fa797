//! Container configuration parameters.

use tessera_core::VectorError;

/// Manual unrolling factor of the position-adjustment loop.
///
/// A pure performance knob: every factor produces identical positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LoopUnrolling {
    /// Plain sequential loop.
    None,
    /// 4-way unrolled.
    Lu4,
    /// 8-way unrolled.
    Lu8,
    /// 16-way unrolled.
    #[default]
    Lu16,
    /// 32-way unrolled.
    Lu32,
}

impl LoopUnrolling {
    /// Number of positions updated per loop iteration.
    pub const fn factor(self) -> usize {
        match self {
            Self::None => 1,
            Self::Lu4 => 4,
            Self::Lu8 => 8,
            Self::Lu16 => 16,
            Self::Lu32 => 32,
        }
    }
}

/// Whether a bulk per-block loop may fan out across worker threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ExecutionPolicy {
    /// Run on the calling thread.
    #[default]
    Sequential,
    /// Split into disjoint chunks processed by the rayon pool.
    ///
    /// Without the `parallel` feature this degrades to [`Sequential`](Self::Sequential).
    Parallel,
}

/// Configuration for a [`SegmentedVec`](crate::SegmentedVec).
///
/// Controls how the position-adjustment routine and whole-container
/// clone execute. None of the settings changes observable results.
/// Validated when passed to
/// [`SegmentedVec::with_config`](crate::SegmentedVec::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorConfig {
    /// Unrolling factor of the position-adjustment loop.
    ///
    /// Default: [`LoopUnrolling::Lu16`].
    pub loop_unrolling: LoopUnrolling,

    /// Execution policy of the position-adjustment routine.
    ///
    /// Default: [`ExecutionPolicy::Sequential`].
    pub adjust_policy: ExecutionPolicy,

    /// Execution policy of whole-container clone.
    ///
    /// Default: [`ExecutionPolicy::Sequential`].
    pub clone_policy: ExecutionPolicy,

    /// Minimum number of blocks before a parallel policy fans out.
    ///
    /// Default: 4096. Must be at least 1.
    pub parallel_threshold: usize,
}

impl VectorConfig {
    /// Default unrolling factor.
    pub const DEFAULT_LOOP_UNROLLING: LoopUnrolling = LoopUnrolling::Lu16;

    /// Default block count threshold for parallel fan-out.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Sequential config with the default unrolling factor.
    pub fn new() -> Self {
        Self {
            loop_unrolling: Self::DEFAULT_LOOP_UNROLLING,
            adjust_policy: ExecutionPolicy::Sequential,
            clone_policy: ExecutionPolicy::Sequential,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Config with both bulk loops set to [`ExecutionPolicy::Parallel`].
    pub fn parallel() -> Self {
        Self {
            adjust_policy: ExecutionPolicy::Parallel,
            clone_policy: ExecutionPolicy::Parallel,
            ..Self::new()
        }
    }

    /// Check the settings for consistency.
    pub fn validate(&self) -> Result<(), VectorError> {
        if self.parallel_threshold == 0 {
            return Err(VectorError::InvalidConfig {
                reason: "parallel_threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether a loop over `blocks` blocks under `policy` should fan out.
    pub(crate) fn fans_out(&self, policy: ExecutionPolicy, blocks: usize) -> bool {
        policy == ExecutionPolicy::Parallel && blocks >= self.parallel_threshold
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
