//! Bulk block position adjustment.
//!
//! After a length-changing mutation every later block start moves by the
//! same signed delta. On wide containers this loop dominates the cost of
//! `insert` and `erase`, so it runs over the flat `positions` array of the
//! block index with a configurable unrolling factor and, for very large
//! block counts, fans out over disjoint chunks.

use crate::config::{LoopUnrolling, VectorConfig};

/// Chunk length handed to each worker when the parallel path is taken.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 1024;

/// Add `delta` to every position in `positions[start..]`.
///
/// The result is identical for every unrolling factor and execution
/// policy. Positions are block starts, so the caller guarantees no
/// position underflows.
pub fn adjust_positions(positions: &mut [usize], start: usize, delta: isize, config: &VectorConfig) {
    if delta == 0 || start >= positions.len() {
        return;
    }
    let tail = &mut positions[start..];
    if config.fans_out(config.adjust_policy, tail.len()) {
        adjust_parallel(tail, delta, config.loop_unrolling);
    } else {
        adjust_sequential(tail, delta, config.loop_unrolling);
    }
}

fn adjust_sequential(positions: &mut [usize], delta: isize, unrolling: LoopUnrolling) {
    match unrolling {
        LoopUnrolling::None => {
            for p in positions.iter_mut() {
                *p = p.wrapping_add_signed(delta);
            }
        }
        LoopUnrolling::Lu4 => adjust_unrolled::<4>(positions, delta),
        LoopUnrolling::Lu8 => adjust_unrolled::<8>(positions, delta),
        LoopUnrolling::Lu16 => adjust_unrolled::<16>(positions, delta),
        LoopUnrolling::Lu32 => adjust_unrolled::<32>(positions, delta),
    }
}

/// `F` lanes per iteration; the fixed-width inner loop is what the
/// compiler turns into vector adds.
fn adjust_unrolled<const F: usize>(positions: &mut [usize], delta: isize) {
    let mut chunks = positions.chunks_exact_mut(F);
    for chunk in &mut chunks {
        for p in chunk.iter_mut() {
            *p = p.wrapping_add_signed(delta);
        }
    }
    for p in chunks.into_remainder() {
        *p = p.wrapping_add_signed(delta);
    }
}

#[cfg(feature = "parallel")]
fn adjust_parallel(positions: &mut [usize], delta: isize, unrolling: LoopUnrolling) {
    use rayon::prelude::*;

    positions
        .par_chunks_mut(PARALLEL_CHUNK)
        .for_each(|chunk| adjust_sequential(chunk, delta, unrolling));
}

#[cfg(not(feature = "parallel"))]
fn adjust_parallel(positions: &mut [usize], delta: isize, unrolling: LoopUnrolling) {
    log::debug!(
        "parallel position adjustment requested without the `parallel` feature; running {} blocks sequentially",
        positions.len()
    );
    adjust_sequential(positions, delta, unrolling);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutionPolicy;
    use proptest::prelude::*;

    const ALL_UNROLLINGS: [LoopUnrolling; 5] = [
        LoopUnrolling::None,
        LoopUnrolling::Lu4,
        LoopUnrolling::Lu8,
        LoopUnrolling::Lu16,
        LoopUnrolling::Lu32,
    ];

    fn naive(positions: &[usize], start: usize, delta: isize) -> Vec<usize> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &p)| if i >= start { (p as isize + delta) as usize } else { p })
            .collect()
    }

    #[test]
    fn shifts_only_tail() {
        let mut positions = vec![0, 3, 5, 9, 12];
        adjust_positions(&mut positions, 2, 4, &VectorConfig::default());
        assert_eq!(positions, [0, 3, 9, 13, 16]);
    }

    #[test]
    fn negative_delta() {
        let mut positions = vec![0, 10, 20, 30];
        adjust_positions(&mut positions, 1, -7, &VectorConfig::default());
        assert_eq!(positions, [0, 3, 13, 23]);
    }

    #[test]
    fn start_past_end_is_noop() {
        let mut positions = vec![0, 1];
        adjust_positions(&mut positions, 2, 5, &VectorConfig::default());
        assert_eq!(positions, [0, 1]);
    }

    #[test]
    fn parallel_policy_matches_sequential_on_large_input() {
        let original: Vec<usize> = (0..10_000).map(|i| i * 3 + 100).collect();
        let config = VectorConfig {
            parallel_threshold: 1,
            ..VectorConfig::parallel()
        };
        let mut positions = original.clone();
        adjust_positions(&mut positions, 17, -50, &config);
        assert_eq!(positions, naive(&original, 17, -50));
    }

    proptest! {
        #[test]
        fn every_unrolling_and_policy_matches_naive(
            base in prop::collection::vec(1_000usize..1_000_000, 0..300),
            start in 0usize..320,
            delta in -999isize..1_000,
        ) {
            let expected = naive(&base, start, delta);
            for unrolling in ALL_UNROLLINGS {
                for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
                    let config = VectorConfig {
                        loop_unrolling: unrolling,
                        adjust_policy: policy,
                        parallel_threshold: 1,
                        ..VectorConfig::default()
                    };
                    let mut positions = base.clone();
                    adjust_positions(&mut positions, start, delta, &config);
                    prop_assert_eq!(&positions, &expected);
                }
            }
        }
    }
}
