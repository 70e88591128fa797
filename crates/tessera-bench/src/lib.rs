//! Benchmark profiles for the Tessera segmented container.
//!
//! Provides pre-built containers and index workloads:
//!
//! - [`striped`]: alternating typed and empty stripes (many blocks)
//! - [`dense`]: one numeric block (few blocks)
//! - [`scatter_positions`]: deterministic pseudo-random positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_block::StandardBlocks;
use tessera_vector::SegmentedVec;

/// Container type used by every benchmark.
pub type BenchVec = SegmentedVec<StandardBlocks>;

/// Build a container of `len` positions cut into stripes of `stripe`
/// positions, cycling through `f64`, empty, `i32`, empty.
///
/// Yields roughly `len / stripe` blocks, which is what makes the
/// position-adjustment step dominate insert and erase.
pub fn striped(len: usize, stripe: usize) -> BenchVec {
    let stripe = stripe.max(1);
    let mut vec = BenchVec::with_len(len);
    let Ok(mut hint) = vec.position(0).map(|p| p.cursor) else {
        return vec;
    };
    for (n, start) in (0..len).step_by(stripe).enumerate() {
        let end = (start + stripe).min(len);
        let result = match n % 4 {
            0 => vec.set_range_with_hint(&hint, start, (start..end).map(|i| i as f64)),
            2 => vec.set_range_with_hint(&hint, start, (start..end).map(|i| i as i32)),
            _ => continue,
        };
        if let Ok(cursor) = result {
            hint = cursor;
        }
    }
    vec
}

/// Build a container holding `len` consecutive `f64` values.
pub fn dense(len: usize) -> BenchVec {
    BenchVec::from_values((0..len).map(|i| i as f64))
}

/// Generate `n` deterministic positions in `0..len`.
///
/// Uses a linear congruential step seeded by `seed`, so runs are
/// reproducible without a random number generator.
pub fn scatter_positions(len: usize, n: usize, seed: u64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % len as u64) as usize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striped_block_count() {
        let vec = striped(1000, 10);
        assert_eq!(vec.len(), 1000);
        // Typed stripes never touch, so every stripe is its own block.
        assert_eq!(vec.block_count(), 100);
        assert!(vec.check_integrity().is_ok());
    }

    #[test]
    fn dense_is_one_block() {
        assert_eq!(dense(500).block_count(), 1);
    }

    #[test]
    fn scatter_positions_deterministic_and_in_bounds() {
        let a = scatter_positions(777, 50, 42);
        let b = scatter_positions(777, 50, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&p| p < 777));
        assert!(scatter_positions(0, 5, 1).is_empty());
    }
}
