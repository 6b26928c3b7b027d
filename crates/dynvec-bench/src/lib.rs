//! Benchmark workloads for the dynvec resizable vector.
//!
//! - [`filled`]: a vector pre-loaded with `0..len`
//! - [`churn_ops`]: a deterministic push/pop sequence from a seed
//! - [`run_churn`]: apply such a sequence and report capacity changes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynvec_core::{DynamicArray, Item};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Append the value.
    Push(Item),
    /// Remove from the back.
    Pop,
}

/// Build a vector of `len` elements `0..len`.
///
/// # Panics
///
/// Panics if the configuration is invalid or the vector cannot hold
/// `len` elements.
pub fn filled(initial_capacity: u32, grow_factor: f32, len: u32) -> DynamicArray {
    let mut v = DynamicArray::new(initial_capacity, grow_factor).expect("valid bench config");
    for x in 0..len {
        v.push_back(x as Item).expect("bench vector must grow");
    }
    v
}

/// Deterministic push-biased churn: `n` ops, roughly 60% pushes.
pub fn churn_ops(n: usize, seed: u64) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if rng.random_bool(0.6) {
                ChurnOp::Push(rng.random())
            } else {
                ChurnOp::Pop
            }
        })
        .collect()
}

/// Totals gathered while replaying a churn workload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChurnStats {
    /// Number of times the capacity went up.
    pub grows: u32,
    /// Number of times the capacity went down.
    pub shrinks: u32,
    /// Largest capacity seen.
    pub peak_capacity: u32,
}

/// Replay `ops` against `v`, counting capacity transitions.
pub fn run_churn(v: &mut DynamicArray, ops: &[ChurnOp]) -> ChurnStats {
    let mut stats = ChurnStats {
        peak_capacity: v.capacity(),
        ..ChurnStats::default()
    };
    for op in ops {
        let before = v.capacity();
        match *op {
            ChurnOp::Push(x) => {
                let _ = v.push_back(x);
            }
            ChurnOp::Pop => {
                let _ = v.pop_back();
            }
        }
        let after = v.capacity();
        if after > before {
            stats.grows += 1;
        } else if after < before {
            stats.shrinks += 1;
        }
        stats.peak_capacity = stats.peak_capacity.max(after);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_has_requested_len() {
        let v = filled(1, 0.5, 100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.back(), Ok(99));
    }

    #[test]
    fn churn_ops_are_deterministic() {
        assert_eq!(churn_ops(64, 3), churn_ops(64, 3));
        assert_ne!(churn_ops(64, 3), churn_ops(64, 4));
    }

    #[test]
    fn churn_on_fixed_capacity_never_resizes() {
        let mut v = DynamicArray::new(32, 0.0).unwrap();
        let stats = run_churn(&mut v, &churn_ops(500, 1));
        assert_eq!(stats.grows, 0);
        assert_eq!(stats.shrinks, 0);
        assert_eq!(stats.peak_capacity, 32);
    }

    #[test]
    fn churn_on_growable_vector_grows() {
        let mut v = DynamicArray::new(2, 0.25).unwrap();
        let stats = run_churn(&mut v, &churn_ops(2_000, 9));
        assert!(stats.grows > 0);
        assert!(stats.peak_capacity > 2);
    }
}
