//! Benchmark workloads for the stave container.
//!
//! Provides deterministic element sequences shared by the criterion benches
//! so that `stave`, `std::vec::Vec`, and `smallvec::SmallVec` all process
//! identical inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stave::Stave;

/// Number of elements in the standard append workload.
pub const APPEND_LEN: usize = 10_000;

/// Deterministic i64 workload: a fixed linear-congruential walk.
///
/// No RNG crate needed — identical values on every run and every platform.
pub fn workload(len: usize) -> Vec<i64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 16) as i64
        })
        .collect()
}

/// Build a container pre-filled with the first `len` workload elements.
pub fn filled_stave(len: usize) -> Stave<i64> {
    workload(len).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(workload(100), workload(100));
        assert_eq!(workload(100).len(), 100);
    }

    #[test]
    fn filled_stave_matches_workload() {
        let seq = filled_stave(32);
        assert_eq!(seq.as_slice(), workload(32).as_slice());
    }
}
