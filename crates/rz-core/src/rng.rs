//! Deterministic RNG for the Random EDU placement policy.
//!
//! §5 notes that the RNG seed is consulted only by the Random policy; every
//! other stage is deterministic given its inputs. One seeded `SmallRng` per
//! job is therefore enough — there is no per-cell or per-agent population to
//! decorrelate the way `rust_dt`'s per-agent RNG mixing does, but the same
//! golden-ratio mixing constant is kept for deriving a per-RL child stream so
//! that drawing EDUs for RL `i` never perturbs the draw sequence for RL `j`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG driving the Random EDU policy.
pub struct ClassifierRng(SmallRng);

impl ClassifierRng {
    pub fn new(seed: u64) -> Self {
        ClassifierRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream for risk level `rl`, so that the
    /// number of draws spent on one RL never shifts the sequence seen by
    /// another.
    pub fn child_for_rl(&mut self, rl: u32) -> ClassifierRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ (rl as u64).wrapping_mul(MIXING_CONSTANT);
        ClassifierRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
