//! Deterministic RNG wrapper for the sampler.
//!
//! Wraps `rand::rngs::SmallRng` behind a small newtype so that callers can
//! fix a seed (for reproducible planning runs, P8) without reaching into
//! `rand` themselves. Unseeded construction falls back to entropy, matching
//! the teacher's ambient `rand::thread_rng()` default.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The planner's RNG source. Every stateful, biased component (currently
/// only [`crate::sampling::GridSampler`]) is seeded from one of these.
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    /// Seed deterministically from a fixed `u64`.
    pub fn from_seed(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy; runs using this are not reproducible.
    pub fn from_entropy() -> Self {
        PlannerRng(SmallRng::from_entropy())
    }

    /// Construct from an optional seed, following §6's "RNG seed (optional)"
    /// tunable parameter.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
