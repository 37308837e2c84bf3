//! Injectable random source for traffic jitter and weather selection.
//!
//! All randomness in the planner flows through one [`PlannerRng`] owned by
//! the caller.  Seed it with [`PlannerRng::new`] for reproducible runs
//! (tests, replays); use [`PlannerRng::from_entropy`] for live sessions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Planner-level RNG.
///
/// Single-threaded by construction: the planner holds it by value and lends
/// `&mut` borrows to the models that draw from it.
#[derive(Debug, Clone)]
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    /// Deterministic RNG: the same seed always yields the same sequence.
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        PlannerRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
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
}
