//! Sources of round targets.
//!
//! Every match owns its own source so that draws in one match never perturb another,
//! and tests can script exact targets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::game::{TARGET_MIN, TARGET_MAX};

/// Supplies the hidden number for each round.
pub trait TargetSource {
    /// Draw the target for the next round.
    fn next_target(&mut self) -> i64;
}

/// Uniform draws over `[TARGET_MIN, TARGET_MAX]`.
pub struct UniformTargets {
    rng: StdRng,
}

impl UniformTargets {
    /// Seed from the operating system.
    pub fn from_os_rng() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Deterministic stream, reproducible across runs.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl TargetSource for UniformTargets {
    fn next_target(&mut self) -> i64 {
        self.rng.random_range(TARGET_MIN..=TARGET_MAX)
    }
}

/// Replays a fixed list of targets, then keeps returning the last one.
#[cfg(test)]
pub struct ScriptedTargets {
    upcoming: std::collections::VecDeque<i64>,
    last: i64,
}

#[cfg(test)]
impl ScriptedTargets {
    pub fn new(targets: impl IntoIterator<Item = i64>) -> Self {
        Self {
            upcoming: targets.into_iter().collect(),
            last: TARGET_MIN,
        }
    }
}

#[cfg(test)]
impl TargetSource for ScriptedTargets {
    fn next_target(&mut self) -> i64 {
        if let Some(next) = self.upcoming.pop_front() {
            self.last = next;
        }
        self.last
    }
}
