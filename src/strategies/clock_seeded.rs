use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::strategy::SelectionStrategy;

/// Builds a fresh generator on every call, seeded from the wall clock in
/// nanoseconds. Two calls inside the same clock tick get the same seed and
/// therefore the same index.
pub struct ClockSeededStrategy;

impl ClockSeededStrategy {
    pub fn new() -> Self {
        Self
    }

    fn seed() -> u64 {
        // A clock before the epoch still gives a usable (if fixed) seed.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

impl Default for ClockSeededStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for ClockSeededStrategy {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(Self::seed());
        Some(rng.gen_range(0..len))
    }

    fn name(&self) -> &'static str {
        "clock"
    }
}
