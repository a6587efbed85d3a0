use rand::Rng;

use super::strategy::SelectionStrategy;

/// Draws from the thread-local generator, which is seeded once per thread.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for RandomStrategy {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = rand::thread_rng();
        Some(rng.gen_range(0..len))
    }

    fn name(&self) -> &'static str {
        "thread_rng"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_pick() {
        assert_eq!(RandomStrategy::new().pick_index(0), None);
    }

    #[test]
    fn index_stays_in_range() {
        let strategy = RandomStrategy::new();
        for len in 1..50 {
            for _ in 0..20 {
                let idx = strategy.pick_index(len).unwrap();
                assert!(idx < len);
            }
        }
    }
}
