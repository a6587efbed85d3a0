use super::strategy::SelectionStrategy;

/// Always picks the same slot, clamped to the last entry of shorter tables.
pub struct FixedStrategy {
    index: usize,
}

impl FixedStrategy {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl SelectionStrategy for FixedStrategy {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.index.min(len - 1))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
