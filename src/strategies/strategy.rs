pub trait SelectionStrategy: Send + Sync {
    /// Index into a table of `len` entries, or `None` when the table is empty.
    fn pick_index(&self, len: usize) -> Option<usize>;

    // Short label for logs
    fn name(&self) -> &'static str;
}
