use serde::Serialize;

/// Work done by one sort invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Element comparisons: one per pair plus every binary-search probe.
    pub comparisons: u64,
    /// Minors and leftovers inserted into a chain.
    pub insertions: u64,
    /// Recursion levels entered, counting the top-level call.
    pub depth: usize,
}

impl SortStats {
    pub(crate) fn enter_level(&mut self, depth: usize) {
        self.depth = self.depth.max(depth);
    }
}
