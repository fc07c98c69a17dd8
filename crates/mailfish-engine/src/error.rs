//! Error types for search configuration.

/// Errors raised when building a search budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A search needs at least one node to visit.
    #[error("node budget must be positive")]
    EmptyBudget,
    /// Depth limits must lie in `1..=MAX_DEPTH`.
    #[error("depth limit {depth} is outside 1..={max}")]
    DepthOutOfRange {
        /// The requested depth.
        depth: u32,
        /// The largest supported depth.
        max: u8,
    },
}
