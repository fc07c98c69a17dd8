//! Search control: the node budget and depth cap.

use crate::error::SearchError;
use crate::search::negamax::MAX_DEPTH;

/// Limits for one iterative-deepening search.
///
/// The budget is only consulted between depths, so a single deep
/// iteration may overshoot `max_nodes` before the search stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBudget {
    max_nodes: u64,
    max_depth: u8,
}

impl NodeBudget {
    /// Budget of `max_nodes` nodes with no depth cap beyond [`MAX_DEPTH`].
    pub fn new(max_nodes: u64) -> Result<Self, SearchError> {
        if max_nodes == 0 {
            return Err(SearchError::EmptyBudget);
        }
        Ok(Self {
            max_nodes,
            max_depth: MAX_DEPTH,
        })
    }

    /// Cap iterative deepening at `depth` plies.
    pub fn with_max_depth(self, depth: u32) -> Result<Self, SearchError> {
        match u8::try_from(depth) {
            Ok(d) if (1..=MAX_DEPTH).contains(&d) => Ok(Self { max_depth: d, ..self }),
            _ => Err(SearchError::DepthOutOfRange {
                depth,
                max: MAX_DEPTH,
            }),
        }
    }

    #[inline]
    pub fn max_nodes(&self) -> u64 {
        self.max_nodes
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Whether `nodes` visited so far use up the budget.
    #[inline]
    pub fn exhausted(&self, nodes: u64) -> bool {
        nodes >= self.max_nodes
    }
}
