//! Node-budgeted search for mailfish.

mod error;
pub mod search;

pub use error::SearchError;
pub use search::control::NodeBudget;
pub use search::negamax::{MATE_LOWER, MATE_UPPER, MAX_DEPTH};
pub use search::{SearchResult, Searcher};
