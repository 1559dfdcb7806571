//! Concurrent multi-target data set search.
//!
//! A search enumerates every sequential data set and PDS member matching a
//! pattern, optionally asks z/OSMF to discard candidates that cannot match,
//! downloads the survivors and scans them line by line. Both passes run
//! through the same bounded dispatcher and stop starting new work once the
//! deadline expires; anything not searched is reported as a failure.
//!
//! ```text
//! pattern ─▶ enumerate ─▶ [mainframe pass] ─▶ local pass ─▶ report
//!                 │               │               │
//!                 └───────────── failures ────────┘
//! ```

mod deadline;
mod engine;
mod enumerate;
mod local;
mod mainframe;
mod options;
mod pool;
mod report;
mod types;

#[cfg(test)]
mod mock;

pub use deadline::Deadline;
pub use engine::Search;
pub use local::locate_matches;
pub use options::SearchOptions;
pub use pool::run_bounded;
pub use report::{build_response, sort_matches};
pub use types::{MatchLocation, SearchItem, SearchResponse};

use crate::ZosFilesError;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),
    /// Listing the data sets that match the pattern failed; nothing was searched.
    #[error("Failed to get list of data sets to search")]
    ListFailed(#[source] ZosFilesError),
}

impl From<SearchError> for zowe_common::ZoweError {
    fn from(err: SearchError) -> Self {
        let message = match std::error::Error::source(&err) {
            Some(cause) => format!("{err}: {cause}"),
            None => err.to_string(),
        };
        zowe_common::ZoweError::Search(message)
    }
}
