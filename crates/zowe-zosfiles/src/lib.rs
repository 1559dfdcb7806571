//! z/OS data set SDK.
//!
//! Provides:
//! - The `ZosFilesApi` contract for listing data sets and members and
//!   downloading their content
//! - A reqwest-backed z/OSMF REST implementation of that contract
//! - A concurrent search engine that scans many data sets and PDS
//!   members for a string, with bounded concurrency, optional
//!   server-side pre-filtering and a soft deadline
//! - Progress reporting for long-running operations

pub mod progress;
pub mod search;
pub mod types;
pub mod zosmf;

use async_trait::async_trait;

pub use progress::{ProgressRecorder, ProgressSink, ProgressUpdate, TaskStage};
pub use search::{MatchLocation, Search, SearchError, SearchItem, SearchOptions, SearchResponse};
pub use types::{DataSetEntry, DataSetOrganization, GetOptions, ListOptions, MemberEntry};
pub use zosmf::{ZosmfClient, ZosmfConfig};

/// Remote data set operations the search engine is built on.
#[async_trait]
pub trait ZosFilesApi: Send + Sync {
    /// List the data sets whose names match `pattern` (e.g. `HLQ.**`).
    async fn list_data_sets(
        &self,
        pattern: &str,
        options: &ListOptions,
    ) -> Result<Vec<DataSetEntry>, ZosFilesError>;

    /// List the members of a partitioned data set.
    async fn list_members(
        &self,
        dsn: &str,
        options: &ListOptions,
    ) -> Result<Vec<MemberEntry>, ZosFilesError>;

    /// Download the content of `DSN` or `DSN(MEMBER)`.
    ///
    /// When `options.query_params` is set, z/OSMF applies it as a filter and
    /// an empty body means nothing matched.
    async fn get_content(&self, target: &str, options: &GetOptions)
        -> Result<Vec<u8>, ZosFilesError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ZosFilesError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ZosFilesError> for zowe_common::ZoweError {
    fn from(err: ZosFilesError) -> Self {
        zowe_common::ZoweError::Zosmf(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ZosFilesError::Http {
            status: 404,
            message: "data set not found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: data set not found");

        let err = ZosFilesError::Network("connection reset".into());
        assert_eq!(err.to_string(), "Network error: connection reset");
    }

    #[test]
    fn converts_into_zowe_error() {
        let err: zowe_common::ZoweError = ZosFilesError::Parse("bad json".into()).into();
        assert!(matches!(err, zowe_common::ZoweError::Zosmf(_)));
        assert!(err.to_string().contains("bad json"));
    }
}
