//! Search configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::progress::{ProgressSink, ProgressUpdate};
use crate::{GetOptions, ListOptions};

use super::SearchError;

/// Options for one search.
#[derive(Clone)]
pub struct SearchOptions {
    /// Data set name pattern, e.g. `IBMUSER.**`.
    pub pattern: String,
    pub search_string: String,
    /// Matching is case-insensitive unless set.
    pub case_sensitive: bool,
    /// Requests in flight per pass; `None` or `Some(0)` means unbounded.
    pub max_concurrent_requests: Option<usize>,
    /// Whole seconds after which no new work is started. Zero means none.
    pub timeout_secs: Option<u64>,
    /// Ask z/OSMF to pre-filter candidates before downloading them.
    pub mainframe_search: bool,
    pub progress: Option<Arc<dyn ProgressSink>>,
    pub list_options: ListOptions,
    pub get_options: GetOptions,
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("pattern", &self.pattern)
            .field("search_string", &self.search_string)
            .field("case_sensitive", &self.case_sensitive)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("timeout_secs", &self.timeout_secs)
            .field("mainframe_search", &self.mainframe_search)
            .field("progress", &self.progress.is_some())
            .field("list_options", &self.list_options)
            .field("get_options", &self.get_options)
            .finish()
    }
}

impl SearchOptions {
    pub fn new(pattern: impl Into<String>, search_string: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            search_string: search_string.into(),
            case_sensitive: false,
            max_concurrent_requests: None,
            timeout_secs: None,
            mainframe_search: false,
            progress: None,
            list_options: ListOptions::default(),
            get_options: GetOptions::default(),
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = Some(max);
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_mainframe_search(mut self, enabled: bool) -> Self {
        self.mainframe_search = enabled;
        self
    }

    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn with_list_options(mut self, options: ListOptions) -> Self {
        self.list_options = options;
        self
    }

    pub fn with_get_options(mut self, options: GetOptions) -> Self {
        self.get_options = options;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        if self.pattern.trim().is_empty() {
            return Err(SearchError::InvalidOptions(
                "data set name pattern must be set".into(),
            ));
        }
        if self.search_string.is_empty() {
            return Err(SearchError::InvalidOptions(
                "search string must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The string actually searched for: lowercased unless case-sensitive.
    pub(crate) fn normalized_search_string(&self) -> String {
        if self.case_sensitive {
            self.search_string.clone()
        } else {
            self.search_string.to_lowercase()
        }
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }

    pub(crate) fn concurrency_limit(&self) -> Option<usize> {
        self.max_concurrent_requests.filter(|&max| max > 0)
    }

    pub(crate) fn report(&self, update: ProgressUpdate) {
        if let Some(sink) = &self.progress {
            sink.update(update);
        }
    }
}
