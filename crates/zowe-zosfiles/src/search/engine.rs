//! Search entry point: enumerate, run the passes, report.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use zowe_common::new_correlation_id;

use crate::progress::{ProgressUpdate, TaskStage};
use crate::ZosFilesApi;

use super::deadline::Deadline;
use super::options::SearchOptions;
use super::types::SearchResponse;
use super::{enumerate, local, mainframe, report, SearchError};

/// Everything a unit of work needs, borrowed for the duration of one search.
pub(crate) struct SearchContext<'a> {
    pub api: &'a dyn ZosFilesApi,
    pub options: &'a SearchOptions,
    /// Search string after case normalization.
    pub needle: &'a str,
    pub deadline: &'a Deadline,
}

/// Searches data sets and PDS members for a string.
///
/// Every call to [`Search::search`] gets its own deadline, so one instance
/// can serve several searches at the same time.
#[derive(Clone)]
pub struct Search {
    api: Arc<dyn ZosFilesApi>,
}

impl Search {
    pub fn new(api: Arc<dyn ZosFilesApi>) -> Self {
        Self { api }
    }

    /// Run a search.
    ///
    /// Only a failure to list the pattern is returned as an error. Every
    /// other failure, including work skipped after the timeout, is listed
    /// in the response.
    pub async fn search(&self, options: &SearchOptions) -> Result<SearchResponse, SearchError> {
        options.validate()?;
        let span = info_span!(
            "search",
            id = %new_correlation_id(),
            pattern = %options.pattern
        );
        self.run(options).instrument(span).await
    }

    async fn run(&self, options: &SearchOptions) -> Result<SearchResponse, SearchError> {
        let mut deadline = Deadline::start(options.timeout());
        options.report(ProgressUpdate::new(
            TaskStage::InProgress,
            0,
            "Getting search list...",
        ));

        let needle = options.normalized_search_string();
        let ctx = SearchContext {
            api: self.api.as_ref(),
            options,
            needle: &needle,
            deadline: &deadline,
        };

        let candidates = match enumerate::collect_candidates(ctx.api, options).await {
            Ok(candidates) => candidates,
            Err(e) => {
                options.report(ProgressUpdate::new(TaskStage::Failed, 100, e.to_string()));
                return Err(e);
            }
        };
        let mut items = candidates.items;
        let mut failures = candidates.failures;
        info!(
            candidates = items.len(),
            failures = failures.len(),
            "search list built"
        );

        if options.mainframe_search {
            let pass = mainframe::search_on_mainframe(&ctx, items).await;
            info!(survivors = pass.items.len(), "mainframe search done");
            items = pass.items;
            failures.extend(pass.failures);
        }

        let pass = local::search_local(&ctx, items).await;
        failures.extend(pass.failures);

        deadline.disarm();
        let timed_out = deadline.is_expired();
        if timed_out {
            options.report(ProgressUpdate::new(
                TaskStage::Failed,
                100,
                "Operation timed out",
            ));
        } else {
            options.report(ProgressUpdate::new(
                TaskStage::Complete,
                100,
                "Search complete",
            ));
        }

        let response = report::build_response(&needle, pass.items, failures, timed_out);
        info!(
            matches = response.matches.len(),
            failures = response.failures.len(),
            timed_out,
            "search finished"
        );
        Ok(response)
    }
}
