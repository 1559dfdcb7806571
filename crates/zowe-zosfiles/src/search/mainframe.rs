//! Server-side pre-filter: ask z/OSMF whether each candidate contains the
//! search string before downloading all of it.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::progress::{ProgressUpdate, TaskStage};
use crate::GetOptions;

use super::engine::SearchContext;
use super::pool::run_bounded;
use super::types::{PassOutcome, SearchItem};

/// Query asking z/OSMF for at most one matching record.
pub(crate) fn prefilter_query(needle: &str, case_sensitive: bool) -> String {
    let mut query = format!(
        "?search={}&maxreturnsize=1",
        urlencoding::encode(needle)
    );
    // z/OSMF searches case-insensitively unless told otherwise.
    if case_sensitive {
        query.push_str("&insensitive=false");
    }
    query
}

/// Keep only the items z/OSMF reports a match for.
pub(crate) async fn search_on_mainframe(
    ctx: &SearchContext<'_>,
    items: Vec<SearchItem>,
) -> PassOutcome {
    let total = items.len();
    let get_options = GetOptions {
        query_params: Some(prefilter_query(ctx.needle, ctx.options.case_sensitive)),
        ..ctx.options.get_options.clone()
    };
    let completed = AtomicUsize::new(0);
    let outcome = Mutex::new(PassOutcome::default());
    let (outcome_ref, completed_ref, get_options) = (&outcome, &completed, &get_options);

    run_bounded(items, ctx.options.concurrency_limit(), move |item| async move {
        let target = item.target();

        if ctx.deadline.is_expired() {
            outcome_ref.lock().await.failures.push(target);
        } else {
            match ctx.api.get_content(&target, get_options).await {
                Ok(body) if body.is_empty() => {
                    debug!(%target, "no match on mainframe");
                }
                Ok(_) => outcome_ref.lock().await.items.push(item),
                Err(e) => {
                    warn!(%target, error = %e, "mainframe search failed");
                    outcome_ref.lock().await.failures.push(target);
                }
            }
        }

        let done = completed_ref.fetch_add(1, Ordering::SeqCst) + 1;
        ctx.options.report(mainframe_progress(done, total));
    })
    .await;

    outcome.into_inner()
}

/// The mainframe pass fills the first half of the bar.
fn mainframe_progress(done: usize, total: usize) -> ProgressUpdate {
    ProgressUpdate::new(
        TaskStage::InProgress,
        (done * 50 / total) as u8,
        format!("Initial Mainframe Search: {done} of {total} entries checked"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_encodes_search_string() {
        assert_eq!(
            prefilter_query("pgm=iefbr14", false),
            "?search=pgm%3Diefbr14&maxreturnsize=1"
        );
    }

    #[test]
    fn case_sensitive_query_disables_insensitive() {
        assert_eq!(
            prefilter_query("ABC", true),
            "?search=ABC&maxreturnsize=1&insensitive=false"
        );
    }

    #[test]
    fn progress_covers_first_half() {
        assert_eq!(mainframe_progress(1, 4).percent_complete, 12);
        assert_eq!(mainframe_progress(4, 4).percent_complete, 50);
        assert_eq!(
            mainframe_progress(2, 4).status_message,
            "Initial Mainframe Search: 2 of 4 entries checked"
        );
    }
}
