//! Download each candidate and scan it line by line.

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::progress::{ProgressUpdate, TaskStage};

use super::engine::SearchContext;
use super::pool::run_bounded;
use super::types::{MatchLocation, PassOutcome, SearchItem};

/// Find every occurrence of `needle` in `content`.
///
/// Lines are split on `\n` or `\r\n`. After a hit the scan resumes at the
/// end of the match, so overlapping occurrences are not reported ("aa" is
/// found once in "aaa"). Columns count characters of the (lowercased,
/// unless `case_sensitive`) line; `contents` holds the line as downloaded.
pub fn locate_matches(content: &str, needle: &str, case_sensitive: bool) -> Vec<MatchLocation> {
    if needle.is_empty() {
        return Vec::new();
    }
    let needle: Cow<str> = if case_sensitive {
        Cow::Borrowed(needle)
    } else {
        Cow::Owned(needle.to_lowercase())
    };

    let mut matches = Vec::new();
    for (line, raw) in content.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let haystack: Cow<str> = if case_sensitive {
            Cow::Borrowed(raw)
        } else {
            Cow::Owned(raw.to_lowercase())
        };

        let mut from = 0;
        while let Some(offset) = haystack[from..].find(needle.as_ref()) {
            let start = from + offset;
            matches.push(MatchLocation {
                line,
                column: haystack[..start].chars().count(),
                contents: raw.to_string(),
            });
            from = start + needle.len();
        }
    }
    matches
}

/// Download every item and keep the ones containing the search string.
pub(crate) async fn search_local(ctx: &SearchContext<'_>, items: Vec<SearchItem>) -> PassOutcome {
    let total = items.len();
    let completed = AtomicUsize::new(0);
    let outcome = Mutex::new(PassOutcome::default());
    let (outcome_ref, completed_ref) = (&outcome, &completed);

    run_bounded(items, ctx.options.concurrency_limit(), move |mut item| async move {
        let target = item.target();

        if ctx.deadline.is_expired() {
            outcome_ref.lock().await.failures.push(target);
        } else {
            match ctx.api.get_content(&target, &ctx.options.get_options).await {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    let found = locate_matches(&content, ctx.needle, ctx.options.case_sensitive);
                    if !found.is_empty() {
                        debug!(%target, matches = found.len(), "found matches");
                        item.match_list = found;
                        outcome_ref.lock().await.items.push(item);
                    }
                }
                Err(e) => {
                    warn!(%target, error = %e, "failed to download for search");
                    outcome_ref.lock().await.failures.push(target);
                }
            }
        }

        let done = completed_ref.fetch_add(1, Ordering::SeqCst) + 1;
        ctx.options.report(local_progress(done, total, ctx.options.mainframe_search));
    })
    .await;

    outcome.into_inner()
}

/// The local pass is the second half of the bar when the mainframe pass ran.
fn local_progress(done: usize, total: usize, after_mainframe: bool) -> ProgressUpdate {
    let percent = if after_mainframe {
        50 + done * 50 / total
    } else {
        done * 100 / total
    };
    ProgressUpdate::new(
        TaskStage::InProgress,
        percent as u8,
        format!("Performing Deep Search: {done} of {total} entries checked"),
    )
}
