//! Bounded-concurrency dispatcher.

use std::future::Future;

use futures_util::stream::{self, StreamExt};

/// Run `work` once for every item with at most `limit` invocations in
/// flight, returning when all of them have finished.
///
/// `None` or `Some(0)` runs every item at once. Items are started in input
/// order as slots free up; completion order is unspecified. Work functions
/// report their own results, so one failing item never stops its siblings.
///
/// All work is polled from the calling task: nothing runs in parallel, it
/// only interleaves at await points.
pub async fn run_bounded<I, F, Fut>(items: I, limit: Option<usize>, work: F)
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = ()>,
{
    let limit = limit.filter(|&k| k > 0);
    stream::iter(items).for_each_concurrent(limit, work).await;
}
