//! Soft, cooperative deadline shared by every unit of work in one search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A one-shot timer that flips an "expired" flag.
///
/// Expiry never cancels anything in flight. Work checks `is_expired`
/// before starting and gives up if it is set. The timer is disarmed when
/// the deadline is dropped, so it can never fire after the search returns.
#[derive(Debug)]
pub struct Deadline {
    expired: Arc<AtomicBool>,
    timer: Option<JoinHandle<()>>,
}

impl Deadline {
    /// A deadline that never expires on its own.
    pub fn unbounded() -> Self {
        Self {
            expired: Arc::new(AtomicBool::new(false)),
            timer: None,
        }
    }

    /// Start the clock now. `None` or a zero duration means no timeout.
    ///
    /// Must be called from within a tokio runtime when a timeout is given.
    pub fn start(timeout: Option<Duration>) -> Self {
        let mut deadline = Self::unbounded();
        if let Some(timeout) = timeout.filter(|t| !t.is_zero()) {
            let expired = Arc::clone(&deadline.expired);
            deadline.timer = Some(tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                expired.store(true, Ordering::SeqCst);
                debug!(?timeout, "search deadline expired");
            }));
        }
        deadline
    }

    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }

    /// Mark the deadline as expired immediately.
    pub fn expire(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    /// Stop the timer. The expired flag keeps whatever value it has.
    pub fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_timeout() {
        let deadline = Deadline::start(Some(Duration::from_secs(2)));
        assert!(!deadline.is_expired());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!deadline.is_expired());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(deadline.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn no_timeout_never_fires() {
        let deadline = Deadline::start(None);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(!deadline.is_expired());

        let deadline = Deadline::start(Some(Duration::ZERO));
        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(!deadline.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_timer_does_not_fire() {
        let mut deadline = Deadline::start(Some(Duration::from_secs(1)));
        deadline.disarm();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!deadline.is_expired());
    }

    #[tokio::test]
    async fn expire_sets_flag_once_and_it_stays_set() {
        let mut deadline = Deadline::unbounded();
        deadline.expire();
        deadline.disarm();
        assert!(deadline.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn each_deadline_has_its_own_flag() {
        let first = Deadline::start(Some(Duration::from_secs(1)));
        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = Deadline::start(Some(Duration::from_secs(1)));
        assert!(first.is_expired());
        assert!(!second.is_expired());
    }
}
