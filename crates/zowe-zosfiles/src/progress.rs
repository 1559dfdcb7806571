//! Progress reporting for long-running operations.

use std::sync::Mutex;

use serde::Serialize;

/// Lifecycle stage of a reported task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStage {
    InProgress,
    Complete,
    Failed,
}

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub stage: TaskStage,
    /// 0..=100
    pub percent_complete: u8,
    pub status_message: String,
}

impl ProgressUpdate {
    pub fn new(stage: TaskStage, percent_complete: u8, status_message: impl Into<String>) -> Self {
        Self {
            stage,
            percent_complete: percent_complete.min(100),
            status_message: status_message.into(),
        }
    }
}

/// Receives progress updates. Called from inside running work, so
/// implementations must be cheap and must not block.
pub trait ProgressSink: Send + Sync {
    fn update(&self, update: ProgressUpdate);
}

/// A sink that keeps every update it receives.
#[derive(Debug, Default)]
pub struct ProgressRecorder {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates received so far, oldest first.
    pub fn updates(&self) -> Vec<ProgressUpdate> {
        match self.updates.lock() {
            Ok(updates) => updates.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent update.
    pub fn last(&self) -> Option<ProgressUpdate> {
        self.updates().pop()
    }
}

impl ProgressSink for ProgressRecorder {
    fn update(&self, update: ProgressUpdate) {
        match self.updates.lock() {
            Ok(mut updates) => updates.push(update),
            Err(poisoned) => poisoned.into_inner().push(update),
        }
    }
}
