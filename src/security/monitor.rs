//! Suspicious-activity monitor.
//!
//! Pure bookkeeping: the presentation shell reports activity signals (tab
//! switches, focus loss, blocked shortcuts) and the monitor keeps a bounded
//! in-memory log while exam mode is active. Persistence of the log is the
//! runner's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The in-memory log keeps only the most recent entries.
const MAX_LOG_ENTRIES: usize = 100;

/// Category of a reported activity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TabSwitch,
    FocusLoss,
    BlockedShortcut,
    ContextMenu,
    ClipboardAccess,
}

/// One recorded suspicious-activity event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub kind: ActivityKind,
    pub detail: String,
    pub at: DateTime<Utc>,
}

/// Bounded activity log, active only while an exam is running.
#[derive(Debug, Default)]
pub struct SecurityMonitor {
    exam_mode: bool,
    records: Vec<ActivityRecord>,
}

impl SecurityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the monitor for a fresh attempt, clearing any previous log.
    pub fn enter_exam_mode(&mut self) {
        self.exam_mode = true;
        self.records.clear();
    }

    pub fn exit_exam_mode(&mut self) {
        self.exam_mode = false;
    }

    pub fn exam_mode(&self) -> bool {
        self.exam_mode
    }

    /// Records a signal. Signals outside exam mode are ignored; the log is
    /// capped by dropping the oldest entry.
    pub fn record(&mut self, kind: ActivityKind, detail: impl Into<String>) {
        if !self.exam_mode {
            return;
        }
        if self.records.len() == MAX_LOG_ENTRIES {
            self.records.remove(0);
        }
        self.records.push(ActivityRecord {
            kind,
            detail: detail.into(),
            at: Utc::now(),
        });
    }

    /// Number of events recorded for the current attempt.
    pub fn event_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Hands the accumulated log over for persistence and clears it.
    pub fn drain_records(&mut self) -> Vec<ActivityRecord> {
        std::mem::take(&mut self.records)
    }
}
