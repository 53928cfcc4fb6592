//! Persistence layer.
//!
//! The session layer talks to storage only through the two traits below, so
//! tests substitute in-memory fakes and a future backend swap stays local to
//! this module. The shipped implementation is [`ExamStore`], a JSON-file
//! store under a single root directory.

mod progress;
mod statistics;
mod store;

pub use progress::{MacroTopicSummary, TopicProgress};
pub use statistics::{ExamStatistics, TypeBreakdown};
pub use store::ExamStore;

use crate::config::ExamType;
use crate::models::ExamResult;
use crate::security::ActivityRecord;
use anyhow::Result;
use chrono::NaiveDate;

/// Result persistence as seen by the session layer. Failures are reported,
/// not panicked; the caller decides whether to swallow them.
pub trait ResultsStore {
    fn save_exam_result(&mut self, result: &ExamResult) -> Result<()>;
    /// Folds a finished micro-topic attempt into the per-topic progress
    /// records. No-op for results without a topic.
    fn update_topic_progress(&mut self, result: &ExamResult) -> Result<()>;
    /// Persists suspicious-activity records observed during an attempt.
    fn append_security_events(&mut self, records: &[ActivityRecord]) -> Result<()>;
}

/// Daily attempt counting for the throttle, keyed by calendar date and exam
/// type. A missing record reads as zero.
pub trait AttemptStore {
    fn count(&self, date: NaiveDate, exam_type: ExamType) -> Result<u32>;
    fn increment(&mut self, date: NaiveDate, exam_type: ExamType) -> Result<()>;
}
