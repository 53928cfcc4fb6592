use crate::config::ExamType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-question outcome recorded in an [`ExamResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReview {
    pub question_id: Uuid,
    pub prompt: String,
    /// Literal answer the user captured, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    /// Decoded correct answer; `None` when the session token could not be
    /// decoded (the question is then scored incorrect).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub is_correct: bool,
    /// Decoded explanation; `None` when unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Points earned for this question.
    pub points: u32,
}

/// Immutable summary produced exactly once when a session finishes.
///
/// Handed to the results store and returned to the presentation shell; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub result_id: Uuid,
    pub exam_type: ExamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Percentage score, rounded to the nearest integer.
    pub score: u32,
    /// Wall-clock seconds between session start and finish.
    pub time_spent_secs: u64,
    pub passed: bool,
    pub finished_at: DateTime<Utc>,
    /// Number of suspicious-activity records observed during the attempt.
    #[serde(default)]
    pub security_events: usize,
    pub details: Vec<QuestionReview>,
}

impl ExamResult {
    /// Percentage score for `correct` out of `total`, rounded to nearest.
    pub fn percentage(correct: usize, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((correct as f64 / total as f64) * 100.0).round() as u32
    }
}
