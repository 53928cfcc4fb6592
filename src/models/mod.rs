mod result;

pub use result::{ExamResult, QuestionReview};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer modality of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Numeric,
}

/// Informational difficulty label carried by every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// A fully instantiated practice question.
///
/// Invariants upheld by the generator: for `MultipleChoice` questions
/// `options` holds exactly four distinct entries and `correct_answer`
/// appears among them verbatim; for `Numeric` questions `options` is `None`
/// and `correct_answer` is a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    /// Problem text; may embed LaTeX for mathematical typesetting.
    pub prompt: String,
    /// Present only for multiple-choice questions. Order is randomized at
    /// generation time and carries no meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
    pub points: u32,
}

/// A question whose correct answer and explanation have been replaced by
/// session-key-bound tokens. This is what the presentation shell sees while
/// an exam is running; the plaintext never reaches serialized session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscatedQuestion {
    pub id: Uuid,
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Opaque token; decodable only with the session key it was bound to.
    pub correct_answer: String,
    /// Opaque token, same encoding as `correct_answer`.
    pub explanation: String,
    pub points: u32,
}

/// A captured answer for one question of an active session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: Uuid,
    /// Index into `options` for multiple-choice answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<usize>,
    /// Literal answer value (the chosen option text, or the typed number).
    pub value: String,
    pub captured_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn choice(question_id: Uuid, option_index: usize, value: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_option: Some(option_index),
            value: value.into(),
            captured_at: Utc::now(),
        }
    }

    pub fn numeric(question_id: Uuid, value: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_option: None,
            value: value.into(),
            captured_at: Utc::now(),
        }
    }
}
