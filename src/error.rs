use crate::config::ExamType;
use thiserror::Error;

/// Errors surfaced by the exam session state machine and its collaborators.
///
/// None of these should abort an active attempt: `AttemptLimitExceeded` and
/// `AnswerRequired` are user-facing prompts, storage causes are logged and
/// swallowed at the call site, and generation/decoding failures are recovered
/// internally (fallback questions, default-incorrect scoring) before they can
/// reach this type.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The daily attempt cap for this exam type has been reached. Not
    /// retryable until the next calendar day.
    #[error("daily attempt limit reached for {exam_type} exams")]
    AttemptLimitExceeded { exam_type: ExamType },

    /// Forward navigation was requested while the current question has no
    /// recorded answer. Fully recoverable by answering.
    #[error("question {index} must be answered before moving on")]
    AnswerRequired { index: usize },

    /// An operation was invoked on a session that already finished or was
    /// abandoned.
    #[error("exam session is no longer active")]
    SessionInactive,

    /// An answer was recorded against an index outside the question list.
    #[error("question index {index} out of range (session has {total} questions)")]
    IndexOutOfRange { index: usize, total: usize },

    /// A storage collaborator failed in a context where the failure cannot
    /// be swallowed (e.g. the attempt counter could not be read at start).
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
