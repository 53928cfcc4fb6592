pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod security;
pub mod session;
pub mod storage;

// Re-export commonly used types for convenience.
pub use config::{AppConfig, ExamType};
pub use error::ExamError;
pub use generator::QuestionGenerator;
pub use models::{ExamResult, Question};
pub use session::{ExamRunner, ExamSession};
pub use storage::ExamStore;
