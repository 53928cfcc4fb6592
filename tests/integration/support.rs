use exambase::config::{AppConfig, ExamType};
use exambase::models::{AnswerRecord, ExamResult, QuestionKind};
use exambase::session::{AdvanceOutcome, ExamRunner, ExamSession};
use exambase::storage::ExamStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Per-test workspace. Every store opened through it lives under a private
/// temp directory, so tests never race each other or touch real user data.
pub struct ExamHarness {
    workspace: TempDir,
}

impl ExamHarness {
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("failed to create temp workspace"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.workspace.path().join("data")
    }

    pub fn open_store(&self) -> ExamStore {
        ExamStore::open(self.data_dir()).expect("failed to open exam store")
    }

    /// Runner with default config and a deterministic question sequence.
    pub fn runner(&self, seed: u64) -> ExamRunner<ExamStore> {
        self.runner_with(AppConfig::default(), seed)
    }

    pub fn runner_with(&self, config: AppConfig, seed: u64) -> ExamRunner<ExamStore> {
        ExamRunner::with_seeded_generator(config, self.open_store(), seed)
    }
}

/// An answer with no knowledge of the correct one: the first option for
/// multiple choice, zero for numeric input.
pub fn arbitrary_answer(session: &ExamSession, index: usize) -> AnswerRecord {
    let question = &session.questions()[index];
    match question.kind {
        QuestionKind::MultipleChoice => {
            let options = question.options.as_ref().expect("options present");
            AnswerRecord::choice(question.id, 0, options[0].clone())
        }
        QuestionKind::Numeric => AnswerRecord::numeric(question.id, "0"),
    }
}

/// Walks an exam front to back with arbitrary answers and returns the result
/// produced by advancing past the last question.
pub fn complete_exam(
    runner: &mut ExamRunner<ExamStore>,
    exam_type: ExamType,
    topic: Option<&str>,
) -> ExamResult {
    let mut session = runner.start(exam_type, topic).expect("start exam");
    loop {
        let index = session.current_index();
        let record = arbitrary_answer(&session, index);
        runner
            .record_answer(&mut session, index, record)
            .expect("record answer");
        match runner.advance(&mut session).expect("advance") {
            AdvanceOutcome::Moved(_) => continue,
            AdvanceOutcome::Finished(result) => return result,
        }
    }
}
