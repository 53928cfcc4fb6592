//! Exam session state machine.
//!
//! [`ExamRunner`] owns the long-lived collaborators (generator, throttle,
//! activity monitor, store) and exposes the full operation surface. An
//! [`ExamSession`] is a plain owned value holding one attempt's state; the
//! presentation shell reads it through accessors and mutates it only by
//! handing it back to the runner. There is no global session and no interior
//! mutability anywhere in this module.

use crate::catalog::DEFAULT_TOPIC;
use crate::config::{AppConfig, ExamType};
use crate::error::ExamError;
use crate::generator::QuestionGenerator;
use crate::models::{AnswerRecord, ExamResult, ObfuscatedQuestion, QuestionKind, QuestionReview};
use crate::security::{
    obfuscator, ActivityKind, AttemptThrottle, SecurityMonitor, SessionKey, ThrottleDecision,
};
use crate::storage::{AttemptStore, ResultsStore};
use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Numeric answers count as correct within this absolute difference.
const NUMERIC_TOLERANCE: f64 = 0.01;

/// What `advance` did.
#[derive(Debug)]
pub enum AdvanceOutcome {
    /// Moved to the question at this index.
    Moved(usize),
    /// The last question was already current; the session finished.
    Finished(ExamResult),
}

/// State of one exam attempt. Exclusively owned; every field is private and
/// mutated only through [`ExamRunner`] operations.
#[derive(Debug)]
pub struct ExamSession {
    session_id: Uuid,
    exam_type: ExamType,
    topic_id: Option<String>,
    key: SessionKey,
    questions: Vec<ObfuscatedQuestion>,
    answers: HashMap<usize, AnswerRecord>,
    current_index: usize,
    started_at: DateTime<Utc>,
    time_limit_secs: u32,
    time_remaining_secs: u32,
    pass_score: u32,
    paused: bool,
    active: bool,
    outcome: Option<ExamResult>,
}

impl ExamSession {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn exam_type(&self) -> ExamType {
        self.exam_type
    }

    pub fn topic_id(&self) -> Option<&str> {
        self.topic_id.as_deref()
    }

    /// The obfuscated question list shown to the shell. Correct answers and
    /// explanations are opaque tokens until `finish` decodes them.
    pub fn questions(&self) -> &[ObfuscatedQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&ObfuscatedQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn answer_for(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    pub fn time_remaining_secs(&self) -> u32 {
        self.time_remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The finished result, once `finish` has run.
    pub fn outcome(&self) -> Option<&ExamResult> {
        self.outcome.as_ref()
    }

    fn ensure_active(&self) -> Result<(), ExamError> {
        if self.active {
            Ok(())
        } else {
            Err(ExamError::SessionInactive)
        }
    }
}

/// Drives exam attempts from start to finish.
pub struct ExamRunner<S: ResultsStore + AttemptStore> {
    config: AppConfig,
    generator: QuestionGenerator,
    throttle: AttemptThrottle,
    monitor: SecurityMonitor,
    store: S,
}

impl<S: ResultsStore + AttemptStore> ExamRunner<S> {
    pub fn new(config: AppConfig, store: S) -> Self {
        let generator = QuestionGenerator::new(config.points.correct_answer);
        Self::with_generator(config, store, generator)
    }

    /// Runner with a deterministic question sequence, for tests and drills.
    pub fn with_seeded_generator(config: AppConfig, store: S, seed: u64) -> Self {
        let generator = QuestionGenerator::with_seed(seed, config.points.correct_answer);
        Self::with_generator(config, store, generator)
    }

    fn with_generator(config: AppConfig, store: S, generator: QuestionGenerator) -> Self {
        let throttle = AttemptThrottle::new(config.security.max_attempts_per_day);
        Self {
            config,
            generator,
            throttle,
            monitor: SecurityMonitor::new(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Attempts of this type left today before the throttle denies a start.
    pub fn remaining_attempts(&self, exam_type: ExamType) -> Result<u32, ExamError> {
        Ok(self
            .throttle
            .remaining(&self.store, Local::now().date_naive(), exam_type)?)
    }

    /// Starts a new attempt. Consumes one unit of today's allowance; a
    /// denied attempt consumes nothing. Questions are generated for
    /// `topic_id` (falling back to the default topic) and obfuscated under a
    /// fresh session key before the session value is handed out.
    pub fn start(
        &mut self,
        exam_type: ExamType,
        topic_id: Option<&str>,
    ) -> Result<ExamSession, ExamError> {
        let today = Local::now().date_naive();
        match self
            .throttle
            .check_and_consume(&mut self.store, today, exam_type)?
        {
            ThrottleDecision::Denied => {
                return Err(ExamError::AttemptLimitExceeded { exam_type });
            }
            ThrottleDecision::Allowed { .. } => {}
        }

        let settings = self.config.exam_settings(exam_type).clone();
        let topic = topic_id.unwrap_or(DEFAULT_TOPIC);
        let key = SessionKey::generate();
        let questions = self
            .generator
            .generate(topic, settings.questions)
            .iter()
            .map(|question| obfuscator::obfuscate_question(question, &key))
            .collect();
        self.monitor.enter_exam_mode();

        Ok(ExamSession {
            session_id: Uuid::new_v4(),
            exam_type,
            topic_id: topic_id.map(str::to_string),
            key,
            questions,
            answers: HashMap::new(),
            current_index: 0,
            started_at: Utc::now(),
            time_limit_secs: settings.time_limit_secs,
            time_remaining_secs: settings.time_limit_secs,
            pass_score: settings.pass_score,
            paused: false,
            active: true,
            outcome: None,
        })
    }

    /// Records (or replaces) the answer for the question at `index`.
    pub fn record_answer(
        &mut self,
        session: &mut ExamSession,
        index: usize,
        record: AnswerRecord,
    ) -> Result<(), ExamError> {
        session.ensure_active()?;
        if index >= session.questions.len() {
            return Err(ExamError::IndexOutOfRange {
                index,
                total: session.questions.len(),
            });
        }
        session.answers.insert(index, record);
        Ok(())
    }

    /// Moves to the next question. The current question must be answered
    /// first; advancing past the last question finishes the session.
    pub fn advance(&mut self, session: &mut ExamSession) -> Result<AdvanceOutcome, ExamError> {
        session.ensure_active()?;
        let index = session.current_index;
        if !session.answers.contains_key(&index) {
            return Err(ExamError::AnswerRequired { index });
        }
        if index + 1 < session.questions.len() {
            session.current_index = index + 1;
            Ok(AdvanceOutcome::Moved(session.current_index))
        } else {
            Ok(AdvanceOutcome::Finished(self.finish(session)?))
        }
    }

    /// Moves back one question; a no-op on the first question. Backward
    /// navigation never requires an answer.
    pub fn retreat(&mut self, session: &mut ExamSession) -> Result<usize, ExamError> {
        session.ensure_active()?;
        session.current_index = session.current_index.saturating_sub(1);
        Ok(session.current_index)
    }

    /// Stops the countdown until `resume`.
    pub fn pause(&mut self, session: &mut ExamSession) -> Result<(), ExamError> {
        session.ensure_active()?;
        session.paused = true;
        Ok(())
    }

    /// Restarts the countdown. If the clock already ran out while paused,
    /// the session finishes immediately and the result is returned.
    pub fn resume(
        &mut self,
        session: &mut ExamSession,
    ) -> Result<Option<ExamResult>, ExamError> {
        session.ensure_active()?;
        session.paused = false;
        if session.time_remaining_secs == 0 {
            return Ok(Some(self.finish(session)?));
        }
        Ok(None)
    }

    /// Cooperative one-second countdown step, driven by the shell's timer.
    /// Does nothing while paused or after the session ended. Expiry finishes
    /// the session unconditionally, unanswered questions and all.
    pub fn tick(&mut self, session: &mut ExamSession) -> Result<Option<ExamResult>, ExamError> {
        if !session.active || session.paused {
            return Ok(None);
        }
        session.time_remaining_secs = session.time_remaining_secs.saturating_sub(1);
        if session.time_remaining_secs == 0 {
            return Ok(Some(self.finish(session)?));
        }
        Ok(None)
    }

    /// Scores the attempt and deactivates the session. Idempotent: calling
    /// again returns the cached result without touching storage. Persistence
    /// failures are logged and swallowed; a finished exam is never lost to a
    /// storage hiccup.
    pub fn finish(&mut self, session: &mut ExamSession) -> Result<ExamResult, ExamError> {
        if let Some(result) = &session.outcome {
            return Ok(result.clone());
        }
        session.ensure_active()?;
        session.active = false;
        session.paused = false;

        let mut correct = 0;
        let mut details = Vec::with_capacity(session.questions.len());
        for (index, question) in session.questions.iter().enumerate() {
            let answer = session.answers.get(&index);
            let expected = obfuscator::decode(&question.correct_answer, &session.key);
            let explanation = obfuscator::decode(&question.explanation, &session.key);
            // An undecodable token scores as incorrect rather than erroring;
            // the review row then carries no correct answer to display.
            let is_correct = match (&expected, answer) {
                (Some(expected), Some(record)) => {
                    answers_match(question.kind, expected, &record.value)
                }
                _ => false,
            };
            if is_correct {
                correct += 1;
            }
            details.push(QuestionReview {
                question_id: question.id,
                prompt: question.prompt.clone(),
                user_answer: answer.map(|record| record.value.clone()),
                correct_answer: expected,
                is_correct,
                explanation,
                points: if is_correct {
                    question.points
                } else {
                    self.config.points.wrong_answer
                },
            });
        }

        let total = session.questions.len();
        let score = ExamResult::percentage(correct, total);
        let result = ExamResult {
            result_id: Uuid::new_v4(),
            exam_type: session.exam_type,
            topic_id: session.topic_id.clone(),
            total_questions: total,
            correct_answers: correct,
            score,
            time_spent_secs: u64::from(session.time_limit_secs - session.time_remaining_secs),
            passed: score >= session.pass_score,
            finished_at: Utc::now(),
            security_events: self.monitor.event_count(),
            details,
        };

        self.monitor.exit_exam_mode();
        if let Err(err) = self.store.save_exam_result(&result) {
            log::warn!("failed to persist exam result: {err:#}");
        }
        if let Err(err) = self.store.update_topic_progress(&result) {
            log::warn!("failed to update topic progress: {err:#}");
        }
        let records = self.monitor.drain_records();
        if self.config.security.log_suspicious_activity {
            if let Err(err) = self.store.append_security_events(&records) {
                log::warn!("failed to persist security log: {err:#}");
            }
        }

        session.outcome = Some(result.clone());
        Ok(result)
    }

    /// Walks away from the attempt: countdown stops and the session
    /// deactivates before anything else happens. No result is produced and
    /// nothing about the attempt is scored.
    pub fn abandon(&mut self, session: &mut ExamSession) {
        session.active = false;
        session.paused = false;
        self.monitor.exit_exam_mode();
        let records = self.monitor.drain_records();
        if self.config.security.log_suspicious_activity {
            if let Err(err) = self.store.append_security_events(&records) {
                log::warn!("failed to persist security log: {err:#}");
            }
        }
    }

    /// Feeds an activity signal from the shell into the monitor. Focus loss
    /// additionally pauses the countdown when configured to.
    pub fn report_activity(
        &mut self,
        session: &mut ExamSession,
        kind: ActivityKind,
        detail: impl Into<String>,
    ) {
        self.monitor.record(kind, detail);
        if session.active
            && kind == ActivityKind::FocusLoss
            && self.config.security.pause_on_focus_loss
        {
            session.paused = true;
        }
    }

    /// Events recorded so far for the running attempt.
    pub fn security_event_count(&self) -> usize {
        self.monitor.event_count()
    }
}

fn answers_match(kind: QuestionKind, expected: &str, given: &str) -> bool {
    match kind {
        QuestionKind::MultipleChoice => expected == given,
        QuestionKind::Numeric => match (expected.trim().parse::<f64>(), given.trim().parse::<f64>())
        {
            (Ok(expected), Ok(given)) => (expected - given).abs() < NUMERIC_TOLERANCE,
            _ => false,
        },
    }
}
