//! Per-topic progress records and their macro-topic roll-up.

use crate::catalog;
use crate::models::ExamResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated performance on one micro topic across attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicProgress {
    pub topic_id: String,
    pub attempts: u32,
    pub questions_seen: u32,
    pub correct_answers: u32,
    /// Highest percentage score achieved on this topic.
    pub best_score: u32,
    pub total_time_secs: u64,
    pub last_attempt: DateTime<Utc>,
}

impl TopicProgress {
    pub fn new(topic_id: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            attempts: 0,
            questions_seen: 0,
            correct_answers: 0,
            best_score: 0,
            total_time_secs: 0,
            last_attempt: Utc::now(),
        }
    }

    /// Folds one finished attempt into the record.
    pub fn record(&mut self, result: &ExamResult) {
        self.attempts += 1;
        self.questions_seen += result.total_questions as u32;
        self.correct_answers += result.correct_answers as u32;
        self.best_score = self.best_score.max(result.score);
        self.total_time_secs += result.time_spent_secs;
        self.last_attempt = result.finished_at;
    }

    /// Lifetime fraction of correct answers, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        if self.questions_seen == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.questions_seen as f64
    }

    pub fn average_time_secs(&self) -> u64 {
        if self.attempts == 0 {
            return 0;
        }
        self.total_time_secs / u64::from(self.attempts)
    }
}

/// Macro-topic view over the micro-topic progress records.
#[derive(Debug, Clone, Serialize)]
pub struct MacroTopicSummary {
    pub topic_id: String,
    pub micro_topics_attempted: usize,
    pub attempts: u32,
    pub questions_seen: u32,
    pub correct_answers: u32,
    pub best_score: u32,
}

impl MacroTopicSummary {
    /// Groups micro-topic records under their catalog parents. Records for
    /// slugs outside the catalog are ignored. Output order follows topic id.
    pub fn roll_up<'a>(records: impl IntoIterator<Item = &'a TopicProgress>) -> Vec<Self> {
        let mut grouped: BTreeMap<&'static str, MacroTopicSummary> = BTreeMap::new();
        for record in records {
            let Some(parent) = catalog::parent_of(&record.topic_id) else {
                continue;
            };
            let summary = grouped
                .entry(parent.id)
                .or_insert_with(|| MacroTopicSummary {
                    topic_id: parent.id.to_string(),
                    micro_topics_attempted: 0,
                    attempts: 0,
                    questions_seen: 0,
                    correct_answers: 0,
                    best_score: 0,
                });
            summary.micro_topics_attempted += 1;
            summary.attempts += record.attempts;
            summary.questions_seen += record.questions_seen;
            summary.correct_answers += record.correct_answers;
            summary.best_score = summary.best_score.max(record.best_score);
        }
        grouped.into_values().collect()
    }

    pub fn accuracy(&self) -> f64 {
        if self.questions_seen == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.questions_seen as f64
    }
}
