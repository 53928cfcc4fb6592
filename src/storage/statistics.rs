//! Aggregate statistics computed over the exam history.

use crate::config::ExamType;
use crate::models::ExamResult;
use serde::Serialize;
use std::collections::HashMap;

/// Per-exam-type slice of the history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeBreakdown {
    pub attempts: usize,
    pub passed: usize,
    pub average_score: f64,
    pub best_score: u32,
}

/// Roll-up over every finished exam on record.
#[derive(Debug, Clone, Serialize)]
pub struct ExamStatistics {
    pub total_exams: usize,
    pub passed: usize,
    pub average_score: f64,
    pub best_score: u32,
    pub total_time_secs: u64,
    pub by_type: HashMap<ExamType, TypeBreakdown>,
}

impl ExamStatistics {
    pub fn from_history(history: &[ExamResult]) -> Self {
        let mut by_type: HashMap<ExamType, TypeBreakdown> = HashMap::new();
        let mut score_sum: u64 = 0;
        let mut type_score_sums: HashMap<ExamType, u64> = HashMap::new();
        let mut passed = 0;
        let mut best_score = 0;
        let mut total_time_secs = 0;

        for result in history {
            score_sum += u64::from(result.score);
            total_time_secs += result.time_spent_secs;
            best_score = best_score.max(result.score);
            if result.passed {
                passed += 1;
            }
            let slice = by_type.entry(result.exam_type).or_default();
            slice.attempts += 1;
            if result.passed {
                slice.passed += 1;
            }
            slice.best_score = slice.best_score.max(result.score);
            *type_score_sums.entry(result.exam_type).or_insert(0) += u64::from(result.score);
        }

        for (exam_type, slice) in by_type.iter_mut() {
            let sum = type_score_sums.get(exam_type).copied().unwrap_or(0);
            slice.average_score = sum as f64 / slice.attempts as f64;
        }

        let average_score = if history.is_empty() {
            0.0
        } else {
            score_sum as f64 / history.len() as f64
        };

        Self {
            total_exams: history.len(),
            passed,
            average_score,
            best_score,
            total_time_secs,
            by_type,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total_exams == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total_exams as f64
    }
}
