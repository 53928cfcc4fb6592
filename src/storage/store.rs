//! JSON-file store for exam history, topic progress, and attempt counts.
//!
//! Everything lives under one root directory:
//!   history.json       — finished exam results, newest last, bounded
//!   progress.json      — per-micro-topic progress records
//!   attempts.json      — attempt counts keyed by calendar date and exam type
//!   security_log.jsonl — suspicious-activity records, newest last, bounded
//!
//! Files are read in full and rewritten in full; the data volumes here are
//! tiny. A missing file reads as empty.

use super::{AttemptStore, ExamStatistics, MacroTopicSummary, ResultsStore, TopicProgress};
use crate::config::ExamType;
use crate::models::ExamResult;
use crate::security::ActivityRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Results older than this are dropped when a new one is saved.
const MAX_HISTORY_ENTRIES: usize = 100;

/// The persisted security log keeps only the most recent entries.
const MAX_SECURITY_LOG_ENTRIES: usize = 100;

pub struct ExamStore {
    root: PathBuf,
}

impl ExamStore {
    /// Opens (and creates if necessary) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create store directory {:?}", root))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn history_path(&self) -> PathBuf {
        self.root.join("history.json")
    }

    fn progress_path(&self) -> PathBuf {
        self.root.join("progress.json")
    }

    fn attempts_path(&self) -> PathBuf {
        self.root.join("attempts.json")
    }

    fn security_log_path(&self) -> PathBuf {
        self.root.join("security_log.jsonl")
    }

    /// Full exam history, oldest first.
    pub fn history(&self) -> Result<Vec<ExamResult>> {
        read_json_or_default(&self.history_path())
    }

    /// The `limit` most recent results, newest first.
    pub fn recent_results(&self, limit: usize) -> Result<Vec<ExamResult>> {
        let mut history = self.history()?;
        history.reverse();
        history.truncate(limit);
        Ok(history)
    }

    /// All per-micro-topic progress records, keyed by topic id.
    pub fn topic_progress(&self) -> Result<HashMap<String, TopicProgress>> {
        read_json_or_default(&self.progress_path())
    }

    /// Macro-topic roll-up of the stored progress records.
    pub fn macro_topic_summaries(&self) -> Result<Vec<MacroTopicSummary>> {
        let progress = self.topic_progress()?;
        Ok(MacroTopicSummary::roll_up(progress.values()))
    }

    /// Aggregate statistics over the stored history.
    pub fn statistics(&self) -> Result<ExamStatistics> {
        Ok(ExamStatistics::from_history(&self.history()?))
    }

    /// Reads the security log back, skipping unparsable lines.
    pub fn security_events(&self) -> Result<Vec<ActivityRecord>> {
        let path = self.security_log_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read security log {:?}", path))?;
        Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }

    fn attempt_counts(&self) -> Result<HashMap<String, u32>> {
        read_json_or_default(&self.attempts_path())
    }
}

impl ResultsStore for ExamStore {
    fn save_exam_result(&mut self, result: &ExamResult) -> Result<()> {
        let mut history = self.history()?;
        history.push(result.clone());
        if history.len() > MAX_HISTORY_ENTRIES {
            let excess = history.len() - MAX_HISTORY_ENTRIES;
            history.drain(..excess);
        }
        write_json(&self.history_path(), &history)
    }

    fn update_topic_progress(&mut self, result: &ExamResult) -> Result<()> {
        let Some(topic_id) = result.topic_id.as_deref() else {
            return Ok(());
        };
        let mut progress = self.topic_progress()?;
        progress
            .entry(topic_id.to_string())
            .or_insert_with(|| TopicProgress::new(topic_id))
            .record(result);
        write_json(&self.progress_path(), &progress)
    }

    fn append_security_events(&mut self, records: &[ActivityRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut events = self.security_events()?;
        events.extend(records.iter().cloned());
        if events.len() > MAX_SECURITY_LOG_ENTRIES {
            let excess = events.len() - MAX_SECURITY_LOG_ENTRIES;
            events.drain(..excess);
        }
        let path = self.security_log_path();
        let mut lines = String::new();
        for record in &events {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }
        fs::write(&path, lines)
            .with_context(|| format!("Failed to write security log {:?}", path))
    }
}

impl AttemptStore for ExamStore {
    fn count(&self, date: NaiveDate, exam_type: ExamType) -> Result<u32> {
        Ok(self
            .attempt_counts()?
            .get(&attempt_key(date, exam_type))
            .copied()
            .unwrap_or(0))
    }

    fn increment(&mut self, date: NaiveDate, exam_type: ExamType) -> Result<()> {
        let mut counts = self.attempt_counts()?;
        *counts.entry(attempt_key(date, exam_type)).or_insert(0) += 1;
        write_json(&self.attempts_path(), &counts)
    }
}

fn attempt_key(date: NaiveDate, exam_type: ExamType) -> String {
    format!("{date}:{exam_type}")
}

fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let data = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_slice(&data).with_context(|| format!("Failed to parse {:?}", path))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data).with_context(|| format!("Failed to write {:?}", path))
}
