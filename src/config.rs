//! Configuration primitives for the exambase practice-exam core.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/Exambase/config.toml on Windows
//!   $XDG_DATA_HOME/exambase/config.toml on Linux
//!   ~/Library/Application Support/Exambase/config.toml on macOS
//!
//! The config tracks the shape of each exam type (question count, time
//! limit, pass score), the anti-cheating knobs, and the points awarded per
//! answer. Defaults reproduce the published exam formats; an embedding shell
//! normally loads this once at startup and passes it to the `ExamRunner`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three configured exam shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    /// Ten questions on a single micro topic.
    Micro,
    /// Fifteen questions spanning one macro topic.
    Macro,
    /// The full forty-question placement simulation.
    Complete,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Micro => "micro",
            ExamType::Macro => "macro",
            ExamType::Complete => "complete",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape of the full placement simulation.
    #[serde(default = "default_complete_exam")]
    pub complete_exam: ExamTypeSettings,
    /// Shape of a macro-topic exam.
    #[serde(default = "default_macro_exam")]
    pub macro_exam: ExamTypeSettings,
    /// Shape of a micro-topic drill.
    #[serde(default = "default_micro_exam")]
    pub micro_exam: ExamTypeSettings,
    /// Anti-cheating knobs (attempt caps, activity logging, focus handling).
    #[serde(default)]
    pub security: SecuritySettings,
    /// Points awarded per answer.
    #[serde(default)]
    pub points: PointsSettings,
}

impl AppConfig {
    /// Settings for one exam type.
    pub fn exam_settings(&self, exam_type: ExamType) -> &ExamTypeSettings {
        match exam_type {
            ExamType::Micro => &self.micro_exam,
            ExamType::Macro => &self.macro_exam,
            ExamType::Complete => &self.complete_exam,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            complete_exam: default_complete_exam(),
            macro_exam: default_macro_exam(),
            micro_exam: default_micro_exam(),
            security: SecuritySettings::default(),
            points: PointsSettings::default(),
        }
    }
}

/// Question count, time limit, and pass threshold for one exam type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamTypeSettings {
    /// Number of questions generated at session start.
    pub questions: usize,
    /// Countdown armed at session start, in seconds.
    pub time_limit_secs: u32,
    /// Minimum score percentage counted as a pass.
    pub pass_score: u32,
}

impl Default for ExamTypeSettings {
    fn default() -> Self {
        default_micro_exam()
    }
}

fn default_complete_exam() -> ExamTypeSettings {
    ExamTypeSettings {
        questions: 40,
        time_limit_secs: 90 * 60,
        pass_score: 70,
    }
}

fn default_macro_exam() -> ExamTypeSettings {
    ExamTypeSettings {
        questions: 15,
        time_limit_secs: 30 * 60,
        pass_score: 70,
    }
}

fn default_micro_exam() -> ExamTypeSettings {
    ExamTypeSettings {
        questions: 10,
        time_limit_secs: 15 * 60,
        pass_score: 70,
    }
}

/// Anti-cheating preferences. Best-effort deterrents, not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Maximum exam starts per exam type per calendar day.
    #[serde(default = "default_max_attempts_per_day")]
    pub max_attempts_per_day: u32,
    /// Whether suspicious-activity records are kept at all.
    #[serde(default = "default_log_suspicious_activity")]
    pub log_suspicious_activity: bool,
    /// Whether the countdown pauses while the surrounding window loses focus.
    #[serde(default = "default_pause_on_focus_loss")]
    pub pause_on_focus_loss: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            max_attempts_per_day: default_max_attempts_per_day(),
            log_suspicious_activity: default_log_suspicious_activity(),
            pause_on_focus_loss: default_pause_on_focus_loss(),
        }
    }
}

const fn default_max_attempts_per_day() -> u32 {
    50
}

const fn default_log_suspicious_activity() -> bool {
    true
}

const fn default_pause_on_focus_loss() -> bool {
    true
}

/// Reward values applied per question at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsSettings {
    #[serde(default = "default_correct_points")]
    pub correct_answer: u32,
    #[serde(default)]
    pub wrong_answer: u32,
}

impl Default for PointsSettings {
    fn default() -> Self {
        Self {
            correct_answer: default_correct_points(),
            wrong_answer: 0,
        }
    }
}

const fn default_correct_points() -> u32 {
    10
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where exambase stores data.
///
/// Order of precedence:
/// 1. `EXAMBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("EXAMBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("Exambase"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config").join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let path = config_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
