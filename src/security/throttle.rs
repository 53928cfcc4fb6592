//! Daily attempt throttle.
//!
//! Attempts are counted per local calendar day and exam type. The throttle
//! itself is pure policy; persistence lives behind the [`AttemptStore`]
//! trait.

use crate::config::ExamType;
use crate::storage::AttemptStore;
use anyhow::Result;
use chrono::NaiveDate;

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// The attempt was admitted and counted; `remaining` is the allowance
    /// left after it.
    Allowed { remaining: u32 },
    Denied,
}

/// Caps exam starts at `daily_max` per exam type per calendar day.
#[derive(Debug, Clone, Copy)]
pub struct AttemptThrottle {
    daily_max: u32,
}

impl AttemptThrottle {
    pub fn new(daily_max: u32) -> Self {
        Self { daily_max }
    }

    /// Admits or denies an attempt on `date`, consuming one unit of the
    /// allowance on admission. Check and consumption happen together so a
    /// session is never started without being counted.
    pub fn check_and_consume(
        &self,
        store: &mut dyn AttemptStore,
        date: NaiveDate,
        exam_type: ExamType,
    ) -> Result<ThrottleDecision> {
        let used = store.count(date, exam_type)?;
        if used >= self.daily_max {
            log::warn!(
                "{exam_type} attempt denied: {used}/{} used on {date}",
                self.daily_max
            );
            return Ok(ThrottleDecision::Denied);
        }
        store.increment(date, exam_type)?;
        Ok(ThrottleDecision::Allowed {
            remaining: self.daily_max - used - 1,
        })
    }

    /// Allowance left for `date` without consuming anything. A day with no
    /// record reads as the full allowance.
    pub fn remaining(
        &self,
        store: &dyn AttemptStore,
        date: NaiveDate,
        exam_type: ExamType,
    ) -> Result<u32> {
        Ok(self.daily_max.saturating_sub(store.count(date, exam_type)?))
    }
}
