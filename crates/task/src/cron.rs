// SPDX-License-Identifier: MIT

//! Calendar schedule for cron triggers

use crate::SpecError;
use serde::{Deserialize, Serialize};

/// Calendar fields for a cron trigger.
///
/// Omitted fields are wildcards in launchd's `StartCalendarInterval`
/// semantics, not zero. At least one field must be populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSchedule {
    /// Minute of the hour (0-59)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    /// Hour of the day (0-23)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    /// Day of the month (1-31)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Day of the week (0-6, 0 = Sunday)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u32>,
    /// Month of the year (1-12)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

impl CronSchedule {
    /// Validate field ranges and require at least one populated field.
    pub fn validate(&self) -> Result<(), SpecError> {
        check_range("minute", self.minute, 0, 59)?;
        check_range("hour", self.hour, 0, 23)?;
        check_range("day", self.day, 1, 31)?;
        check_range("weekday", self.weekday, 0, 6)?;
        check_range("month", self.month, 1, 12)?;
        if self.is_empty() {
            return Err(SpecError::EmptyCronSchedule);
        }
        Ok(())
    }

    /// True when no calendar field is populated.
    pub fn is_empty(&self) -> bool {
        self.minute.is_none()
            && self.hour.is_none()
            && self.day.is_none()
            && self.weekday.is_none()
            && self.month.is_none()
    }
}

fn check_range(field: &'static str, value: Option<u32>, min: u32, max: u32) -> Result<(), SpecError> {
    match value {
        Some(v) if v < min || v > max => Err(SpecError::CronFieldOutOfRange {
            field,
            value: v,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
