// SPDX-License-Identifier: MIT

//! Task specification: trigger, action, and notification policy

use crate::{ActionSpec, CronSchedule};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during task spec validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("task name is required")]
    EmptyName,

    #[error("task name must not contain path separators: {0}")]
    InvalidName(String),

    #[error("cron {field} must be {min}-{max}, got {value}")]
    CronFieldOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("cron trigger requires at least one calendar field")]
    EmptyCronSchedule,

    #[error("interval trigger requires a positive interval_seconds")]
    NonPositiveInterval,

    #[error("watch trigger requires at least one non-empty path")]
    EmptyWatchPaths,

    #[error("action cannot have both command and prompt")]
    ConflictingActionModes,

    #[error("action requires either command or prompt")]
    MissingActionMode,

    #[error("provider requires prompt")]
    ProviderWithoutPrompt,

    #[error("model requires prompt")]
    ModelWithoutPrompt,

    #[error("unknown provider: {0} (must be one of claude, codex, gemini)")]
    UnknownProvider(String),

    #[error("action timeout must be positive")]
    NonPositiveTimeout,
}

/// What causes the external scheduler to invoke a task.
///
/// Closed sum type: exactly one variant is populated, selected by the
/// `type` key in the `[trigger]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trigger {
    /// Calendar schedule: `type = "cron"` plus a `[trigger.cron]` table
    Cron { cron: CronSchedule },
    /// Fixed repeat period in seconds
    Interval { interval_seconds: u64 },
    /// Filesystem paths watched by the scheduler
    Watch { watch_paths: Vec<String> },
}

impl Trigger {
    /// Validate variant-specific payload consistency.
    pub fn validate(&self) -> Result<(), SpecError> {
        match self {
            Trigger::Cron { cron } => cron.validate(),
            Trigger::Interval { interval_seconds } => {
                if *interval_seconds == 0 {
                    return Err(SpecError::NonPositiveInterval);
                }
                Ok(())
            }
            Trigger::Watch { watch_paths } => {
                if watch_paths.is_empty() || watch_paths.iter().any(|p| p.trim().is_empty()) {
                    return Err(SpecError::EmptyWatchPaths);
                }
                Ok(())
            }
        }
    }

    /// Short label for CLI display ("cron", "interval", "watch")
    pub fn kind(&self) -> &'static str {
        match self {
            Trigger::Cron { .. } => "cron",
            Trigger::Interval { .. } => "interval",
            Trigger::Watch { .. } => "watch",
        }
    }
}

/// Notification policy for a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyPolicy {
    /// Send a notification when a run succeeds
    pub on_success: bool,
    /// Send a notification when a run fails
    pub on_failure: bool,
    /// Notification title (defaults to the task name)
    pub title: Option<String>,
    /// Auto-disable the task after this many consecutive failures
    /// (0 = never auto-disable)
    pub max_consecutive_failures: u32,
}

impl Default for NotifyPolicy {
    fn default() -> Self {
        Self {
            on_success: false,
            on_failure: true,
            title: None,
            max_consecutive_failures: 0,
        }
    }
}

/// A validated, immutable description of one schedulable unit.
///
/// Constructed by parsing a TOML task file; re-read from disk on every
/// run so edits take effect on the next trigger firing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Unique task name; also the key for history rows, lock files, and
    /// launchd labels
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub trigger: Trigger,
    pub action: ActionSpec,
    #[serde(default)]
    pub notify: NotifyPolicy,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl TaskSpec {
    /// Validate the whole spec: name, trigger payload, action timeout.
    ///
    /// Action mode consistency is enforced during deserialization by
    /// [`ActionSpec`]'s validating constructor.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.name.trim().is_empty() {
            return Err(SpecError::EmptyName);
        }
        if self.name.contains('/') || self.name.contains('\\') {
            return Err(SpecError::InvalidName(self.name.clone()));
        }
        self.trigger.validate()?;
        if self.action.timeout == 0 {
            return Err(SpecError::NonPositiveTimeout);
        }
        Ok(())
    }

    /// Notification title: the configured override or the task name.
    pub fn notify_title(&self) -> &str {
        self.notify.title.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
