// SPDX-License-Identifier: MIT

//! Command handlers, one module per subcommand

pub mod add;
pub mod clean;
pub mod init;
pub mod list;
pub mod logs;
pub mod output;
pub mod refresh;
pub mod remove;
pub mod run;
pub mod show;
pub mod status;
pub mod toggle;
pub mod validate;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, Utc};
use tempo_engine::Paths;
use tempo_task::{load_task_file, TaskSpec, Trigger};

/// Load every registered task, sorted by name. Files that fail to parse
/// abort the listing; a broken registration should be loud.
pub(crate) fn load_tasks(paths: &Paths) -> Result<Vec<TaskSpec>> {
    let dir = paths.tasks_dir();
    let mut tasks = Vec::new();
    if !dir.exists() {
        return Ok(tasks);
    }
    for entry in
        std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            tasks.push(load_task_file(&path)?);
        }
    }
    tasks.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tasks)
}

/// Load one registered task by name.
pub(crate) fn load_task(paths: &Paths, name: &str) -> Result<TaskSpec> {
    let path = paths.task_file(name);
    if !path.exists() {
        bail!("unknown task: {}", name);
    }
    Ok(load_task_file(&path)?)
}

/// One-line trigger description for list views.
pub(crate) fn trigger_summary(trigger: &Trigger) -> String {
    match trigger {
        Trigger::Cron { cron } => {
            let mut parts = Vec::new();
            for (label, value) in [
                ("min", cron.minute),
                ("hour", cron.hour),
                ("day", cron.day),
                ("weekday", cron.weekday),
                ("month", cron.month),
            ] {
                if let Some(v) = value {
                    parts.push(format!("{}={}", label, v));
                }
            }
            format!("cron {}", parts.join(" "))
        }
        Trigger::Interval { interval_seconds } => format!("every {}s", interval_seconds),
        Trigger::Watch { watch_paths } => format!("watch {}", watch_paths.join(", ")),
    }
}

/// Local-time display form of a stored UTC timestamp.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
