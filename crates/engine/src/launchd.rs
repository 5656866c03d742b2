// SPDX-License-Identifier: MIT

//! Trigger compiler: task spec → launchd job definition
//!
//! Invoked at task add/edit/refresh time only, never on the run path.
//! Each task compiles to one plist keyed by a stable label; the job's
//! program invocation re-enters the engine through `tempo run <name>`.

use crate::paths::absolutize;
use crate::plist::Value;
use crate::{CapturedEnv, Paths};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempo_adapters::subprocess::LAUNCHCTL_TIMEOUT;
use tempo_adapters::{run_with_timeout, SubprocessError};
use tempo_task::{TaskSpec, Trigger};
use thiserror::Error;
use tokio::process::Command;

/// Reverse-DNS prefix for launchd job labels
pub const LABEL_PREFIX: &str = "com.tempo";

/// Errors from compiling or (un)loading launchd jobs
#[derive(Debug, Error)]
pub enum LaunchdError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("launchctl error: {0}")]
    Launchctl(#[from] SubprocessError),
}

/// Stable launchd label for a task
pub fn job_label(task_name: &str) -> String {
    format!("{}.{}", LABEL_PREFIX, task_name)
}

/// Path of the compiled plist for a task
pub fn plist_path(paths: &Paths, task_name: &str) -> PathBuf {
    paths
        .launch_agents_dir()
        .join(format!("{}.plist", job_label(task_name)))
}

/// Compile a task spec into a launchd job definition.
///
/// Pure mapping: populated calendar fields become `StartCalendarInterval`
/// entries (omitted fields stay wildcards), intervals become
/// `StartInterval`, and watch paths become absolute `WatchPaths`.
pub fn compile(spec: &TaskSpec, env: &CapturedEnv, paths: &Paths) -> Value {
    let bin = env
        .bin_path()
        .map(str::to_string)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .map(|p| p.display().to_string())
        })
        .unwrap_or_else(|| "tempo".to_string());

    let mut dict = BTreeMap::new();
    dict.insert("Label".to_string(), Value::from(job_label(&spec.name)));
    dict.insert(
        "ProgramArguments".to_string(),
        Value::Array(vec![
            Value::from(bin),
            Value::from("run"),
            Value::from(spec.name.as_str()),
        ]),
    );
    dict.insert(
        "EnvironmentVariables".to_string(),
        Value::Dict(
            env.base_vars()
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        ),
    );
    dict.insert(
        "StandardOutPath".to_string(),
        Value::from(paths.stdout_log(&spec.name).display().to_string()),
    );
    dict.insert(
        "StandardErrorPath".to_string(),
        Value::from(paths.stderr_log(&spec.name).display().to_string()),
    );
    dict.insert("RunAtLoad".to_string(), Value::Bool(false));

    match &spec.trigger {
        Trigger::Cron { cron } => {
            let mut cal = BTreeMap::new();
            for (key, value) in [
                ("Minute", cron.minute),
                ("Hour", cron.hour),
                ("Day", cron.day),
                ("Weekday", cron.weekday),
                ("Month", cron.month),
            ] {
                if let Some(v) = value {
                    cal.insert(key.to_string(), Value::Integer(i64::from(v)));
                }
            }
            dict.insert("StartCalendarInterval".to_string(), Value::Dict(cal));
        }
        Trigger::Interval { interval_seconds } => {
            dict.insert(
                "StartInterval".to_string(),
                Value::Integer(*interval_seconds as i64),
            );
        }
        Trigger::Watch { watch_paths } => {
            dict.insert(
                "WatchPaths".to_string(),
                Value::Array(
                    watch_paths
                        .iter()
                        .map(|p| Value::from(absolutize(p).display().to_string()))
                        .collect(),
                ),
            );
        }
    }

    Value::Dict(dict)
}

/// Compile and write the plist file for a task. Returns the plist path.
pub fn write_job(spec: &TaskSpec, env: &CapturedEnv, paths: &Paths) -> Result<PathBuf, LaunchdError> {
    let path = plist_path(paths, &spec.name);
    std::fs::write(&path, compile(spec, env, paths).document())?;
    Ok(path)
}

/// Remove the plist file for a task, if present.
pub fn remove_job(paths: &Paths, task_name: &str) -> Result<(), LaunchdError> {
    let path = plist_path(paths, task_name);
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Load (schedule) a task's job into launchd. Returns false if the plist
/// is missing or launchctl rejected it.
pub async fn load_job(paths: &Paths, task_name: &str) -> Result<bool, LaunchdError> {
    let path = plist_path(paths, task_name);
    if !path.exists() {
        return Ok(false);
    }
    let mut cmd = Command::new("launchctl");
    cmd.arg("load").arg(&path);
    let output = run_with_timeout(cmd, LAUNCHCTL_TIMEOUT, "launchctl load").await?;
    Ok(output.status.success())
}

/// Unload (unschedule) a task's job from launchd. Returns false if the
/// plist is missing or launchctl rejected it.
pub async fn unload_job(paths: &Paths, task_name: &str) -> Result<bool, LaunchdError> {
    let path = plist_path(paths, task_name);
    if !path.exists() {
        return Ok(false);
    }
    let mut cmd = Command::new("launchctl");
    cmd.arg("unload").arg(&path);
    let output = run_with_timeout(cmd, LAUNCHCTL_TIMEOUT, "launchctl unload").await?;
    Ok(output.status.success())
}

/// Whether a task's job is currently loaded in launchd.
pub async fn is_loaded(task_name: &str) -> bool {
    let mut cmd = Command::new("launchctl");
    cmd.arg("list").arg(job_label(task_name));
    match run_with_timeout(cmd, LAUNCHCTL_TIMEOUT, "launchctl list").await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Collaborator that removes a task from the external scheduler.
///
/// The run supervisor goes through this seam for auto-disable so the
/// policy can be exercised without a live launchd.
#[async_trait]
pub trait Unscheduler: Send + Sync {
    async fn unschedule(&self, task_name: &str) -> Result<(), LaunchdError>;
}

/// Production unscheduler backed by `launchctl unload`
pub struct LaunchdUnscheduler {
    paths: Paths,
}

impl LaunchdUnscheduler {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl Unscheduler for LaunchdUnscheduler {
    async fn unschedule(&self, task_name: &str) -> Result<(), LaunchdError> {
        unload_job(&self.paths, task_name).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "launchd_tests.rs"]
mod tests;
