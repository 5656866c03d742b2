// SPDX-License-Identifier: MIT

//! Action execution
//!
//! Runs a task's action exactly once under a hard wall-clock timeout with
//! captured output. Every failure mode is folded into the outcome rather
//! than raised: a timeout records exit code 124, and a launch failure
//! records exit code 1 with the error text as stderr. The supervisor never
//! sees an execution-level error.

use crate::paths::expand_tilde;
use std::collections::BTreeMap;
use std::time::Duration;
use tempo_adapters::{run_with_timeout, SubprocessError};
use tempo_task::{ActionKind, ActionSpec};
use tokio::process::Command;

/// Exit code recorded for a timed-out run, matching the convention used
/// by coreutils `timeout(1)`.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Result of one execution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Execute an action under the curated runtime environment.
///
/// The child never inherits the caller's ambient environment: it gets
/// exactly `env` (the captured baseline layered with task overrides).
pub async fn execute(action: &ActionSpec, env: &BTreeMap<String, String>) -> ExecOutcome {
    let cmd = build_command(action, env);
    let timeout = Duration::from_secs(action.timeout);
    match run_with_timeout(cmd, timeout, "task action").await {
        Ok(output) => ExecOutcome {
            // a signal-terminated child has no exit code; treat as failure
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(SubprocessError::Timeout { .. }) => ExecOutcome {
            exit_code: TIMEOUT_EXIT_CODE,
            stdout: String::new(),
            stderr: format!("task timed out after {}s", timeout.as_secs()),
        },
        Err(err @ SubprocessError::Spawn { .. }) => ExecOutcome {
            exit_code: 1,
            stdout: String::new(),
            stderr: err.to_string(),
        },
    }
}

/// Build the child command for an action: program, arguments, curated
/// environment, and working directory.
fn build_command(action: &ActionSpec, env: &BTreeMap<String, String>) -> Command {
    let mut cmd = match &action.kind {
        ActionKind::Command(command) => {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
        ActionKind::Agent {
            prompt,
            provider,
            model,
        } => {
            let mut cmd = Command::new(provider.binary());
            cmd.args(provider.prompt_args(prompt));
            if let Some(model) = model {
                cmd.arg(provider.model_flag()).arg(model);
            }
            cmd
        }
    };

    cmd.env_clear().envs(env);
    if let Some(dir) = &action.working_dir {
        cmd.current_dir(expand_tilde(dir));
    }
    cmd
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
