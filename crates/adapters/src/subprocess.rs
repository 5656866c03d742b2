// SPDX-License-Identifier: MIT

//! Subprocess execution with a hard wall-clock timeout

use std::process::Output;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Default timeout for `launchctl` invocations.
pub const LAUNCHCTL_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from running a subprocess
#[derive(Debug, Error)]
pub enum SubprocessError {
    /// The process could not be launched or waited on
    #[error("{description} failed: {source}")]
    Spawn {
        description: String,
        source: std::io::Error,
    },
    /// The deadline elapsed; the child process tree was killed
    #[error("{description} timed out after {}s", timeout.as_secs())]
    Timeout {
        description: String,
        timeout: Duration,
    },
}

/// Run a subprocess command with a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout`. The child is
/// configured with `kill_on_drop` so the whole future being dropped on
/// timeout terminates the process tree.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(SubprocessError::Spawn {
            description: description.to_string(),
            source: io_err,
        }),
        Err(_elapsed) => Err(SubprocessError::Timeout {
            description: description.to_string(),
            timeout,
        }),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
