// SPDX-License-Identifier: MIT

//! Run supervisor
//!
//! The single entry point the external scheduler invokes. One call is one
//! run: acquire the per-task lock, execute the action, persist the result,
//! evaluate the failure streak, and dispatch notification / auto-disable
//! side effects. The lock is held for the whole sequence and released on
//! every exit path via `RunLock`'s drop guard.

use crate::lock::{self, LockAttempt};
use crate::{executor, CapturedEnv, Paths, RunError, Unscheduler};
use chrono::Utc;
use std::path::Path;
use tempo_adapters::NotifyAdapter;
use tempo_storage::{HistoryStore, NewRun};
use tempo_task::load_task_file;

/// Characters of captured output included in a notification body.
const NOTIFY_BODY_CHARS: usize = 200;

/// Execute a task once. Returns the exit code the process should report
/// to the scheduler: the action's exit code, or 0 for a contention skip.
///
/// The task file is re-read from disk on every invocation so edits take
/// effect on the next trigger firing.
pub async fn run_task<N, U>(
    paths: &Paths,
    task_name: &str,
    notifier: &N,
    unscheduler: &U,
) -> Result<i32, RunError>
where
    N: NotifyAdapter,
    U: Unscheduler,
{
    paths.ensure_layout()?;
    let spec = load_task_file(&paths.task_file(task_name))?;
    let env = CapturedEnv::load_or_capture(paths)?;

    // Non-blocking: a second trigger firing while a run is live is
    // dropped, not queued. A skip is not a failure.
    let _lock = match lock::acquire(&paths.locks_dir(), task_name)? {
        LockAttempt::Acquired(lock) => lock,
        LockAttempt::Busy => {
            // Visible at the default `warn` filter; the skip is the one
            // scheduling decision an operator should be able to see.
            tracing::warn!(task = task_name, "already running, skipping");
            return Ok(0);
        }
    };

    let runtime_env = env.runtime_env(&spec.action.env);
    let started_at = Utc::now();
    let outcome = executor::execute(&spec.action, &runtime_env).await;
    let finished_at = Utc::now();

    // Recording must succeed: an unrecorded run breaks the streak
    // accounting, so a store failure aborts loudly.
    let store = HistoryStore::open(&paths.db_path())?;
    let run_id = store.record_run(NewRun {
        task_name,
        started_at,
        finished_at,
        exit_code: outcome.exit_code,
        stdout: &outcome.stdout,
        stderr: &outcome.stderr,
    })?;
    tracing::info!(
        task = task_name,
        run_id,
        exit_code = outcome.exit_code,
        "run recorded"
    );

    // Last-run output file, used as the notification click target.
    let output_file = paths.output_file(task_name);
    let output_text = if !outcome.stdout.is_empty() {
        outcome.stdout.as_str()
    } else if !outcome.stderr.is_empty() {
        outcome.stderr.as_str()
    } else {
        "(no output)"
    };
    std::fs::write(&output_file, output_text)?;

    let title = spec.notify_title();
    if outcome.exit_code == 0 {
        if spec.notify.on_success {
            let body = if outcome.stdout.is_empty() {
                "Completed successfully".to_string()
            } else {
                clip(&outcome.stdout, NOTIFY_BODY_CHARS)
            };
            send(notifier, title, &body, Some(&output_file)).await;
        }
    } else if spec.notify.on_failure {
        let streak = store.consecutive_failures(task_name)?;
        let body = if outcome.stderr.is_empty() {
            format!("Failed with exit code {}", outcome.exit_code)
        } else {
            clip(&outcome.stderr, NOTIFY_BODY_CHARS)
        };
        send(
            notifier,
            &format!("FAILED ({}x): {}", streak, title),
            &body,
            Some(&output_file),
        )
        .await;

        // Auto-disable fires exactly once, when the streak reaches the
        // ceiling; later failures of an already-disabled task stay quiet.
        let ceiling = spec.notify.max_consecutive_failures;
        if ceiling > 0 && streak == ceiling {
            match unscheduler.unschedule(task_name).await {
                Ok(()) => tracing::warn!(task = task_name, streak, "task auto-disabled"),
                Err(e) => {
                    tracing::warn!(task = task_name, error = %e, "failed to unschedule task")
                }
            }
            send(
                notifier,
                &format!("DISABLED: {}", title),
                &format!("Auto-disabled after {} consecutive failures", streak),
                None,
            )
            .await;
        }
    }

    Ok(outcome.exit_code)
}

/// Fire-and-forget notification dispatch; failures are logged, never
/// propagated as run failures.
async fn send<N: NotifyAdapter>(notifier: &N, title: &str, body: &str, open_path: Option<&Path>) {
    if let Err(e) = notifier.notify(title, body, open_path).await {
        tracing::warn!(title, error = %e, "notification failed");
    }
}

/// First `max_chars` characters of `text`.
fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
