// SPDX-License-Identifier: MIT

//! Desktop notification adapter.
//!
//! On macOS the preferred transport is `terminal-notifier`, which supports
//! a click-to-open target via `-open`; when it is not installed the adapter
//! falls back to `notify-rust`. Other platforms always use `notify-rust`,
//! whose backends have no portable click action, so `open_path` is only
//! honored on the terminal-notifier path.
//!
//! With `notify-rust` on macOS (`mac-notification-sys` Cocoa bindings), the
//! first notification triggers `ensure_application_set()` which runs an
//! AppleScript to look up a bundle identifier. In a launchd-spawned process
//! without Automation permissions, that AppleScript blocks forever. We
//! pre-set the bundle identifier at construction time to bypass the lookup.
//!
//! Delivery is synchronous with a hard bound: the caller's process may exit
//! right after a run completes, so a detached send would be lost. A
//! delivery that outlives [`NOTIFY_TIMEOUT`] is reported as a failure.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Wall-clock bound on one delivery attempt.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(
        &self,
        title: &str,
        body: &str,
        open_path: Option<&Path>,
    ) -> Result<(), NotifyError> {
        #[cfg(target_os = "macos")]
        {
            match send_terminal_notifier(title, body, open_path).await? {
                Delivery::Sent => return Ok(()),
                Delivery::Unavailable => {}
            }
        }

        if let Some(path) = open_path {
            // notify-rust backends cannot express a click target
            tracing::debug!(path = %path.display(), "notification output file");
        }
        let title = title.to_string();
        let body = body.to_string();
        deliver_blocking(
            move || {
                tracing::info!(%title, %body, "sending desktop notification");
                notify_rust::Notification::new()
                    .summary(&title)
                    .body(&body)
                    .show()
                    .map(|_| ())
                    .map_err(|e| NotifyError::SendFailed(e.to_string()))
            },
            NOTIFY_TIMEOUT,
        )
        .await
    }
}

/// Outcome of attempting the terminal-notifier transport.
#[cfg(target_os = "macos")]
enum Delivery {
    Sent,
    /// The binary is not installed; the caller should fall back.
    Unavailable,
}

#[cfg(target_os = "macos")]
async fn send_terminal_notifier(
    title: &str,
    body: &str,
    open_path: Option<&Path>,
) -> Result<Delivery, NotifyError> {
    use crate::subprocess::{run_with_timeout, SubprocessError};

    let mut cmd = tokio::process::Command::new("terminal-notifier");
    cmd.arg("-title")
        .arg(title)
        .arg("-message")
        .arg(body)
        .arg("-group")
        .arg("tempo");
    if let Some(path) = open_path {
        cmd.arg("-open").arg(format!("file://{}", path.display()));
    }

    match run_with_timeout(cmd, NOTIFY_TIMEOUT, "terminal-notifier").await {
        Ok(output) if output.status.success() => Ok(Delivery::Sent),
        Ok(output) => Err(NotifyError::SendFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
        Err(SubprocessError::Spawn { .. }) => Ok(Delivery::Unavailable),
        Err(err @ SubprocessError::Timeout { .. }) => {
            Err(NotifyError::SendFailed(err.to_string()))
        }
    }
}

/// Run a blocking delivery closure to completion, bounded by `timeout`.
///
/// `notify_rust::Notification::show()` is synchronous, so it goes on the
/// blocking pool; the handle is awaited rather than detached, because the
/// supervisor's process exits as soon as the run returns and a queued
/// blocking task would be dropped with it.
async fn deliver_blocking<F>(task: F, timeout: Duration) -> Result<(), NotifyError>
where
    F: FnOnce() -> Result<(), NotifyError> + Send + 'static,
{
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(task)).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(NotifyError::SendFailed(join_err.to_string())),
        Err(_elapsed) => Err(NotifyError::SendFailed(format!(
            "notification delivery timed out after {}s",
            timeout.as_secs()
        ))),
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
