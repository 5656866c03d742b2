// SPDX-License-Identifier: MIT

//! Notification adapters
//!
//! Notifications are best-effort and fire-and-forget: a failure to notify
//! is never propagated as a run failure.

mod desktop;
mod noop;

pub use desktop::DesktopNotifyAdapter;
pub use noop::NoOpNotifyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending notifications
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send a notification with a title, a body, and an optional file to
    /// open when the notification is interacted with.
    async fn notify(
        &self,
        title: &str,
        body: &str,
        open_path: Option<&Path>,
    ) -> Result<(), NotifyError>;
}
