// SPDX-License-Identifier: MIT

//! Recording notification adapter for tests

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyCall {
    pub title: String,
    pub body: String,
    pub open_path: Option<PathBuf>,
}

/// Records every notification instead of displaying it
#[derive(Clone, Default)]
pub struct FakeNotifyAdapter {
    calls: Arc<Mutex<Vec<NotifyCall>>>,
    fail: bool,
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter whose `notify` always fails, for error-path tests.
    pub fn failing() -> Self {
        Self {
            calls: Arc::default(),
            fail: true,
        }
    }

    /// All notifications recorded so far.
    pub fn calls(&self) -> Vec<NotifyCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl NotifyAdapter for FakeNotifyAdapter {
    async fn notify(
        &self,
        title: &str,
        body: &str,
        open_path: Option<&Path>,
    ) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::SendFailed("fake adapter failure".to_string()));
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(NotifyCall {
                title: title.to_string(),
                body: body.to_string(),
                open_path: open_path.map(Path::to_path_buf),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
