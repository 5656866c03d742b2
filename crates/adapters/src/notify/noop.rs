// SPDX-License-Identifier: MIT

//! No-op notification adapter for headless or quiet operation

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(
        &self,
        title: &str,
        _body: &str,
        _open_path: Option<&Path>,
    ) -> Result<(), NotifyError> {
        tracing::debug!(%title, "notification suppressed (noop adapter)");
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
