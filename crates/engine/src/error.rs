// SPDX-License-Identifier: MIT

//! Error types for the run supervisor

use thiserror::Error;

/// Hard failures of a supervised run.
///
/// Action-level failures (timeout, crash, missing binary) never surface
/// here; they are captured into the run record. Only configuration
/// problems and recording faults abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] tempo_task::ParseError),

    /// The run happened but could not be persisted. Loudly surfaced
    /// because an unrecorded run silently breaks the failure-streak
    /// accounting.
    #[error("failed to record run: {0}")]
    Store(#[from] tempo_storage::StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
