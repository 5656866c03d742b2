// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Task execution engine: locking, execution, supervision, and the
//! launchd trigger compiler

mod env;
mod error;
mod executor;
mod launchd;
mod lock;
mod paths;
mod plist;
mod runner;

pub use env::{CapturedEnv, BIN_ENV_KEY, ENV_ALLOWLIST};
pub use error::RunError;
pub use executor::{execute, ExecOutcome, TIMEOUT_EXIT_CODE};
pub use launchd::{
    compile, is_loaded, job_label, load_job, plist_path, remove_job, unload_job, write_job,
    LaunchdError, LaunchdUnscheduler, Unscheduler, LABEL_PREFIX,
};
pub use lock::{acquire, is_locked, LockAttempt, RunLock};
pub use paths::{absolutize, expand_tilde, Paths};
pub use plist::Value as PlistValue;
pub use runner::run_task;
