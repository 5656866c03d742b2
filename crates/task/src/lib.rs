// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Task specification model and TOML parsing

mod action;
mod cron;
mod parser;
mod provider;
mod spec;

pub use action::{ActionKind, ActionSpec, DEFAULT_TIMEOUT_SECS};
pub use cron::CronSchedule;
pub use parser::{load_task_file, parse_task, ParseError};
pub use provider::Provider;
pub use spec::{NotifyPolicy, SpecError, TaskSpec, Trigger};
