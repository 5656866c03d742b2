// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Run history storage for tempo

mod history;
mod schema;

pub use history::{HistoryStore, NewRun, RunRecord, StoreError, OUTPUT_CAP_BYTES};
