// SPDX-License-Identifier: MIT

//! `tempo run` - execute a task once
//!
//! The single entry point the scheduler invokes; humans can call it too
//! for an out-of-band run. The process exit code is the run's exit code
//! so the scheduler's view of success matches the ledger's.

use anyhow::Result;
use clap::Args;
use tempo_adapters::DesktopNotifyAdapter;
use tempo_engine::{run_task, LaunchdUnscheduler, Paths};

#[derive(Args)]
pub struct RunArgs {
    /// Task name
    pub name: String,
}

pub async fn handle(args: RunArgs, paths: &Paths) -> Result<i32> {
    let notifier = DesktopNotifyAdapter::new();
    let unscheduler = LaunchdUnscheduler::new(paths.clone());
    let code = run_task(paths, &args.name, &notifier, &unscheduler).await?;
    Ok(code)
}
