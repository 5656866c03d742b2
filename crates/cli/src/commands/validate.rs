// SPDX-License-Identifier: MIT

//! `tempo validate` - parse a task file and report without registering it

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tempo_task::load_task_file;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a task TOML file
    pub file: PathBuf,
}

pub fn handle(args: ValidateArgs) -> Result<()> {
    let spec = load_task_file(&args.file)?;
    println!(
        "OK: {} ({} trigger, {} action)",
        spec.name,
        spec.trigger.kind(),
        spec.action.label()
    );
    Ok(())
}
