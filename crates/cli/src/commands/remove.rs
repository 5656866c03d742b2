// SPDX-License-Identifier: MIT

//! `tempo remove` - unschedule a task and delete its registration

use anyhow::{bail, Result};
use clap::Args;
use tempo_engine::{remove_job, unload_job, Paths};

#[derive(Args)]
pub struct RemoveArgs {
    /// Task name
    pub name: String,
}

pub async fn handle(args: RemoveArgs, paths: &Paths) -> Result<()> {
    let task_path = paths.task_file(&args.name);
    if !task_path.exists() {
        bail!("unknown task: {}", args.name);
    }

    // Unload before removing the plist; failures here are tolerable
    // since the plist deletion makes the job unreloadable anyway.
    unload_job(paths, &args.name).await.ok();
    remove_job(paths, &args.name)?;
    std::fs::remove_file(&task_path)?;

    let output = paths.output_file(&args.name);
    if output.exists() {
        std::fs::remove_file(output)?;
    }

    println!("Removed {}", args.name);
    Ok(())
}
