// SPDX-License-Identifier: MIT

//! `tempo add` - register a task file and schedule it

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tempo_engine::{load_job, unload_job, write_job, CapturedEnv, Paths};
use tempo_task::load_task_file;

#[derive(Args)]
pub struct AddArgs {
    /// Path to a task TOML file
    pub file: PathBuf,
}

pub async fn handle(args: AddArgs, paths: &Paths) -> Result<()> {
    paths.ensure_layout()?;
    let spec = load_task_file(&args.file)?;

    let dest = paths.task_file(&spec.name);
    std::fs::copy(&args.file, &dest)
        .with_context(|| format!("copying task file to {}", dest.display()))?;

    // Re-adding an already-scheduled task replaces its job cleanly.
    unload_job(paths, &spec.name).await.ok();

    let env = CapturedEnv::load_or_capture(paths)?;
    let plist = write_job(&spec, &env, paths)?;
    tracing::debug!(plist = %plist.display(), "job written");

    if !spec.enabled {
        println!(
            "Added {} (disabled; run `tempo enable {}` to schedule it)",
            spec.name, spec.name
        );
    } else if load_job(paths, &spec.name).await? {
        println!("Added and scheduled {}", spec.name);
    } else {
        println!("Added {} (job written but not loaded)", spec.name);
    }
    Ok(())
}
