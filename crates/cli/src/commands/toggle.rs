// SPDX-License-Identifier: MIT

//! `tempo enable` / `tempo disable` - load or unload a task's job
//!
//! Disable unloads the job but keeps the plist and the task file, so a
//! later enable (or an auto-disable recovery) is a plain reload.

use anyhow::{bail, Result};
use clap::Args;
use tempo_engine::{load_job, unload_job, write_job, CapturedEnv, Paths};

#[derive(Args)]
pub struct EnableArgs {
    /// Task name
    pub name: String,
}

#[derive(Args)]
pub struct DisableArgs {
    /// Task name
    pub name: String,
}

pub async fn enable(args: EnableArgs, paths: &Paths) -> Result<()> {
    let spec = super::load_task(paths, &args.name)?;
    let env = CapturedEnv::load_or_capture(paths)?;

    // Regenerate before loading so the job always reflects the current
    // task file and environment snapshot.
    unload_job(paths, &spec.name).await.ok();
    write_job(&spec, &env, paths)?;
    if !load_job(paths, &spec.name).await? {
        bail!("scheduler refused to load {}", spec.name);
    }
    println!("Enabled {}", spec.name);
    Ok(())
}

pub async fn disable(args: DisableArgs, paths: &Paths) -> Result<()> {
    super::load_task(paths, &args.name)?;
    if unload_job(paths, &args.name).await? {
        println!("Disabled {}", args.name);
    } else {
        println!("{} was not scheduled", args.name);
    }
    Ok(())
}
