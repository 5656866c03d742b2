// SPDX-License-Identifier: MIT

//! `tempo refresh` - re-capture the environment and regenerate every job
//!
//! The recovery hatch after a PATH change, a binary move, or an OS
//! upgrade that invalidated the captured snapshot.

use anyhow::Result;
use tempo_engine::{load_job, unload_job, write_job, CapturedEnv, Paths};

pub async fn handle(paths: &Paths) -> Result<()> {
    paths.ensure_layout()?;

    let env = CapturedEnv::capture();
    env.save(&paths.env_path())?;

    let tasks = super::load_tasks(paths)?;
    let mut scheduled = 0usize;
    for spec in &tasks {
        unload_job(paths, &spec.name).await.ok();
        write_job(spec, &env, paths)?;
        if spec.enabled && load_job(paths, &spec.name).await? {
            scheduled += 1;
        }
    }

    println!(
        "Refreshed {} task(s), {} scheduled",
        tasks.len(),
        scheduled
    );
    Ok(())
}
