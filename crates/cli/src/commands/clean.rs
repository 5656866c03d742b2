// SPDX-License-Identifier: MIT

//! `tempo clean` - prune old ledger rows and stale raw log files

use anyhow::Result;
use clap::Args;
use std::time::{Duration, SystemTime};
use tempo_engine::Paths;
use tempo_storage::HistoryStore;

#[derive(Args)]
pub struct CleanArgs {
    /// Age threshold in days
    #[arg(long = "older-than", default_value_t = 30)]
    pub older_than: u64,
}

pub fn handle(args: CleanArgs, paths: &Paths) -> Result<()> {
    let store = HistoryStore::open(&paths.db_path())?;
    let pruned = store.prune_older_than(args.older_than as i64)?;

    let cutoff = SystemTime::now() - Duration::from_secs(args.older_than * 86_400);
    let mut removed = 0usize;
    let logs_dir = paths.logs_dir();
    if logs_dir.exists() {
        for entry in std::fs::read_dir(&logs_dir)? {
            let entry = entry?;
            let modified = entry.metadata()?.modified()?;
            if modified < cutoff {
                std::fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
    }

    println!(
        "Pruned {} run(s), removed {} stale log file(s)",
        pruned, removed
    );
    Ok(())
}
