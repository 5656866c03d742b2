// SPDX-License-Identifier: MIT

//! `tempo status` - live scheduling and lock state per task
//!
//! "RUNNING" probes the task's lock file, so it reflects a run in flight
//! right now rather than anything the ledger knows about.

use crate::table::Table;
use anyhow::Result;
use clap::Args;
use tempo_engine::{is_loaded, is_locked, Paths};
use tempo_storage::HistoryStore;

#[derive(Args)]
pub struct StatusArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(args: StatusArgs, paths: &Paths) -> Result<()> {
    let tasks = super::load_tasks(paths)?;
    let store = HistoryStore::open(&paths.db_path())?;

    let mut rows = Vec::new();
    for spec in &tasks {
        let scheduled = is_loaded(&spec.name).await;
        let running = is_locked(&paths.locks_dir(), &spec.name)?;
        let streak = store.consecutive_failures(&spec.name)?;
        rows.push((spec, scheduled, running, streak));
    }

    if args.json {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|(spec, scheduled, running, streak)| {
                serde_json::json!({
                    "name": spec.name,
                    "scheduled": scheduled,
                    "running": running,
                    "consecutive_failures": streak,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No tasks registered");
        return Ok(());
    }

    let mut table = Table::new(&["NAME", "SCHEDULED", "RUNNING", "FAIL STREAK"]);
    for (spec, scheduled, running, streak) in &rows {
        table.row(vec![
            spec.name.clone(),
            if *scheduled { "yes" } else { "no" }.to_string(),
            if *running { "yes" } else { "no" }.to_string(),
            if *streak > 0 {
                streak.to_string()
            } else {
                "-".to_string()
            },
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
