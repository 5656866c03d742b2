// SPDX-License-Identifier: MIT

//! `tempo list` - registered tasks with schedule and last-run summary

use crate::table::Table;
use anyhow::Result;
use clap::Args;
use tempo_engine::{is_loaded, Paths};
use tempo_storage::{HistoryStore, RunRecord};

#[derive(Args)]
pub struct ListArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(args: ListArgs, paths: &Paths) -> Result<()> {
    let tasks = super::load_tasks(paths)?;
    let store = HistoryStore::open(&paths.db_path())?;

    let mut rows: Vec<(&tempo_task::TaskSpec, bool, Option<RunRecord>)> = Vec::new();
    for spec in &tasks {
        let loaded = is_loaded(&spec.name).await;
        let last = store.recent_runs(Some(&spec.name), 1)?.into_iter().next();
        rows.push((spec, loaded, last));
    }

    if args.json {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|(spec, loaded, last)| {
                serde_json::json!({
                    "name": spec.name,
                    "trigger": super::trigger_summary(&spec.trigger),
                    "action": spec.action.label(),
                    "enabled": spec.enabled,
                    "scheduled": loaded,
                    "last_run": last.as_ref().map(|r| r.started_at.to_rfc3339()),
                    "last_exit": last.as_ref().map(|r| r.exit_code),
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

    let mut table = Table::new(&["NAME", "TRIGGER", "ACTION", "SCHEDULED", "LAST RUN", "EXIT"]);
    for (spec, loaded, last) in &rows {
        table.row(vec![
            spec.name.clone(),
            super::trigger_summary(&spec.trigger),
            spec.action.label().to_string(),
            if *loaded { "yes" } else { "no" }.to_string(),
            last.as_ref()
                .map(|r| super::format_timestamp(&r.started_at))
                .unwrap_or_else(|| "-".to_string()),
            last.as_ref()
                .map(|r| r.exit_code.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
