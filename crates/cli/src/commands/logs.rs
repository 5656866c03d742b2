// SPDX-License-Identifier: MIT

//! `tempo logs` - recent run history from the ledger

use crate::table::Table;
use anyhow::Result;
use clap::Args;
use tempo_engine::Paths;
use tempo_storage::HistoryStore;

#[derive(Args)]
pub struct LogsArgs {
    /// Task name (all tasks when omitted)
    pub name: Option<String>,

    /// Number of runs to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: LogsArgs, paths: &Paths) -> Result<()> {
    let store = HistoryStore::open(&paths.db_path())?;
    let runs = store.recent_runs(args.name.as_deref(), args.limit)?;

    if args.json {
        let items: Vec<serde_json::Value> = runs
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "task": r.task_name,
                    "started_at": r.started_at.to_rfc3339(),
                    "finished_at": r.finished_at.map(|t| t.to_rfc3339()),
                    "exit_code": r.exit_code,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if runs.is_empty() {
        println!("No runs recorded");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "TASK", "STARTED", "EXIT"]);
    for run in &runs {
        table.row(vec![
            run.id.to_string(),
            run.task_name.clone(),
            super::format_timestamp(&run.started_at),
            run.exit_code.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
