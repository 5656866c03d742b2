// SPDX-License-Identifier: MIT

//! `tempo output` - the captured output of a task's most recent run

use anyhow::Result;
use clap::Args;
use tempo_engine::Paths;
use tempo_storage::HistoryStore;

#[derive(Args)]
pub struct OutputArgs {
    /// Task name
    pub name: String,

    /// Show captured stderr instead of stdout
    #[arg(long)]
    pub stderr: bool,

    /// Emit JSON with both streams and the exit code
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: OutputArgs, paths: &Paths) -> Result<()> {
    let store = HistoryStore::open(&paths.db_path())?;
    let Some(run) = store.last_output(&args.name)? else {
        println!("No runs recorded for {}", args.name);
        return Ok(());
    };

    if args.json {
        let doc = serde_json::json!({
            "task": run.task_name,
            "started_at": run.started_at.to_rfc3339(),
            "exit_code": run.exit_code,
            "stdout": run.stdout,
            "stderr": run.stderr,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let stream = if args.stderr { &run.stderr } else { &run.stdout };
    if stream.is_empty() {
        println!("(no output)");
    } else {
        print!("{}", stream);
        if !stream.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
