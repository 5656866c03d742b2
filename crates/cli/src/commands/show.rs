// SPDX-License-Identifier: MIT

//! `tempo show` - one task in detail with its recent runs

use crate::table::{clip, Table};
use anyhow::Result;
use clap::Args;
use tempo_engine::{is_loaded, job_label, Paths};
use tempo_storage::HistoryStore;
use tempo_task::ActionKind;

#[derive(Args)]
pub struct ShowArgs {
    /// Task name
    pub name: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(args: ShowArgs, paths: &Paths) -> Result<()> {
    let spec = super::load_task(paths, &args.name)?;
    let store = HistoryStore::open(&paths.db_path())?;
    let runs = store.recent_runs(Some(&spec.name), 5)?;
    let loaded = is_loaded(&spec.name).await;
    let streak = store.consecutive_failures(&spec.name)?;

    if args.json {
        let doc = serde_json::json!({
            "name": spec.name,
            "description": spec.description,
            "trigger": spec.trigger,
            "action": action_detail(&spec),
            "timeout": spec.action.timeout,
            "working_dir": spec.action.working_dir,
            "enabled": spec.enabled,
            "scheduled": loaded,
            "label": job_label(&spec.name),
            "consecutive_failures": streak,
            "notify": {
                "on_success": spec.notify.on_success,
                "on_failure": spec.notify.on_failure,
                "title": spec.notify_title(),
                "max_consecutive_failures": spec.notify.max_consecutive_failures,
            },
            "recent_runs": runs.iter().map(|r| serde_json::json!({
                "id": r.id,
                "started_at": r.started_at.to_rfc3339(),
                "exit_code": r.exit_code,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", spec.name);
    if !spec.description.is_empty() {
        println!("  {}", spec.description);
    }
    println!("  trigger:    {}", super::trigger_summary(&spec.trigger));
    println!("  action:     {}", action_detail(&spec));
    println!("  timeout:    {}s", spec.action.timeout);
    if let Some(dir) = &spec.action.working_dir {
        println!("  workdir:    {}", dir);
    }
    println!("  label:      {}", job_label(&spec.name));
    println!("  scheduled:  {}", if loaded { "yes" } else { "no" });
    println!(
        "  notify:     success={} failure={} ceiling={}",
        spec.notify.on_success, spec.notify.on_failure, spec.notify.max_consecutive_failures
    );
    if streak > 0 {
        println!("  failing:    {} consecutive", streak);
    }

    if !runs.is_empty() {
        println!();
        let mut table = Table::new(&["ID", "STARTED", "EXIT"]);
        for run in &runs {
            table.row(vec![
                run.id.to_string(),
                super::format_timestamp(&run.started_at),
                run.exit_code.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}

fn action_detail(spec: &tempo_task::TaskSpec) -> String {
    match &spec.action.kind {
        ActionKind::Command(command) => clip(command, 60),
        ActionKind::Agent {
            prompt,
            provider,
            model,
        } => {
            let model = model.as_deref().unwrap_or("default model");
            format!("{} ({}): {}", provider.name(), model, clip(prompt, 40))
        }
    }
}
