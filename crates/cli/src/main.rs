// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tempo - declarative task scheduling for launchd

mod commands;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    add, clean, init, list, logs, output, refresh, remove, run, show, status, toggle, validate,
};
use tempo_engine::Paths;

#[derive(Parser)]
#[command(
    name = "tempo",
    version,
    about = "Declarative task scheduling for launchd"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the tempo home directory
    Init,
    /// Register a task file and schedule it
    Add(add::AddArgs),
    /// Unschedule a task and delete its registration
    Remove(remove::RemoveArgs),
    /// Load a task's job into the scheduler
    Enable(toggle::EnableArgs),
    /// Unload a task's job from the scheduler
    Disable(toggle::DisableArgs),
    /// List registered tasks
    List(list::ListArgs),
    /// Show one task in detail
    Show(show::ShowArgs),
    /// Show recent run history
    Logs(logs::LogsArgs),
    /// Show the captured output of a task's last run
    Output(output::OutputArgs),
    /// Execute a task once (the scheduler entry point)
    Run(run::RunArgs),
    /// Validate a task file without registering it
    Validate(validate::ValidateArgs),
    /// Show scheduling and lock state for all tasks
    Status(status::StatusArgs),
    /// Re-capture the environment and regenerate every job
    Refresh,
    /// Prune old history and stale raw logs
    Clean(clean::CleanArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();
    match dispatch().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("TEMPO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Format an anyhow error, skipping the "Caused by" chain when every
/// source message already appears in the top-level Display (common with
/// thiserror's `#[error("... {0}")]` + `#[from]` variants).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        top
    } else {
        format!("{:#}", err)
    }
}

/// Parse and dispatch. Returns the process exit code: the run's exit
/// code for `tempo run`, zero for everything else that succeeds.
async fn dispatch() -> Result<i32> {
    let cli = Cli::parse();
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(0);
        }
    };

    let paths = Paths::from_env();
    match command {
        Commands::Init => init::handle(&paths)?,
        Commands::Add(args) => add::handle(args, &paths).await?,
        Commands::Remove(args) => remove::handle(args, &paths).await?,
        Commands::Enable(args) => toggle::enable(args, &paths).await?,
        Commands::Disable(args) => toggle::disable(args, &paths).await?,
        Commands::List(args) => list::handle(args, &paths).await?,
        Commands::Show(args) => show::handle(args, &paths).await?,
        Commands::Logs(args) => logs::handle(args, &paths)?,
        Commands::Output(args) => output::handle(args, &paths)?,
        Commands::Run(args) => return run::handle(args, &paths).await,
        Commands::Validate(args) => validate::handle(args)?,
        Commands::Status(args) => status::handle(args, &paths).await?,
        Commands::Refresh => refresh::handle(&paths).await?,
        Commands::Clean(args) => clean::handle(args, &paths)?,
    }
    Ok(0)
}
