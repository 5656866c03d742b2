// SPDX-License-Identifier: MIT

//! Directory layout for tempo state
//!
//! Everything lives under one root (default `~/.config/tempo`, overridable
//! via `TEMPO_HOME`):
//!   `tasks/<name>.toml`   - registered task specs
//!   `locks/<name>.lock`   - per-task advisory lock files
//!   `logs/<name>.out.log` - raw launchd stdout/stderr redirects
//!   `outputs/<name>.md`   - last-run output, notification click target
//!   `history.db`          - SQLite run ledger
//!   `env`                 - captured environment baseline
//!
//! Compiled plists go to the launchd agents directory (default
//! `~/Library/LaunchAgents`, overridable via `TEMPO_LAUNCH_AGENTS_DIR`).

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    root: PathBuf,
    launch_agents: PathBuf,
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>, launch_agents: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            launch_agents: launch_agents.into(),
        }
    }

    /// Resolve the layout from the environment.
    pub fn from_env() -> Self {
        let root = std::env::var_os("TEMPO_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("tempo")
            });
        let launch_agents = std::env::var_os("TEMPO_LAUNCH_AGENTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("Library")
                    .join("LaunchAgents")
            });
        Self::new(root, launch_agents)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    pub fn locks_dir(&self) -> PathBuf {
        self.root.join("locks")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root.join("outputs")
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join("history.db")
    }

    pub fn env_path(&self) -> PathBuf {
        self.root.join("env")
    }

    pub fn launch_agents_dir(&self) -> &Path {
        &self.launch_agents
    }

    pub fn task_file(&self, name: &str) -> PathBuf {
        self.tasks_dir().join(format!("{}.toml", name))
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.outputs_dir().join(format!("{}.md", name))
    }

    pub fn stdout_log(&self, name: &str) -> PathBuf {
        self.logs_dir().join(format!("{}.out.log", name))
    }

    pub fn stderr_log(&self, name: &str) -> PathBuf {
        self.logs_dir().join(format!("{}.err.log", name))
    }

    /// Create every directory in the layout.
    pub fn ensure_layout(&self) -> std::io::Result<()> {
        for dir in [
            self.root.clone(),
            self.tasks_dir(),
            self.locks_dir(),
            self.logs_dir(),
            self.outputs_dir(),
            self.launch_agents.clone(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Expand a leading `~` or `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Expand tildes and make the path absolute against the current directory.
///
/// Purely lexical: the path does not have to exist, and symlinks are not
/// resolved.
pub fn absolutize(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
