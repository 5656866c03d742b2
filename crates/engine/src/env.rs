// SPDX-License-Identifier: MIT

//! Captured environment baseline
//!
//! launchd-triggered executions do not inherit an interactive shell's
//! environment, so the engine captures a curated allow-list once at
//! initialization time and reuses that snapshot for every run and every
//! compiled plist. Task-level `env` overrides layer on top per run; they
//! never replace the baseline wholesale.

use crate::Paths;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Variables captured from the interactive environment at init time.
pub const ENV_ALLOWLIST: [&str; 5] = ["PATH", "HOME", "SHELL", "USER", "LANG"];

/// Key under which the absolute path to the tempo binary is stored.
pub const BIN_ENV_KEY: &str = "TEMPO_BIN";

/// Immutable snapshot of the curated environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedEnv {
    vars: BTreeMap<String, String>,
}

impl CapturedEnv {
    /// Capture the allow-listed variables plus the engine's own binary path
    /// from the current process environment.
    pub fn capture() -> Self {
        let mut vars = BTreeMap::new();
        for key in ENV_ALLOWLIST {
            if let Ok(value) = std::env::var(key) {
                if !value.is_empty() {
                    vars.insert(key.to_string(), value);
                }
            }
        }
        if let Ok(exe) = std::env::current_exe() {
            vars.insert(BIN_ENV_KEY.to_string(), exe.display().to_string());
        }
        Self { vars }
    }

    /// Parse a snapshot from `KEY=VALUE` lines.
    pub fn parse(content: &str) -> Self {
        let mut vars = BTreeMap::new();
        for line in content.lines() {
            if let Some((key, value)) = line.split_once('=') {
                vars.insert(key.to_string(), value.to_string());
            }
        }
        Self { vars }
    }

    /// Load the snapshot from the env file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    /// Persist the snapshot as `KEY=VALUE` lines.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let mut content = String::new();
        for (key, value) in &self.vars {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }
        std::fs::write(path, content)
    }

    /// Load the durable snapshot, capturing and persisting one if the env
    /// file does not exist yet.
    pub fn load_or_capture(paths: &Paths) -> std::io::Result<Self> {
        let path = paths.env_path();
        if path.exists() {
            Self::load(&path)
        } else {
            let env = Self::capture();
            env.save(&path)?;
            Ok(env)
        }
    }

    /// Absolute path to the tempo binary recorded at capture time.
    pub fn bin_path(&self) -> Option<&str> {
        self.vars.get(BIN_ENV_KEY).map(String::as_str)
    }

    /// The baseline variables without the binary-path bookkeeping key.
    pub fn base_vars(&self) -> BTreeMap<String, String> {
        let mut vars = self.vars.clone();
        vars.remove(BIN_ENV_KEY);
        vars
    }

    /// The per-run process environment: baseline layered with task-level
    /// overrides.
    pub fn runtime_env(&self, overrides: &HashMap<String, String>) -> BTreeMap<String, String> {
        let mut vars = self.base_vars();
        for (key, value) in overrides {
            vars.insert(key.clone(), value.clone());
        }
        vars
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
