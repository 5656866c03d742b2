//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// An isolated tempo installation rooted in a temp directory.
///
/// Every command inherits `TEMPO_HOME` and `TEMPO_LAUNCH_AGENTS_DIR`
/// pointing inside it, so specs never touch the real user layout.
pub struct Home {
    root: TempDir,
}

impl Home {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn tempo_home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.root.path().join("agents")
    }

    /// Write a task file outside the managed layout, as a user would
    /// before running `tempo add`.
    pub fn task_file(&self, file_name: &str, body: &str) -> PathBuf {
        let path = self.root.path().join(file_name);
        std::fs::write(&path, body).unwrap();
        path
    }

    pub fn tempo(&self) -> Tempo {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin("tempo"));
        cmd.env("TEMPO_HOME", self.tempo_home());
        cmd.env("TEMPO_LAUNCH_AGENTS_DIR", self.agents_dir());
        cmd.env("TEMPO_LOG", "error");
        Tempo { cmd }
    }
}

/// Fluent builder around one CLI invocation.
pub struct Tempo {
    cmd: Command,
}

impl Tempo {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Override an environment variable for this invocation.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn run(mut self) -> Spec {
        Spec {
            output: self.cmd.output().unwrap(),
        }
    }

    pub fn passes(self) -> Spec {
        let spec = self.run();
        assert!(
            spec.output.status.success(),
            "expected success\nstdout: {}\nstderr: {}",
            spec.stdout(),
            spec.stderr()
        );
        spec
    }

    pub fn fails(self) -> Spec {
        let spec = self.run();
        assert!(
            !spec.output.status.success(),
            "expected failure\nstdout: {}",
            spec.stdout()
        );
        spec
    }
}

/// Captured result of one invocation, with assertion helpers.
pub struct Spec {
    output: Output,
}

impl Spec {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn exit_code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(
            self.exit_code(),
            expected,
            "stdout: {}\nstderr: {}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {:?}\nstdout: {}",
            needle,
            self.stdout()
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {:?}\nstderr: {}",
            needle,
            self.stderr()
        );
        self
    }
}

/// A valid task that never notifies and is not auto-scheduled, so specs
/// stay silent and portable.
pub const ECHO_TASK: &str = r#"
name = "echo-task"
description = "prints a greeting"
enabled = false

[trigger]
type = "interval"
interval_seconds = 3600

[action]
command = "echo hello from tempo"
"#;

pub const CRON_TASK: &str = r#"
name = "daily-report"
enabled = false

[trigger]
type = "cron"
cron = { minute = 0, hour = 9 }

[action]
command = "echo report"
"#;
