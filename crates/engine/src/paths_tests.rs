// SPDX-License-Identifier: MIT

use super::*;
use tempfile::TempDir;

#[test]
fn layout_paths_hang_off_root() {
    let paths = Paths::new("/state/tempo", "/agents");
    assert_eq!(paths.tasks_dir(), PathBuf::from("/state/tempo/tasks"));
    assert_eq!(paths.locks_dir(), PathBuf::from("/state/tempo/locks"));
    assert_eq!(paths.logs_dir(), PathBuf::from("/state/tempo/logs"));
    assert_eq!(paths.outputs_dir(), PathBuf::from("/state/tempo/outputs"));
    assert_eq!(paths.db_path(), PathBuf::from("/state/tempo/history.db"));
    assert_eq!(paths.env_path(), PathBuf::from("/state/tempo/env"));
    assert_eq!(paths.launch_agents_dir(), Path::new("/agents"));
}

#[test]
fn per_task_file_names() {
    let paths = Paths::new("/state/tempo", "/agents");
    assert_eq!(
        paths.task_file("daily"),
        PathBuf::from("/state/tempo/tasks/daily.toml")
    );
    assert_eq!(
        paths.output_file("daily"),
        PathBuf::from("/state/tempo/outputs/daily.md")
    );
    assert_eq!(
        paths.stdout_log("daily"),
        PathBuf::from("/state/tempo/logs/daily.out.log")
    );
    assert_eq!(
        paths.stderr_log("daily"),
        PathBuf::from("/state/tempo/logs/daily.err.log")
    );
}

#[test]
fn ensure_layout_creates_directories() {
    let dir = TempDir::new().unwrap();
    let paths = Paths::new(dir.path().join("tempo"), dir.path().join("agents"));
    paths.ensure_layout().unwrap();
    assert!(paths.tasks_dir().is_dir());
    assert!(paths.locks_dir().is_dir());
    assert!(paths.logs_dir().is_dir());
    assert!(paths.outputs_dir().is_dir());
    assert!(paths.launch_agents_dir().is_dir());
    // Idempotent
    paths.ensure_layout().unwrap();
}

#[test]
fn expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(expand_tilde("/tmp/x"), PathBuf::from("/tmp/x"));
    assert_eq!(expand_tilde("relative/x"), PathBuf::from("relative/x"));
}

#[test]
fn expand_tilde_resolves_home_prefix() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/notes"), home.join("notes"));
        assert_eq!(expand_tilde("~"), home);
    }
}

#[test]
fn absolutize_makes_relative_paths_absolute() {
    let abs = absolutize("some/dir");
    assert!(abs.is_absolute());
    assert!(abs.ends_with("some/dir"));
    assert_eq!(absolutize("/already/abs"), PathBuf::from("/already/abs"));
}
