//! `tempo run` specs: the scheduler entry point
//!
//! Tasks here either succeed or carry `on_failure = false`, so no spec
//! ever raises a desktop notification.

use crate::prelude::*;
use serial_test::serial;

const FAILING_TASK: &str = r#"
name = "flaky"
enabled = false

[trigger]
type = "interval"
interval_seconds = 3600

[action]
command = "echo broken >&2; exit 7"

[notify]
on_failure = false
"#;

#[test]
#[serial]
fn run_executes_and_records() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo().args(&["run", "echo-task"]).passes();

    home.tempo()
        .args(&["logs", "echo-task"])
        .passes()
        .stdout_has("echo-task")
        .stdout_has("0");
    home.tempo()
        .args(&["output", "echo-task"])
        .passes()
        .stdout_has("hello from tempo");
}

#[test]
#[serial]
fn run_propagates_the_exit_code() {
    let home = Home::new();
    let file = home.task_file("flaky.toml", FAILING_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo().args(&["run", "flaky"]).run().code(7);

    home.tempo()
        .args(&["output", "flaky", "--stderr"])
        .passes()
        .stdout_has("broken");
}

#[test]
#[serial]
fn timed_out_run_reports_124() {
    let home = Home::new();
    let file = home.task_file(
        "slow.toml",
        r#"
name = "slow"
enabled = false

[trigger]
type = "interval"
interval_seconds = 3600

[action]
command = "sleep 5"
timeout = 1

[notify]
on_failure = false
"#,
    );
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo().args(&["run", "slow"]).run().code(124);
}

#[test]
#[serial]
fn contended_run_skips_with_a_visible_diagnostic() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    // Hold the task's lock, as a live run would
    let locks = home.tempo_home().join("locks");
    std::fs::create_dir_all(&locks).unwrap();
    let held = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(locks.join("echo-task.lock"))
        .unwrap();
    fs2::FileExt::try_lock_exclusive(&held).unwrap();

    // The skip succeeds and says so at the default `warn` log level
    home.tempo()
        .env("TEMPO_LOG", "warn")
        .args(&["run", "echo-task"])
        .passes()
        .stderr_has("already running");
    drop(held);

    home.tempo()
        .args(&["logs"])
        .passes()
        .stdout_has("No runs recorded");
}

#[test]
#[serial]
fn run_unknown_task_fails() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    home.tempo()
        .args(&["run", "ghost"])
        .fails()
        .stderr_has("Error");
}

#[test]
#[serial]
fn reruns_append_to_history() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo().args(&["run", "echo-task"]).passes();
    home.tempo().args(&["run", "echo-task"]).passes();

    let out = home
        .tempo()
        .args(&["logs", "echo-task", "--json"])
        .passes()
        .stdout();
    let items: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 2);
    // Newest first
    assert!(items[0]["id"].as_i64().unwrap() > items[1]["id"].as_i64().unwrap());
}
