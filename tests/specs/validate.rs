//! `tempo validate` specs

use crate::prelude::*;

#[test]
fn accepts_a_complete_task() {
    let home = Home::new();
    let file = home.task_file("report.toml", CRON_TASK);
    home.tempo()
        .args(&["validate", file.to_str().unwrap()])
        .passes()
        .stdout_has("OK: daily-report")
        .stdout_has("cron trigger");
}

#[test]
fn rejects_conflicting_action_modes() {
    let home = Home::new();
    let file = home.task_file(
        "bad.toml",
        r#"
name = "bad"

[trigger]
type = "interval"
interval_seconds = 60

[action]
command = "echo hi"
prompt = "also do this"
"#,
    );
    home.tempo()
        .args(&["validate", file.to_str().unwrap()])
        .fails()
        .stderr_has("command");
}

#[test]
fn rejects_an_out_of_range_cron_field() {
    let home = Home::new();
    let file = home.task_file(
        "bad.toml",
        r#"
name = "bad"

[trigger]
type = "cron"
cron = { hour = 99 }

[action]
command = "echo hi"
"#,
    );
    home.tempo()
        .args(&["validate", file.to_str().unwrap()])
        .fails()
        .stderr_has("hour");
}

#[test]
fn rejects_an_unknown_provider() {
    let home = Home::new();
    let file = home.task_file(
        "bad.toml",
        r#"
name = "bad"

[trigger]
type = "interval"
interval_seconds = 60

[action]
prompt = "summarize"
provider = "skynet"
"#,
    );
    home.tempo()
        .args(&["validate", file.to_str().unwrap()])
        .fails()
        .stderr_has("skynet");
}

#[test]
fn rejects_a_missing_file() {
    let home = Home::new();
    home.tempo()
        .args(&["validate", "/nonexistent/task.toml"])
        .fails();
}
