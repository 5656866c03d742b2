//! Registration lifecycle specs: init, add, list, show, remove

use crate::prelude::*;

#[test]
fn init_creates_the_layout() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes().stdout_has("Initialized");
    assert!(home.tempo_home().join("tasks").is_dir());
    assert!(home.tempo_home().join("locks").is_dir());
    assert!(home.tempo_home().join("history.db").is_file());
    assert!(home.tempo_home().join("env").is_file());
}

#[test]
fn add_registers_a_task_and_writes_its_job() {
    let home = Home::new();
    let file = home.task_file("report.toml", CRON_TASK);
    home.tempo()
        .args(&["add", file.to_str().unwrap()])
        .passes()
        .stdout_has("Added daily-report");

    assert!(home.tempo_home().join("tasks/daily-report.toml").is_file());
    let plist = home.agents_dir().join("com.tempo.daily-report.plist");
    let body = std::fs::read_to_string(plist).unwrap();
    assert!(body.contains("StartCalendarInterval"));
    assert!(body.contains("<string>run</string>"));
}

#[test]
fn add_rejects_an_invalid_file() {
    let home = Home::new();
    let file = home.task_file("bad.toml", "name = \"\"\n");
    home.tempo().args(&["add", file.to_str().unwrap()]).fails();
    assert!(!home.tempo_home().join("tasks").join(".toml").exists());
}

#[test]
fn list_shows_registered_tasks() {
    let home = Home::new();
    let file = home.task_file("report.toml", CRON_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo()
        .args(&["list"])
        .passes()
        .stdout_has("daily-report")
        .stdout_has("cron");
}

#[test]
fn list_json_is_parseable() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    let out = home.tempo().args(&["list", "--json"]).passes().stdout();
    let items: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(items[0]["name"], "echo-task");
    assert_eq!(items[0]["enabled"], false);
    assert!(items[0]["last_run"].is_null());
}

#[test]
fn list_with_nothing_registered() {
    let home = Home::new();
    home.tempo()
        .args(&["list"])
        .passes()
        .stdout_has("No tasks registered");
}

#[test]
fn show_displays_task_details() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo()
        .args(&["show", "echo-task"])
        .passes()
        .stdout_has("prints a greeting")
        .stdout_has("every 3600s")
        .stdout_has("com.tempo.echo-task");
}

#[test]
fn show_unknown_task_fails() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    home.tempo()
        .args(&["show", "ghost"])
        .fails()
        .stderr_has("unknown task: ghost");
}

#[test]
fn remove_deletes_the_registration() {
    let home = Home::new();
    let file = home.task_file("report.toml", CRON_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo()
        .args(&["remove", "daily-report"])
        .passes()
        .stdout_has("Removed daily-report");

    assert!(!home.tempo_home().join("tasks/daily-report.toml").exists());
    assert!(!home
        .agents_dir()
        .join("com.tempo.daily-report.plist")
        .exists());
    home.tempo()
        .args(&["list"])
        .passes()
        .stdout_has("No tasks registered");
}

#[test]
fn remove_unknown_task_fails() {
    let home = Home::new();
    home.tempo()
        .args(&["remove", "ghost"])
        .fails()
        .stderr_has("unknown task: ghost");
}

#[test]
fn status_reports_idle_tasks() {
    let home = Home::new();
    let file = home.task_file("echo.toml", ECHO_TASK);
    home.tempo().args(&["add", file.to_str().unwrap()]).passes();

    home.tempo()
        .args(&["status"])
        .passes()
        .stdout_has("echo-task")
        .stdout_has("no");
}
