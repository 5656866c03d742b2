//! Ledger inspection specs: logs, output, clean

use crate::prelude::*;

#[test]
fn logs_with_no_runs() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    home.tempo()
        .args(&["logs"])
        .passes()
        .stdout_has("No runs recorded");
}

#[test]
fn output_with_no_runs() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    home.tempo()
        .args(&["output", "ghost"])
        .passes()
        .stdout_has("No runs recorded for ghost");
}

#[test]
fn logs_json_with_no_runs_is_an_empty_array() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    let out = home.tempo().args(&["logs", "--json"]).passes().stdout();
    let items: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(items, serde_json::json!([]));
}

#[test]
fn clean_on_a_fresh_ledger_prunes_nothing() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    home.tempo()
        .args(&["clean", "--older-than", "7"])
        .passes()
        .stdout_has("Pruned 0 run(s)");
}

#[test]
fn status_json_with_nothing_registered() {
    let home = Home::new();
    home.tempo().args(&["init"]).passes();
    let out = home.tempo().args(&["status", "--json"]).passes().stdout();
    let items: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(items, serde_json::json!([]));
}
