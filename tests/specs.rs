//! Behavioral specifications for the tempo CLI.
//!
//! Black-box tests: they invoke the built binary against a throwaway
//! TEMPO_HOME and verify stdout, stderr, and exit codes. Nothing here
//! talks to a live launchd; scheduling state is observed through the
//! files the CLI writes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/validate.rs"]
mod validate;

#[path = "specs/lifecycle.rs"]
mod lifecycle;

#[path = "specs/run.rs"]
mod run;

#[path = "specs/history.rs"]
mod history;
