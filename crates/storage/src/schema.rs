// SPDX-License-Identifier: MIT

//! SQLite schema for the run ledger

use rusqlite::Connection;

/// Idempotent schema application.
///
/// Two tables: the append-only run ledger and a last-known-state table
/// keyed by task name (reserved for watch-trigger debouncing).
pub fn apply_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS runs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name   TEXT NOT NULL,
            started_at  TEXT NOT NULL,
            finished_at TEXT,
            exit_code   INTEGER NOT NULL,
            stdout      TEXT NOT NULL DEFAULT '',
            stderr      TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_runs_task ON runs(task_name);

        CREATE TABLE IF NOT EXISTS state (
            task_name   TEXT PRIMARY KEY,
            last_value  TEXT,
            updated_at  TEXT
        );",
    )
}
