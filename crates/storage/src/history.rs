// SPDX-License-Identifier: MIT

//! Append-only run ledger and derived queries
//!
//! Backed by a single SQLite database file. Rows are never mutated; the
//! only delete path is explicit age-based pruning. `id` is the
//! authoritative recency ordering within a task.

use crate::schema::apply_schema;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Captured stdout/stderr are truncated to this many bytes before
/// persistence. A storage-size guarantee, not a display limit.
pub const OUTPUT_CAP_BYTES: usize = 5120;

/// Errors from the history store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One completed execution attempt
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub id: i64,
    pub task_name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A finished run about to be recorded
#[derive(Debug, Clone)]
pub struct NewRun<'a> {
    pub task_name: &'a str,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub exit_code: i32,
    pub stdout: &'a str,
    pub stderr: &'a str,
}

/// SQLite-backed run history
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Append one run to the ledger. Returns the assigned run id.
    ///
    /// stdout/stderr are truncated to [`OUTPUT_CAP_BYTES`] before the
    /// insert so the cap holds in storage, not just at display time.
    pub fn record_run(&self, run: NewRun<'_>) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO runs (task_name, started_at, finished_at, exit_code, stdout, stderr)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                run.task_name,
                timestamp(run.started_at),
                timestamp(run.finished_at),
                run.exit_code,
                truncate_output(run.stdout),
                truncate_output(run.stderr),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Recent runs, newest first, optionally filtered by task name.
    pub fn recent_runs(
        &self,
        task_name: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RunRecord>, StoreError> {
        let mut records = Vec::new();
        match task_name {
            Some(name) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, task_name, started_at, finished_at, exit_code, stdout, stderr
                     FROM runs WHERE task_name = ?1 ORDER BY id DESC LIMIT ?2",
                )?;
                let rows = stmt.query_map(params![name, limit as i64], row_to_record)?;
                for row in rows {
                    records.push(row?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, task_name, started_at, finished_at, exit_code, stdout, stderr
                     FROM runs ORDER BY id DESC LIMIT ?1",
                )?;
                let rows = stmt.query_map(params![limit as i64], row_to_record)?;
                for row in rows {
                    records.push(row?);
                }
            }
        }
        Ok(records)
    }

    /// The most recent run for a task, if any.
    pub fn last_output(&self, task_name: &str) -> Result<Option<RunRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, task_name, started_at, finished_at, exit_code, stdout, stderr
                 FROM runs WHERE task_name = ?1 ORDER BY id DESC LIMIT 1",
                params![task_name],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Count consecutive non-zero exit codes scanning newest to oldest,
    /// stopping at the first success or the start of history.
    pub fn consecutive_failures(&self, task_name: &str) -> Result<u32, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT exit_code FROM runs WHERE task_name = ?1 ORDER BY id DESC")?;
        let codes = stmt.query_map(params![task_name], |row| row.get::<_, i32>(0))?;
        let mut streak = 0;
        for code in codes {
            if code? != 0 {
                streak += 1;
            } else {
                break;
            }
        }
        Ok(streak)
    }

    /// Delete runs started strictly before `now - days`. Returns the
    /// number of deleted rows.
    pub fn prune_older_than(&self, days: i64) -> Result<usize, StoreError> {
        let cutoff = timestamp(Utc::now() - Duration::days(days));
        let deleted = self
            .conn
            .execute("DELETE FROM runs WHERE started_at < ?1", params![cutoff])?;
        if deleted > 0 {
            tracing::info!(deleted, days, "pruned old runs");
        }
        Ok(deleted)
    }

    /// Last stored state value for a task.
    pub fn get_state(&self, task_name: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT last_value FROM state WHERE task_name = ?1",
                params![task_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Upsert the state value for a task.
    pub fn set_state(&self, task_name: &str, value: &str) -> Result<(), StoreError> {
        let now = timestamp(Utc::now());
        self.conn.execute(
            "INSERT INTO state (task_name, last_value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(task_name) DO UPDATE SET last_value = ?2, updated_at = ?3",
            params![task_name, value, now],
        )?;
        Ok(())
    }
}

/// RFC 3339 with a fixed `Z` suffix so stored timestamps compare
/// lexicographically.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn row_to_record(row: &Row<'_>) -> Result<RunRecord, rusqlite::Error> {
    let started_raw: String = row.get(2)?;
    let finished_raw: Option<String> = row.get(3)?;
    Ok(RunRecord {
        id: row.get(0)?,
        task_name: row.get(1)?,
        started_at: parse_timestamp(&started_raw).unwrap_or_default(),
        finished_at: finished_raw.as_deref().and_then(parse_timestamp),
        exit_code: row.get(4)?,
        stdout: row.get(5)?,
        stderr: row.get(6)?,
    })
}

/// Truncate to the cap at a UTF-8 character boundary.
fn truncate_output(text: &str) -> &str {
    if text.len() <= OUTPUT_CAP_BYTES {
        return text;
    }
    let mut end = OUTPUT_CAP_BYTES;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
