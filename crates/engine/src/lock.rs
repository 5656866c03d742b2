// SPDX-License-Identifier: MIT

//! Per-task advisory file locks
//!
//! One lock file per task name in a fixed directory. Acquisition is
//! non-blocking: contention is reported, never waited out. Ownership is
//! process-scoped; the OS releases the lock if the holder dies, and
//! [`RunLock`]'s `Drop` releases it on every normal exit path including
//! panics.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Result of a non-blocking acquisition attempt
pub enum LockAttempt {
    Acquired(RunLock),
    Busy,
}

/// Held advisory exclusive lock for one task
pub struct RunLock {
    file: File,
}

/// Try to acquire the per-task lock without blocking.
pub fn acquire(locks_dir: &Path, task_name: &str) -> std::io::Result<LockAttempt> {
    std::fs::create_dir_all(locks_dir)?;
    // Never truncate: the file may be locked by a live run.
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(locks_dir.join(format!("{}.lock", task_name)))?;
    match file.try_lock_exclusive() {
        Ok(()) => Ok(LockAttempt::Acquired(RunLock { file })),
        Err(e) if is_contended(&e) => Ok(LockAttempt::Busy),
        Err(e) => Err(e),
    }
}

/// Probe whether a task's lock is currently held, without holding it.
pub fn is_locked(locks_dir: &Path, task_name: &str) -> std::io::Result<bool> {
    match acquire(locks_dir, task_name)? {
        LockAttempt::Acquired(lock) => {
            drop(lock);
            Ok(false)
        }
        LockAttempt::Busy => Ok(true),
    }
}

fn is_contended(err: &std::io::Error) -> bool {
    err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
