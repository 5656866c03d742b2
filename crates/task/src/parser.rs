// SPDX-License-Identifier: MIT

//! Task file parsing (TOML)

use crate::{SpecError, TaskSpec};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a task file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] Box<toml::de::Error>),

    #[error("invalid task spec: {0}")]
    Invalid(#[from] SpecError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Parse and validate a task spec from TOML content.
pub fn parse_task(content: &str) -> Result<TaskSpec, ParseError> {
    let spec: TaskSpec = toml::from_str(content).map_err(Box::new)?;
    spec.validate()?;
    Ok(spec)
}

/// Read, parse, and validate a task spec from a TOML file.
pub fn load_task_file(path: &Path) -> Result<TaskSpec, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_task(&content)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
