// SPDX-License-Identifier: MIT

//! Agent provider catalog
//!
//! Each provider is an external CLI binary with its own argument shape for
//! passing a prompt and overriding the model. Unknown providers are rejected
//! at spec-validation time, never at execution time.

use crate::SpecError;
use serde::{Deserialize, Serialize};

/// Known agent providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    Codex,
    Gemini,
}

impl Provider {
    /// Parse a provider name from a task file.
    pub fn from_name(name: &str) -> Result<Self, SpecError> {
        match name {
            "claude" => Ok(Provider::Claude),
            "codex" => Ok(Provider::Codex),
            "gemini" => Ok(Provider::Gemini),
            other => Err(SpecError::UnknownProvider(other.to_string())),
        }
    }

    /// Lowercase provider name as it appears in task files.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::Codex => "codex",
            Provider::Gemini => "gemini",
        }
    }

    /// Name of the provider binary on PATH.
    pub fn binary(&self) -> &'static str {
        self.name()
    }

    /// Arguments that deliver the prompt to the provider binary.
    pub fn prompt_args(&self, prompt: &str) -> Vec<String> {
        match self {
            Provider::Claude => vec!["-p".to_string(), prompt.to_string()],
            // codex runs prompts through its `exec` subcommand and needs the
            // git-repo check suppressed for arbitrary working directories
            Provider::Codex => vec![
                "exec".to_string(),
                "--skip-git-repo-check".to_string(),
                prompt.to_string(),
            ],
            Provider::Gemini => vec!["-p".to_string(), prompt.to_string()],
        }
    }

    /// Flag that selects a model override.
    pub fn model_flag(&self) -> &'static str {
        match self {
            Provider::Claude => "--model",
            Provider::Codex => "-m",
            Provider::Gemini => "-m",
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Claude
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
