// SPDX-License-Identifier: MIT

//! Action definitions
//!
//! A task's action is either a shell command or an agent prompt. The TOML
//! surface uses optional `command`/`prompt` keys; the validating conversion
//! below rejects inconsistent combinations at parse time so the rest of the
//! engine only ever sees a well-formed [`ActionKind`].

use crate::{Provider, SpecError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default action timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// What a task executes when triggered
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Shell command string, run through `sh -c`
    Command(String),
    /// Prompt delivered to an agent provider binary
    Agent {
        prompt: String,
        provider: Provider,
        model: Option<String>,
    },
}

/// A task's action with its execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActionSpec", into = "RawActionSpec")]
pub struct ActionSpec {
    pub kind: ActionKind,
    /// Working directory, tilde-expanded at execution time
    pub working_dir: Option<String>,
    /// Wall-clock timeout in seconds
    pub timeout: u64,
    /// Task-level environment overrides, layered on the captured baseline
    pub env: HashMap<String, String>,
}

impl ActionSpec {
    /// Short label for CLI display ("script" or the provider name)
    pub fn label(&self) -> &'static str {
        match &self.kind {
            ActionKind::Command(_) => "script",
            ActionKind::Agent { provider, .. } => provider.name(),
        }
    }
}

/// TOML surface form of an action, before mode validation
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawActionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_dir: Option<String>,
    #[serde(default = "default_timeout")]
    timeout: u64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    env: HashMap<String, String>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl TryFrom<RawActionSpec> for ActionSpec {
    type Error = SpecError;

    fn try_from(raw: RawActionSpec) -> Result<Self, SpecError> {
        let kind = match (raw.command, raw.prompt) {
            (Some(_), Some(_)) => return Err(SpecError::ConflictingActionModes),
            (None, None) => return Err(SpecError::MissingActionMode),
            (Some(command), None) => {
                if raw.provider.is_some() {
                    return Err(SpecError::ProviderWithoutPrompt);
                }
                if raw.model.is_some() {
                    return Err(SpecError::ModelWithoutPrompt);
                }
                ActionKind::Command(command)
            }
            (None, Some(prompt)) => {
                let provider = match raw.provider.as_deref() {
                    Some(name) => Provider::from_name(name)?,
                    None => Provider::default(),
                };
                ActionKind::Agent {
                    prompt,
                    provider,
                    model: raw.model,
                }
            }
        };
        Ok(ActionSpec {
            kind,
            working_dir: raw.working_dir,
            timeout: raw.timeout,
            env: raw.env,
        })
    }
}

impl From<ActionSpec> for RawActionSpec {
    fn from(spec: ActionSpec) -> Self {
        let (command, prompt, provider, model) = match spec.kind {
            ActionKind::Command(command) => (Some(command), None, None, None),
            ActionKind::Agent {
                prompt,
                provider,
                model,
            } => (
                None,
                Some(prompt),
                Some(provider.name().to_string()),
                model,
            ),
        };
        RawActionSpec {
            command,
            prompt,
            provider,
            model,
            working_dir: spec.working_dir,
            timeout: spec.timeout,
            env: spec.env,
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
