use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Terminal status of one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandStatus {
    Ok,
    UserError,
    Failure,
}

/// Structured result every command returns to the CLI layer.
///
/// `message` is the human-facing line; `details` carries the machine-facing
/// payload rendered under `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub status: CommandStatus,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

impl ExecutionOutcome {
    #[must_use]
    pub fn success(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn user_error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::UserError,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: message.into(),
            details,
        }
    }
}

/// Error for mistakes the user can fix themselves, such as a missing token or
/// an unknown gist id. The dispatcher downcasts to this type to produce a
/// `UserError` outcome instead of an internal failure.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct GistUserError {
    pub(crate) message: String,
    pub(crate) details: Value,
}

impl GistUserError {
    pub fn new(message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &Value {
        &self.details
    }
}
