//! Error types for run configuration construction and run-time limits.
//!
//! [`ConfigError`] is returned by every `RunConfig` construction path.
//! [`RunError`] is what a Runner reports when the per-run model call budget
//! from [`ModelCallBudget`](crate::budget::ModelCallBudget) is exhausted.

use thiserror::Error;

/// Construction-time configuration error.
///
/// Construction is atomic: when this is returned no `RunConfig` exists. Callers
/// must supply corrected input to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `maxModelCalls` equals the maximum representable integer (`i64::MAX`).
    #[error("max-calls overflow: maxModelCalls must be less than {value}")]
    MaxModelCallsOverflow { value: i64 },

    /// A field name outside the declared field set was supplied.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A value did not satisfy its declared type (or the input was not a mapping).
    #[error("invalid value{}: {message}", field_suffix(.field))]
    InvalidValue {
        field: Option<String>,
        message: String,
    },
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" for {}", f))
        .unwrap_or_default()
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// Run-level error raised by a Runner while enforcing the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// One more model call would exceed `maxModelCalls`; the run must terminate.
    #[error("model call limit exceeded: limit is {limit}")]
    ModelCallLimitExceeded { limit: u64 },
}
