//! Errors for parsing common types from text.

use thiserror::Error;

/// A string did not name any known [`ParameterId`](crate::ParameterId).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter name '{name}'")]
pub struct ParseParameterIdError {
    pub name: String,
}
