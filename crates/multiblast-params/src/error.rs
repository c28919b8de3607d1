//! Error kinds surfaced by the parameter mapper.

use thiserror::Error;

use crate::params::ParamName;

/// Failure while mapping question parameters into a job body.
///
/// Only [`MapError::UnrecognizedTool`] is expected to reach an end user; the
/// other kinds mean the upstream form handed over an incomplete or malformed
/// parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Unknown blast tool: {0}")]
    UnrecognizedTool(String),
    #[error("parameter '{param}' has non-numeric value '{value}'")]
    MalformedNumeric { param: ParamName, value: String },
    #[error("missing required parameter '{0}'")]
    MissingParameter(ParamName),
}

impl MapError {
    /// True for errors caused by the user's choices rather than by the caller.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MapError::UnrecognizedTool(_))
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
