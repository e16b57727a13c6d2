use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

use crate::tally_logic::VotingError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Unrecognized vote option")]
    InvalidCategory,
    #[error("Malformed request body")]
    MalformedPayload,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal system error")]
    SystemError,
}

/// Error body returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<VotingError> for Error {
    fn from(err: VotingError) -> Self {
        match err {
            VotingError::InvalidCategory(label) => {
                Error::with_details(ErrorCode::InvalidCategory, "Invalid vote option", label)
            }
            other => Error::new(ErrorCode::SystemError, other.to_string()),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::new(ErrorCode::InvalidInput, err.to_string())
    }
}
