//! # Handler Errors
//!
//! The error taxonomy a handler reports back to CloudFormation. Every failure a
//! handler surfaces lands in exactly one of these kinds, and each kind carries
//! the error code CloudFormation shows as the stack operation's failure reason.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Errors a resource handler can report to CloudFormation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    /// The request was malformed or rejected as invalid input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The resource the request targets does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The downstream service reported an internal failure.
    #[error("Internal error reported from downstream service: {0}")]
    ServiceInternalError(String),

    /// Anything else, including throttling.
    #[error("General service exception: {0}")]
    GeneralServiceException(String),
}

impl HandlerError {
    /// The CloudFormation error code for this error.
    pub fn error_code(&self) -> HandlerErrorCode {
        match self {
            HandlerError::InvalidRequest(_) => HandlerErrorCode::InvalidRequest,
            HandlerError::NotFound(_) => HandlerErrorCode::NotFound,
            HandlerError::ServiceInternalError(_) => HandlerErrorCode::ServiceInternalError,
            HandlerError::GeneralServiceException(_) => HandlerErrorCode::GeneralServiceException,
        }
    }
}

/// Error codes understood by CloudFormation, serialized as their PascalCase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    InvalidRequest,
    NotFound,
    ServiceInternalError,
    GeneralServiceException,
}

impl Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandlerErrorCode::InvalidRequest => "InvalidRequest",
            HandlerErrorCode::NotFound => "NotFound",
            HandlerErrorCode::ServiceInternalError => "ServiceInternalError",
            HandlerErrorCode::GeneralServiceException => "GeneralServiceException",
        };
        f.write_str(name)
    }
}
