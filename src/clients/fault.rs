//! # Service Faults
//!
//! Raw failures reported by the CustomerProfiles service, and [`classify`], the
//! one function that turns them into CloudFormation's error taxonomy. Every
//! remote call in the handlers goes through `classify`, so the mapping lives in
//! exactly one place.

use cfn_framework::HandlerError;
use thiserror::Error;

/// A failure reported by (or on the way to) the CustomerProfiles service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceFault {
    #[error("BadRequestException: {0}")]
    BadRequest(String),

    #[error("ResourceNotFoundException: {0}")]
    ResourceNotFound(String),

    #[error("InternalServerException: {0}")]
    InternalServer(String),

    #[error("ThrottlingException: {0}")]
    Throttling(String),

    #[error("AccessDeniedException: {0}")]
    AccessDenied(String),

    /// The request never produced a service response (timeout, dispatch, ...).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A service error code the handlers have no dedicated variant for.
    #[error("{code}: {message}")]
    Other { code: String, message: String },
}

impl ServiceFault {
    /// Builds a fault from a service error code, as reported in the error metadata.
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("BadRequestException") => ServiceFault::BadRequest(message),
            Some("ResourceNotFoundException") => ServiceFault::ResourceNotFound(message),
            Some("InternalServerException") => ServiceFault::InternalServer(message),
            Some("ThrottlingException") => ServiceFault::Throttling(message),
            Some("AccessDeniedException") => ServiceFault::AccessDenied(message),
            Some(code) => ServiceFault::Other {
                code: code.to_string(),
                message,
            },
            None => ServiceFault::Other {
                code: "Unknown".to_string(),
                message,
            },
        }
    }
}

/// Maps a service fault onto exactly one CloudFormation error kind.
///
/// | Fault | Error |
/// |---|---|
/// | `BadRequest` | `InvalidRequest` |
/// | `ResourceNotFound` | `NotFound` |
/// | `InternalServer` | `ServiceInternalError` |
/// | anything else | `GeneralServiceException` |
pub fn classify(fault: ServiceFault) -> HandlerError {
    let message = fault.to_string();
    match fault {
        ServiceFault::BadRequest(_) => HandlerError::InvalidRequest(message),
        ServiceFault::ResourceNotFound(_) => HandlerError::NotFound(message),
        ServiceFault::InternalServer(_) => HandlerError::ServiceInternalError(message),
        ServiceFault::Throttling(_)
        | ServiceFault::AccessDenied(_)
        | ServiceFault::Transport(_)
        | ServiceFault::Other { .. } => HandlerError::GeneralServiceException(message),
    }
}
