//! # Progress Events
//!
//! The response a handler hands back to CloudFormation. A completed handler
//! always returns either a `SUCCESS` event carrying the resulting model or a
//! `FAILED` event carrying one [`HandlerErrorCode`] and a message.

use crate::error::{HandlerError, HandlerErrorCode};
use serde::{Deserialize, Serialize};

/// Status of a handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

/// Outcome of one handler invocation, serialized in CloudFormation's camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<M> {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<M>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<serde_json::Value>,
    #[serde(default)]
    pub callback_delay_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
}

impl<M> ProgressEvent<M> {
    /// A completed, successful event for `model`.
    pub fn default_success_handler(model: M) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: Some(model),
            resource_models: None,
            callback_context: None,
            callback_delay_seconds: 0,
            message: None,
            error_code: None,
        }
    }

    /// A completed, failed event reporting `error`.
    pub fn failed(error: &HandlerError) -> Self {
        Self {
            status: OperationStatus::Failed,
            resource_model: None,
            resource_models: None,
            callback_context: None,
            callback_delay_seconds: 0,
            message: Some(error.to_string()),
            error_code: Some(error.error_code()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}

impl<M> From<Result<ProgressEvent<M>, HandlerError>> for ProgressEvent<M> {
    fn from(result: Result<ProgressEvent<M>, HandlerError>) -> Self {
        result.unwrap_or_else(|e| ProgressEvent::failed(&e))
    }
}
