//! # ResourceHandler Trait
//!
//! The contract every CloudFormation resource type implements to be served by a
//! [`ResourceProvider`](crate::ResourceProvider). The associated `Model` type ties
//! the handler to its resource schema, so a handler can only ever receive and
//! return its own model.
//!
//! # Provided Methods
//! `create`, `delete` and `list` have default implementations that reject the
//! action with [`HandlerError::InvalidRequest`]. Handlers override only the
//! actions they actually support; `read` and `update` are required.

use crate::error::HandlerError;
use crate::progress::ProgressEvent;
use crate::request::{Action, ResourceHandlerRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Result type returned by every handler action.
pub type HandlerResult<M> = Result<ProgressEvent<M>, HandlerError>;

/// Trait a resource type implements to handle CloudFormation lifecycle actions.
#[async_trait]
pub trait ResourceHandler: Send + Sync + 'static {
    /// The resource model (CloudFormation schema properties).
    type Model: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// The CloudFormation type name, e.g. `AWS::CustomerProfiles::Domain`.
    const TYPE_NAME: &'static str;

    async fn create(&self, _request: ResourceHandlerRequest<Self::Model>) -> HandlerResult<Self::Model> {
        Err(unsupported(Action::Create))
    }

    async fn read(&self, request: ResourceHandlerRequest<Self::Model>) -> HandlerResult<Self::Model>;

    async fn update(&self, request: ResourceHandlerRequest<Self::Model>) -> HandlerResult<Self::Model>;

    async fn delete(&self, _request: ResourceHandlerRequest<Self::Model>) -> HandlerResult<Self::Model> {
        Err(unsupported(Action::Delete))
    }

    async fn list(&self, _request: ResourceHandlerRequest<Self::Model>) -> HandlerResult<Self::Model> {
        Err(unsupported(Action::List))
    }
}

fn unsupported(action: Action) -> HandlerError {
    HandlerError::InvalidRequest(format!("{action} is not supported by this handler"))
}
