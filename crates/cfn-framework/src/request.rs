//! # Handler Requests
//!
//! The request types CloudFormation sends to a resource handler.
//!
//! A [`HandlerInvocation`] names the lifecycle [`Action`] to run and carries the
//! [`ResourceHandlerRequest`], which is generic over the resource model `M`. The
//! model type decides the shape of `desiredResourceState`, so a Domain request can
//! never be decoded into an Integration handler by accident.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Lifecycle operation requested by CloudFormation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Create => "CREATE",
            Action::Read => "READ",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::List => "LIST",
        };
        f.write_str(name)
    }
}

/// A single handler invocation as it arrives on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerInvocation<M> {
    pub action: Action,
    pub type_name: String,
    pub request: ResourceHandlerRequest<M>,
}

/// Desired and previous state for one resource, plus the caller's environment.
///
/// Tag maps are optional: CloudFormation omits them when the stack and the
/// resource carry no tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: Option<M>,
    pub previous_resource_state: Option<M>,
    pub desired_resource_tags: Option<HashMap<String, String>>,
    pub previous_resource_tags: Option<HashMap<String, String>>,
    pub region: Option<String>,
    pub aws_account_id: Option<String>,
    pub aws_partition: Option<String>,
    pub logical_resource_identifier: Option<String>,
    pub client_request_token: Option<String>,
}

impl<M> Default for ResourceHandlerRequest<M> {
    fn default() -> Self {
        Self {
            desired_resource_state: None,
            previous_resource_state: None,
            desired_resource_tags: None,
            previous_resource_tags: None,
            region: None,
            aws_account_id: None,
            aws_partition: None,
            logical_resource_identifier: None,
            client_request_token: None,
        }
    }
}

impl<M> ResourceHandlerRequest<M> {
    /// Creates a request for the given desired state with no tags or environment.
    pub fn for_model(desired: M) -> Self {
        Self {
            desired_resource_state: Some(desired),
            ..Self::default()
        }
    }

    pub fn with_previous_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.previous_resource_tags = Some(tags);
        self
    }

    pub fn with_desired_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.desired_resource_tags = Some(tags);
        self
    }

    /// Sets the region and account the resource lives in.
    pub fn in_account(mut self, region: impl Into<String>, account_id: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self.aws_account_id = Some(account_id.into());
        self
    }
}
