//! # ProfilesResource Trait
//!
//! The contract a CustomerProfiles resource model implements so the generic
//! [`ProfilesHandler`](super::ProfilesHandler) can read and update it. The
//! handler owns the shared pipeline (existence check, tag reconciliation, error
//! classification); the resource only knows which remote calls read and write it
//! and how its ARN is formed.

use crate::clients::{ProfilesApi, ServiceFault};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

#[async_trait]
pub trait ProfilesResource:
    Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static
{
    /// CloudFormation type name served for this resource.
    const TYPE_NAME: &'static str;

    /// Human-readable identifier used in logs.
    fn identifier(&self) -> String;

    /// The resource part of the ARN, after `arn:{partition}:profile:{region}:{account}:`.
    fn arn_resource_path(&self) -> String;

    /// Reads the resource as it currently exists.
    async fn fetch(&self, client: &dyn ProfilesApi) -> Result<Self, ServiceFault>;

    /// Writes this desired state with `tags` and returns the resulting state.
    ///
    /// `tags` is `None` when no tags should be sent at all.
    async fn apply(
        &self,
        client: &dyn ProfilesApi,
        tags: Option<HashMap<String, String>>,
    ) -> Result<Self, ServiceFault>;
}
