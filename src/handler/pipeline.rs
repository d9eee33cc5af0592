//! # ProfilesHandler
//!
//! The generic CloudFormation handler for every CustomerProfiles resource. The
//! update pipeline is written once here and reused by the Domain and Integration
//! resources through [`ProfilesResource`].
//!
//! ## Update
//!
//! 1. Reads the resource; a failure aborts before anything is mutated.
//! 2. Removes every previously applied tag key in one untag call (skipped when
//!    there were no previous tags).
//! 3. Writes the desired state. Missing and empty desired tag maps are both sent
//!    as "no tags".
//! 4. Returns the model built from the write's response.
//!
//! Every remote fault goes through [`classify`]. Nothing is retried, and a failed
//! write does not restore tags removed in step 2.

use super::arn::resource_arn;
use super::resource::ProfilesResource;
use crate::clients::{classify, ProfilesApi};
use crate::model::{normalize_desired_tags, tags_to_remove};
use async_trait::async_trait;
use cfn_framework::{HandlerError, HandlerResult, ProgressEvent, ResourceHandler, ResourceHandlerRequest};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// CloudFormation handler for the CustomerProfiles resource `R`.
pub struct ProfilesHandler<R> {
    client: Arc<dyn ProfilesApi>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ProfilesResource> ProfilesHandler<R> {
    pub fn new(client: Arc<dyn ProfilesApi>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

fn desired_state<R>(request: &ResourceHandlerRequest<R>) -> Result<R, HandlerError>
where
    R: ProfilesResource,
{
    request
        .desired_resource_state
        .clone()
        .ok_or_else(|| HandlerError::InvalidRequest("request has no desired resource state".to_string()))
}

#[async_trait]
impl<R: ProfilesResource> ResourceHandler for ProfilesHandler<R> {
    type Model = R;
    const TYPE_NAME: &'static str = R::TYPE_NAME;

    async fn read(&self, request: ResourceHandlerRequest<R>) -> HandlerResult<R> {
        let model = desired_state(&request)?;
        let current = model.fetch(self.client.as_ref()).await.map_err(classify)?;
        info!(type_name = R::TYPE_NAME, resource = %model.identifier(), "Read resource");
        Ok(ProgressEvent::default_success_handler(current))
    }

    async fn update(&self, request: ResourceHandlerRequest<R>) -> HandlerResult<R> {
        let model = desired_state(&request)?;
        let client = self.client.as_ref();

        // A resource that was never created cannot be updated.
        model.fetch(client).await.map_err(classify)?;
        debug!(type_name = R::TYPE_NAME, resource = %model.identifier(), "Resource exists");

        let stale_keys = tags_to_remove(request.previous_resource_tags.as_ref());
        if !stale_keys.is_empty() {
            let arn = resource_arn(&request, &model)?;
            info!(%arn, count = stale_keys.len(), "Removing previous tags");
            client
                .untag_resource(&arn, stale_keys)
                .await
                .map_err(classify)?;
        }

        let tags = normalize_desired_tags(request.desired_resource_tags);
        let updated = model.apply(client, tags).await.map_err(classify)?;
        info!(type_name = R::TYPE_NAME, resource = %model.identifier(), "Updated resource");

        Ok(ProgressEvent::default_success_handler(updated))
    }
}
