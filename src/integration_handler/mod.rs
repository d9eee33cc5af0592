//! # Integration Handler
//!
//! Serves `AWS::CustomerProfiles::Integration`: the generic
//! [`ProfilesHandler`](crate::handler::ProfilesHandler) bound to
//! [`IntegrationModel`](crate::model::IntegrationModel). Updating an integration
//! re-puts it with the desired URI and object type.

pub mod entity;

use crate::clients::ProfilesApi;
use crate::handler::ProfilesHandler;
use crate::model::IntegrationModel;
use cfn_framework::ResourceProvider;
use std::sync::Arc;

/// Handler type for CustomerProfiles integrations.
pub type IntegrationHandler = ProfilesHandler<IntegrationModel>;

/// Creates a provider serving integrations through `client`.
pub fn new(client: Arc<dyn ProfilesApi>) -> ResourceProvider<IntegrationHandler> {
    ResourceProvider::new(IntegrationHandler::new(client))
}
