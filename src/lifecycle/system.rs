use crate::clients::ProfilesApi;
use crate::domain_handler::{self, DomainHandler};
use crate::handler::ProfilesResource;
use crate::integration_handler::{self, IntegrationHandler};
use crate::model::{DomainModel, IntegrationModel};
use cfn_framework::{HandlerError, ProgressEvent, ResourceProvider};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};

/// The part of an invocation needed to pick a handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvocationHeader {
    type_name: String,
}

/// Every resource handler served by this process, sharing one client.
///
/// # Example
///
/// ```ignore
/// let system = HandlerSystem::new(shared_client(&config).await);
/// let response = system.dispatch(&payload).await?;
/// println!("{response}");
/// ```
pub struct HandlerSystem {
    /// Provider for `AWS::CustomerProfiles::Domain`
    pub domain: ResourceProvider<DomainHandler>,

    /// Provider for `AWS::CustomerProfiles::Integration`
    pub integration: ResourceProvider<IntegrationHandler>,
}

impl HandlerSystem {
    pub fn new(client: Arc<dyn ProfilesApi>) -> Self {
        Self {
            domain: domain_handler::new(client.clone()),
            integration: integration_handler::new(client),
        }
    }

    /// Routes a raw JSON invocation to the handler for its `typeName` and
    /// returns the serialized progress event.
    ///
    /// Unknown or unreadable type names produce a `FAILED` event with
    /// `InvalidRequest`; the only error returned is a serialization failure.
    #[instrument(skip_all)]
    pub async fn dispatch(&self, payload: &str) -> Result<String, serde_json::Error> {
        let type_name = match serde_json::from_str::<InvocationHeader>(payload) {
            Ok(header) => header.type_name,
            Err(e) => {
                warn!(error = %e, "Unreadable invocation header");
                return failure_response(&HandlerError::InvalidRequest(format!(
                    "malformed handler payload: {e}"
                )));
            }
        };

        if type_name == DomainModel::TYPE_NAME {
            serde_json::to_string(&self.domain.invoke_json(payload).await)
        } else if type_name == IntegrationModel::TYPE_NAME {
            serde_json::to_string(&self.integration.invoke_json(payload).await)
        } else {
            warn!(%type_name, "No handler for resource type");
            failure_response(&HandlerError::InvalidRequest(format!(
                "unsupported resource type {type_name}"
            )))
        }
    }
}

/// A serialized `FAILED` event for an invocation that never reached a handler.
pub fn failure_response(error: &HandlerError) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ProgressEvent::<serde_json::Value>::failed(error))
}
