//! # Resource Provider
//!
//! The `ResourceProvider` is the entry side of the framework: it takes one
//! handler invocation, routes it to the matching [`ResourceHandler`] action and
//! turns whatever comes back into a [`ProgressEvent`]. Handler errors never
//! escape as Rust errors; they become `FAILED` events carrying the error code.

use crate::error::HandlerError;
use crate::handler::ResourceHandler;
use crate::progress::ProgressEvent;
use crate::request::{Action, HandlerInvocation, ResourceHandlerRequest};
use tracing::{debug, info, warn};

/// Serves CloudFormation invocations for a single resource type.
///
/// Each invocation runs to completion before `invoke` returns; the provider
/// holds no per-request state, so one provider can serve every request of a
/// process.
pub struct ResourceProvider<H: ResourceHandler> {
    handler: H,
}

impl<H: ResourceHandler> ResourceProvider<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Runs `action` against the handler and reports the outcome as a progress event.
    pub async fn invoke(
        &self,
        action: Action,
        request: ResourceHandlerRequest<H::Model>,
    ) -> ProgressEvent<H::Model> {
        let type_name = H::TYPE_NAME;
        debug!(type_name, %action, ?request, "Invocation");

        let result = match action {
            Action::Create => self.handler.create(request).await,
            Action::Read => self.handler.read(request).await,
            Action::Update => self.handler.update(request).await,
            Action::Delete => self.handler.delete(request).await,
            Action::List => self.handler.list(request).await,
        };

        match &result {
            Ok(_) => info!(type_name, %action, "Invocation succeeded"),
            Err(e) => warn!(type_name, %action, code = %e.error_code(), error = %e, "Invocation failed"),
        }
        ProgressEvent::from(result)
    }

    /// Decodes a raw JSON invocation and runs it.
    ///
    /// A payload that does not decode, or that names another resource type,
    /// yields a `FAILED` event with `InvalidRequest`.
    pub async fn invoke_json(&self, payload: &str) -> ProgressEvent<H::Model> {
        let invocation: HandlerInvocation<H::Model> = match serde_json::from_str(payload) {
            Ok(invocation) => invocation,
            Err(e) => {
                warn!(type_name = H::TYPE_NAME, error = %e, "Malformed invocation");
                return ProgressEvent::failed(&HandlerError::InvalidRequest(format!(
                    "malformed handler payload: {e}"
                )));
            }
        };

        if invocation.type_name != H::TYPE_NAME {
            warn!(
                expected = H::TYPE_NAME,
                actual = %invocation.type_name,
                "Type name mismatch"
            );
            return ProgressEvent::failed(&HandlerError::InvalidRequest(format!(
                "handler for {} cannot serve {}",
                H::TYPE_NAME,
                invocation.type_name
            )));
        }

        self.invoke(invocation.action, invocation.request).await
    }
}
