//! # CloudFormation Handler Framework
//!
//! The building blocks for writing CloudFormation resource-provider handlers in
//! Rust: the request a handler receives, the progress event it returns, the error
//! taxonomy CloudFormation understands, and a provider that routes invocations to
//! a typed handler.
//!
//! ## Architecture Overview
//!
//! 1. **Handler Layer** ([`ResourceHandler`]) - your resource's lifecycle logic
//! 2. **Provider Layer** ([`ResourceProvider`]) - decoding, routing and reporting
//! 3. **Wire Layer** ([`HandlerInvocation`], [`ProgressEvent`]) - the JSON shapes
//!
//! You write the lifecycle logic **once** in the handler; the provider takes care
//! of turning every outcome, including errors, into a well-formed progress event.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use cfn_framework::{
//!     HandlerResult, ProgressEvent, ResourceHandler, ResourceHandlerRequest, ResourceProvider,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Bucket { name: String }
//!
//! struct BucketHandler;
//!
//! #[async_trait]
//! impl ResourceHandler for BucketHandler {
//!     type Model = Bucket;
//!     const TYPE_NAME: &'static str = "Test::Bucket";
//!
//!     async fn read(&self, request: ResourceHandlerRequest<Bucket>) -> HandlerResult<Bucket> {
//!         let model = request.desired_resource_state.unwrap_or(Bucket { name: "b".into() });
//!         Ok(ProgressEvent::default_success_handler(model))
//!     }
//!
//!     async fn update(&self, request: ResourceHandlerRequest<Bucket>) -> HandlerResult<Bucket> {
//!         self.read(request).await
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = ResourceProvider::new(BucketHandler);
//!     let payload = r#"{"action":"READ","typeName":"Test::Bucket","request":{}}"#;
//!     let event = provider.invoke_json(payload).await;
//!     assert!(event.is_success());
//! }
//! ```
//!
//! ## Error Taxonomy
//!
//! Handlers fail with a [`HandlerError`], which has exactly four kinds:
//! invalid request, not found, service internal error and general service
//! exception. Callers that talk to remote services classify each remote fault
//! into one of them at the call site.

pub mod error;
pub mod handler;
pub mod progress;
pub mod provider;
pub mod request;
pub mod tracing;

// Re-export core types for convenience
pub use error::{HandlerError, HandlerErrorCode};
pub use handler::{HandlerResult, ResourceHandler};
pub use progress::{OperationStatus, ProgressEvent};
pub use provider::ResourceProvider;
pub use request::{Action, HandlerInvocation, ResourceHandlerRequest};
