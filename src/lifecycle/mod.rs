//! # Process Lifecycle
//!
//! Wiring for the handler binary: configuration from the environment, the shared
//! SDK client, and the [`HandlerSystem`] that routes invocations to a handler.

pub mod client;
pub mod config;
pub mod system;

pub use cfn_framework::tracing::setup_tracing;
pub use client::shared_client;
pub use config::{ConfigError, ProfilesClientConfig};
pub use system::{failure_response, HandlerSystem};
