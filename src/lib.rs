//! # CustomerProfiles Resource Handlers
//!
//! > **CloudFormation handlers for `AWS::CustomerProfiles::Domain` and `AWS::CustomerProfiles::Integration`.**
//!
//! Both resources share one update flow: confirm the resource exists, remove the
//! tags CloudFormation applied last time, write the desired state with the new
//! tags, and report the service's response back as a progress event.
//!
//! ## 🏗️ Design
//!
//! ### Generics: one pipeline, two resources
//! [`ProfilesHandler<R>`](handler::ProfilesHandler) implements the
//! CloudFormation handler once for any `R: ProfilesResource`. A resource only
//! says which remote calls read and write it and how its ARN looks; the existence
//! check, tag reconciliation and error classification live in one place.
//!
//! ### The remote service behind a trait
//! Handlers talk to [`ProfilesApi`](clients::ProfilesApi), never to the SDK. The
//! SDK-backed [`SdkProfilesClient`](clients::SdkProfilesClient) is used in
//! production and [`MockProfilesApi`](clients::MockProfilesApi) in tests.
//!
//! ### Four kinds of failure
//! Every remote fault is classified into exactly one CloudFormation error code
//! by [`classify`](clients::classify):
//!
//! | Remote fault | Error code |
//! |---|---|
//! | bad request | `InvalidRequest` |
//! | resource not found | `NotFound` |
//! | internal server error | `ServiceInternalError` |
//! | anything else | `GeneralServiceException` |
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - CloudFormation resource models and tag translation
//! - [`clients`] - the remote API trait, its SDK and mock implementations, fault classification
//! - [`handler`] - the generic read/update pipeline
//! - [`domain_handler`], [`integration_handler`] - the two concrete resources
//! - [`lifecycle`] - configuration, the shared client and invocation dispatch
//!
//! ## 🚀 Running
//!
//! The `customerprofiles-handler` binary reads one invocation from stdin and
//! writes the progress event to stdout:
//!
//! ```bash
//! RUST_LOG=info customerprofiles-handler < invocation.json
//! ```

pub mod clients;
pub mod domain_handler;
pub mod handler;
pub mod integration_handler;
pub mod lifecycle;
pub mod model;
