//! Generic handler shared by the CustomerProfiles resource types.
//!
//! - [`ProfilesResource`] - what a resource model provides (remote calls, ARN)
//! - [`ProfilesHandler`] - the read/update pipeline built on top of it
//! - [`resource_arn`] - ARN construction from the request environment

pub mod arn;
pub mod pipeline;
pub mod resource;

pub use arn::resource_arn;
pub use pipeline::ProfilesHandler;
pub use resource::ProfilesResource;
