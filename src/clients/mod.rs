//! Remote clients for the CustomerProfiles service.
//!
//! - [`ProfilesApi`] - the operations the handlers call
//! - [`SdkProfilesClient`] - the AWS SDK implementation
//! - [`MockProfilesApi`] - a scripted in-memory implementation for tests
//! - [`classify`] - maps a [`ServiceFault`] onto CloudFormation's error kinds

pub mod fault;
pub mod mock;
pub mod profiles_api;
pub mod sdk_client;

pub use fault::*;
pub use mock::*;
pub use profiles_api::*;
pub use sdk_client::*;
