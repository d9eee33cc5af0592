//! # Domain Handler
//!
//! Serves `AWS::CustomerProfiles::Domain`: the generic
//! [`ProfilesHandler`](crate::handler::ProfilesHandler) bound to
//! [`DomainModel`](crate::model::DomainModel).
//!
//! ## Usage
//!
//! ```rust
//! use customerprofiles_resources::clients::{DomainDescription, MockProfilesApi};
//! use customerprofiles_resources::domain_handler;
//! use customerprofiles_resources::model::DomainModel;
//! use cfn_framework::{Action, ResourceHandlerRequest};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockProfilesApi::new();
//!     mock.expect_get_domain().return_ok(DomainDescription::default());
//!     mock.expect_update_domain().return_ok(DomainDescription {
//!         domain_name: "d1".to_string(),
//!         ..DomainDescription::default()
//!     });
//!
//!     let provider = domain_handler::new(Arc::new(mock.clone()));
//!     let request = ResourceHandlerRequest::for_model(DomainModel::new("d1"));
//!     let event = provider.invoke(Action::Update, request).await;
//!
//!     assert!(event.is_success());
//!     mock.verify();
//! }
//! ```

pub mod entity;

use crate::clients::ProfilesApi;
use crate::handler::ProfilesHandler;
use crate::model::DomainModel;
use cfn_framework::ResourceProvider;
use std::sync::Arc;

/// Handler type for CustomerProfiles domains.
pub type DomainHandler = ProfilesHandler<DomainModel>;

/// Creates a provider serving domains through `client`.
pub fn new(client: Arc<dyn ProfilesApi>) -> ResourceProvider<DomainHandler> {
    ResourceProvider::new(DomainHandler::new(client))
}
