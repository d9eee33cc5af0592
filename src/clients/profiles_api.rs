//! # CustomerProfiles API
//!
//! The slice of the CustomerProfiles service the handlers call, expressed as an
//! async trait so the handlers can run against the real SDK client or a
//! scripted mock. Inputs and descriptions are plain structs, decoupled from the
//! SDK's generated types.

use super::fault::ServiceFault;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A domain as the service describes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainDescription {
    pub domain_name: String,
    pub dead_letter_queue_url: Option<String>,
    pub default_encryption_key: Option<String>,
    pub default_expiration_days: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub tags: Option<HashMap<String, String>>,
}

/// Payload of an `UpdateDomain` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDomainInput {
    pub domain_name: String,
    pub dead_letter_queue_url: Option<String>,
    pub default_encryption_key: Option<String>,
    pub default_expiration_days: Option<i32>,
    pub tags: Option<HashMap<String, String>>,
}

/// An integration as the service describes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationDescription {
    pub domain_name: String,
    pub uri: Option<String>,
    pub object_type_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub tags: Option<HashMap<String, String>>,
}

/// Payload of a `PutIntegration` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutIntegrationInput {
    pub domain_name: String,
    pub uri: Option<String>,
    pub object_type_name: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}

/// Remote operations the handlers depend on.
///
/// Every method reports failures as a raw [`ServiceFault`]; classifying it for
/// CloudFormation is the caller's job.
#[async_trait]
pub trait ProfilesApi: Send + Sync {
    async fn get_domain(&self, domain_name: &str) -> Result<DomainDescription, ServiceFault>;

    async fn update_domain(&self, input: UpdateDomainInput) -> Result<DomainDescription, ServiceFault>;

    async fn get_integration(
        &self,
        domain_name: &str,
        uri: Option<&str>,
    ) -> Result<IntegrationDescription, ServiceFault>;

    async fn put_integration(
        &self,
        input: PutIntegrationInput,
    ) -> Result<IntegrationDescription, ServiceFault>;

    async fn untag_resource(&self, resource_arn: &str, tag_keys: Vec<String>) -> Result<(), ServiceFault>;
}
