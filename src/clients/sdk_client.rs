//! # SDK Client
//!
//! [`ProfilesApi`] backed by `aws-sdk-customerprofiles`. This is the only module
//! that touches the SDK's generated types: requests are built here, outputs are
//! copied into the crate's description structs, and every `SdkError` is reduced
//! to a [`ServiceFault`] by its error code.

use super::fault::ServiceFault;
use super::profiles_api::{
    DomainDescription, IntegrationDescription, ProfilesApi, PutIntegrationInput, UpdateDomainInput,
};
use crate::lifecycle::ProfilesClientConfig;
use async_trait::async_trait;
use aws_sdk_customerprofiles::config::timeout::TimeoutConfig;
use aws_sdk_customerprofiles::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_customerprofiles::primitives::DateTime as SdkDateTime;
use aws_sdk_customerprofiles::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// CustomerProfiles client talking to the real service.
#[derive(Clone)]
pub struct SdkProfilesClient {
    client: Client,
}

impl std::fmt::Debug for SdkProfilesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkProfilesClient").finish_non_exhaustive()
    }
}

impl SdkProfilesClient {
    /// Builds a client from the default AWS credential/region chain plus `config` overrides.
    pub async fn new(config: &ProfilesClientConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        let mut builder = aws_sdk_customerprofiles::config::Builder::from(&sdk_config);

        if let Some(region) = &config.region {
            builder = builder.region(aws_sdk_customerprofiles::config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        if let Some(timeout) = config.operation_timeout {
            builder = builder.timeout_config(
                TimeoutConfig::builder().operation_timeout(timeout).build(),
            );
        }

        Self::from_client(Client::from_conf(builder.build()))
    }

    /// Wraps a pre-built SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfilesApi for SdkProfilesClient {
    #[instrument(skip(self))]
    async fn get_domain(&self, domain_name: &str) -> Result<DomainDescription, ServiceFault> {
        debug!("Sending GetDomain");
        let output = self
            .client
            .get_domain()
            .domain_name(domain_name)
            .send()
            .await
            .map_err(into_fault)?;

        Ok(DomainDescription {
            domain_name: output.domain_name,
            dead_letter_queue_url: output.dead_letter_queue_url,
            default_encryption_key: output.default_encryption_key,
            default_expiration_days: output.default_expiration_days,
            created_at: to_utc(&output.created_at),
            last_updated_at: to_utc(&output.last_updated_at),
            tags: output.tags,
        })
    }

    #[instrument(skip(self), fields(domain_name = %input.domain_name))]
    async fn update_domain(&self, input: UpdateDomainInput) -> Result<DomainDescription, ServiceFault> {
        debug!("Sending UpdateDomain");
        let output = self
            .client
            .update_domain()
            .domain_name(input.domain_name)
            .set_dead_letter_queue_url(input.dead_letter_queue_url)
            .set_default_encryption_key(input.default_encryption_key)
            .set_default_expiration_days(input.default_expiration_days)
            .set_tags(input.tags)
            .send()
            .await
            .map_err(into_fault)?;

        Ok(DomainDescription {
            domain_name: output.domain_name,
            dead_letter_queue_url: output.dead_letter_queue_url,
            default_encryption_key: output.default_encryption_key,
            default_expiration_days: output.default_expiration_days,
            created_at: to_utc(&output.created_at),
            last_updated_at: to_utc(&output.last_updated_at),
            tags: output.tags,
        })
    }

    #[instrument(skip(self))]
    async fn get_integration(
        &self,
        domain_name: &str,
        uri: Option<&str>,
    ) -> Result<IntegrationDescription, ServiceFault> {
        debug!("Sending GetIntegration");
        let output = self
            .client
            .get_integration()
            .domain_name(domain_name)
            .set_uri(uri.map(str::to_string))
            .send()
            .await
            .map_err(into_fault)?;

        Ok(IntegrationDescription {
            domain_name: output.domain_name,
            uri: Some(output.uri),
            object_type_name: output.object_type_name,
            created_at: to_utc(&output.created_at),
            last_updated_at: to_utc(&output.last_updated_at),
            tags: output.tags,
        })
    }

    #[instrument(skip(self), fields(domain_name = %input.domain_name))]
    async fn put_integration(
        &self,
        input: PutIntegrationInput,
    ) -> Result<IntegrationDescription, ServiceFault> {
        debug!("Sending PutIntegration");
        let output = self
            .client
            .put_integration()
            .domain_name(input.domain_name)
            .set_uri(input.uri)
            .set_object_type_name(input.object_type_name)
            .set_tags(input.tags)
            .send()
            .await
            .map_err(into_fault)?;

        Ok(IntegrationDescription {
            domain_name: output.domain_name,
            uri: Some(output.uri),
            object_type_name: output.object_type_name,
            created_at: to_utc(&output.created_at),
            last_updated_at: to_utc(&output.last_updated_at),
            tags: output.tags,
        })
    }

    #[instrument(skip(self))]
    async fn untag_resource(&self, resource_arn: &str, tag_keys: Vec<String>) -> Result<(), ServiceFault> {
        debug!("Sending UntagResource");
        self.client
            .untag_resource()
            .resource_arn(resource_arn)
            .set_tag_keys(Some(tag_keys))
            .send()
            .await
            .map_err(into_fault)?;
        Ok(())
    }
}

/// Reduces an SDK error to a [`ServiceFault`].
///
/// Service errors are dispatched on their error code; everything that never
/// reached the service (timeouts, dispatch and construction failures) is a
/// transport fault.
fn into_fault<E, R>(err: SdkError<E, R>) -> ServiceFault
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::ServiceError(_) => ServiceFault::from_code(err.code(), message),
        _ => ServiceFault::Transport(message),
    }
}

fn to_utc(timestamp: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}
