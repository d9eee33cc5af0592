//! [`ProfilesResource`] implementation for [`IntegrationModel`].
//!
//! An integration is read with `GetIntegration` and written with
//! `PutIntegration`, both keyed by domain name and URI.

use crate::clients::{ProfilesApi, ServiceFault};
use crate::handler::ProfilesResource;
use crate::model::IntegrationModel;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

#[async_trait]
impl ProfilesResource for IntegrationModel {
    const TYPE_NAME: &'static str = "AWS::CustomerProfiles::Integration";

    fn identifier(&self) -> String {
        match &self.uri {
            Some(uri) => format!("{}/{uri}", self.domain_name),
            None => self.domain_name.clone(),
        }
    }

    fn arn_resource_path(&self) -> String {
        format!(
            "domains/{}/integrations/{}",
            self.domain_name,
            self.uri.as_deref().unwrap_or_default()
        )
    }

    async fn fetch(&self, client: &dyn ProfilesApi) -> Result<Self, ServiceFault> {
        let description = client
            .get_integration(&self.domain_name, self.uri.as_deref())
            .await?;
        info!(domain_name = %self.domain_name, uri = ?self.uri, "Got integration");
        Ok(description.into())
    }

    async fn apply(
        &self,
        client: &dyn ProfilesApi,
        tags: Option<HashMap<String, String>>,
    ) -> Result<Self, ServiceFault> {
        let description = client.put_integration(self.to_put_input(tags)).await?;
        info!(domain_name = %self.domain_name, uri = ?self.uri, "Put integration");
        Ok(description.into())
    }
}
