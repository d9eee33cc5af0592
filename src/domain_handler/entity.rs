//! [`ProfilesResource`] implementation for [`DomainModel`].
//!
//! A domain is read with `GetDomain` and written with `UpdateDomain`; its tags
//! live on `arn:...:domains/{DomainName}`.

use crate::clients::{ProfilesApi, ServiceFault};
use crate::handler::ProfilesResource;
use crate::model::DomainModel;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

#[async_trait]
impl ProfilesResource for DomainModel {
    const TYPE_NAME: &'static str = "AWS::CustomerProfiles::Domain";

    fn identifier(&self) -> String {
        self.domain_name.clone()
    }

    fn arn_resource_path(&self) -> String {
        format!("domains/{}", self.domain_name)
    }

    async fn fetch(&self, client: &dyn ProfilesApi) -> Result<Self, ServiceFault> {
        let description = client.get_domain(&self.domain_name).await?;
        info!(domain_name = %self.domain_name, "Got domain");
        Ok(description.into())
    }

    async fn apply(
        &self,
        client: &dyn ProfilesApi,
        tags: Option<HashMap<String, String>>,
    ) -> Result<Self, ServiceFault> {
        let description = client.update_domain(self.to_update_input(tags)).await?;
        info!(domain_name = %self.domain_name, "Updated domain");
        Ok(description.into())
    }
}
