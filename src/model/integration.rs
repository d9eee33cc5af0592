//! Resource model for `AWS::CustomerProfiles::Integration`.
//!
//! An integration is identified by its domain and the URI of the source it
//! ingests from, and maps that source onto a profile object type.
use crate::clients::{IntegrationDescription, PutIntegrationInput};
use crate::model::{render_timestamp, tags_to_list, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegrationModel {
    pub domain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl IntegrationModel {
    pub fn new(
        domain_name: impl Into<String>,
        uri: impl Into<String>,
        object_type_name: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            uri: Some(uri.into()),
            object_type_name: Some(object_type_name.into()),
            ..Self::default()
        }
    }

    /// The `PutIntegration` payload carrying this model's mapping and `tags`.
    pub fn to_put_input(&self, tags: Option<HashMap<String, String>>) -> PutIntegrationInput {
        PutIntegrationInput {
            domain_name: self.domain_name.clone(),
            uri: self.uri.clone(),
            object_type_name: self.object_type_name.clone(),
            tags,
        }
    }
}

impl From<IntegrationDescription> for IntegrationModel {
    fn from(description: IntegrationDescription) -> Self {
        Self {
            domain_name: description.domain_name,
            uri: description.uri,
            object_type_name: description.object_type_name,
            created_at: description.created_at.map(render_timestamp),
            last_updated_at: description.last_updated_at.map(render_timestamp),
            tags: tags_to_list(description.tags),
        }
    }
}
