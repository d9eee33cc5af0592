//! Resource model for `AWS::CustomerProfiles::Domain`.
//!
//! # Handler
//! [`DomainModel`] implements [`ProfilesResource`](crate::handler::ProfilesResource),
//! which lets the generic [`ProfilesHandler`](crate::handler::ProfilesHandler)
//! read and update it. See [`crate::domain_handler`] for the remote calls involved.
use crate::clients::{DomainDescription, UpdateDomainInput};
use crate::model::{render_timestamp, tags_to_list, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainModel {
    pub domain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_letter_queue_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_encryption_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expiration_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl DomainModel {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Self::default()
        }
    }

    /// The `UpdateDomain` payload carrying this model's configuration and `tags`.
    pub fn to_update_input(&self, tags: Option<HashMap<String, String>>) -> UpdateDomainInput {
        UpdateDomainInput {
            domain_name: self.domain_name.clone(),
            dead_letter_queue_url: self.dead_letter_queue_url.clone(),
            default_encryption_key: self.default_encryption_key.clone(),
            default_expiration_days: self.default_expiration_days,
            tags,
        }
    }
}

impl From<DomainDescription> for DomainModel {
    fn from(description: DomainDescription) -> Self {
        Self {
            domain_name: description.domain_name,
            dead_letter_queue_url: description.dead_letter_queue_url,
            default_encryption_key: description.default_encryption_key,
            default_expiration_days: description.default_expiration_days,
            created_at: description.created_at.map(render_timestamp),
            last_updated_at: description.last_updated_at.map(render_timestamp),
            tags: tags_to_list(description.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_description_copies_every_field() {
        let at = Utc.with_ymd_and_hms(2020, 11, 5, 12, 0, 0).unwrap();
        let description = DomainDescription {
            domain_name: "testDomainName".to_string(),
            dead_letter_queue_url: Some("https://sqs.us-east-1.amazonaws.com/123/dlq".to_string()),
            default_encryption_key: Some("kmsKey".to_string()),
            default_expiration_days: Some(10),
            created_at: Some(at),
            last_updated_at: Some(at),
            tags: Some(HashMap::from([("Key2".to_string(), "Value4".to_string())])),
        };

        let model = DomainModel::from(description);

        assert_eq!(model.domain_name, "testDomainName");
        assert_eq!(model.default_encryption_key.as_deref(), Some("kmsKey"));
        assert_eq!(model.default_expiration_days, Some(10));
        assert_eq!(model.created_at.as_deref(), Some("2020-11-05T12:00:00Z"));
        assert_eq!(model.tags, Some(vec![Tag::new("Key2", "Value4")]));
    }

    #[test]
    fn test_serializes_with_schema_property_names() {
        let mut model = DomainModel::new("d1");
        model.default_expiration_days = Some(7);
        model.tags = Some(vec![Tag::new("env", "prod")]);

        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "DomainName": "d1",
                "DefaultExpirationDays": 7,
                "Tags": [{ "Key": "env", "Value": "prod" }]
            })
        );
    }

    #[test]
    fn test_update_input_carries_configuration() {
        let mut model = DomainModel::new("d1");
        model.dead_letter_queue_url = Some("queue".to_string());

        let input = model.to_update_input(None);

        assert_eq!(input.domain_name, "d1");
        assert_eq!(input.dead_letter_queue_url.as_deref(), Some("queue"));
        assert!(input.tags.is_none());
    }
}
