//! Resource tags and the helpers that reconcile previous and desired tag maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resource tag as it appears in the CloudFormation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Keys to strip from the resource before the desired tags are applied.
///
/// Every previously applied key is removed; a missing map means nothing to remove.
pub fn tags_to_remove(previous: Option<&HashMap<String, String>>) -> Vec<String> {
    previous
        .map(|tags| tags.keys().cloned().collect())
        .unwrap_or_default()
}

/// Collapses a missing or empty desired tag map into "send no tags".
pub fn normalize_desired_tags(desired: Option<HashMap<String, String>>) -> Option<HashMap<String, String>> {
    desired.filter(|tags| !tags.is_empty())
}

/// Rebuilds the model's tag list from a service tag map.
///
/// List order follows map iteration order and is not stable across calls.
pub fn tags_to_list(tags: Option<HashMap<String, String>>) -> Option<Vec<Tag>> {
    let tags = normalize_desired_tags(tags)?;
    Some(
        tags.into_iter()
            .map(|(key, value)| Tag { key, value })
            .collect(),
    )
}
