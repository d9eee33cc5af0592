//! ARNs for CustomerProfiles resources, built from the request's environment.

use super::resource::ProfilesResource;
use cfn_framework::{HandlerError, ResourceHandlerRequest};

/// Builds the ARN of `model` in the account and region the request targets.
///
/// The partition comes from the request when present, otherwise it is derived
/// from the region.
pub fn resource_arn<R: ProfilesResource>(
    request: &ResourceHandlerRequest<R>,
    model: &R,
) -> Result<String, HandlerError> {
    let region = request
        .region
        .as_deref()
        .ok_or_else(|| HandlerError::InvalidRequest("request has no region".to_string()))?;
    let account_id = request
        .aws_account_id
        .as_deref()
        .ok_or_else(|| HandlerError::InvalidRequest("request has no AWS account id".to_string()))?;
    let partition = request
        .aws_partition
        .as_deref()
        .unwrap_or_else(|| partition_for_region(region));

    Ok(format!(
        "arn:{partition}:profile:{region}:{account_id}:{}",
        model.arn_resource_path()
    ))
}

fn partition_for_region(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        "aws-cn"
    } else if region.starts_with("us-gov-") {
        "aws-us-gov"
    } else {
        "aws"
    }
}
