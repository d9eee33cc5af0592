use cfn_framework::{Action, HandlerErrorCode, OperationStatus, ResourceHandlerRequest};
use customerprofiles_resources::clients::{
    DomainDescription, MockProfilesApi, RecordedCall, ServiceFault, UpdateDomainInput,
};
use customerprofiles_resources::domain_handler;
use customerprofiles_resources::model::{DomainModel, Tag};
use std::collections::HashMap;
use std::sync::Arc;

const DOMAIN_NAME: &str = "testDomainName";

fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn domain_description(tags: Option<HashMap<String, String>>) -> DomainDescription {
    DomainDescription {
        domain_name: DOMAIN_NAME.to_string(),
        dead_letter_queue_url: Some("https://sqs.us-east-1.amazonaws.com/123456789012/dlq".to_string()),
        default_encryption_key: Some("arn:aws:kms:us-east-1:123456789012:key/1".to_string()),
        default_expiration_days: Some(10),
        tags,
        ..DomainDescription::default()
    }
}

fn update_request(
    previous_tags: Option<HashMap<String, String>>,
    desired_tags: Option<HashMap<String, String>>,
) -> ResourceHandlerRequest<DomainModel> {
    let mut model = DomainModel::new(DOMAIN_NAME);
    model.default_expiration_days = Some(10);

    let mut request = ResourceHandlerRequest::for_model(model).in_account("us-east-1", "123456789012");
    request.previous_resource_tags = previous_tags;
    request.desired_resource_tags = desired_tags;
    request
}

fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys
}

/// The full update flow: stale keys are removed, new tags are written, and
/// the response reflects the service's view of the domain.
#[tokio::test]
async fn test_update_replaces_previous_tags() {
    let mock = MockProfilesApi::new();
    mock.expect_get_domain().return_ok(domain_description(None));
    mock.expect_untag_resource().return_ok(());
    mock.expect_update_domain().return_ok(domain_description(Some(tags(&[
        ("Key2", "Value4"),
        ("Key3", "Value3"),
    ]))));

    let provider = domain_handler::new(Arc::new(mock.clone()));
    let request = update_request(
        Some(tags(&[("Key1", "Value1"), ("Key2", "Value2")])),
        Some(tags(&[("Key2", "Value4"), ("Key3", "Value3")])),
    );

    let event = provider.invoke(Action::Update, request).await;

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(event.callback_delay_seconds, 0);
    assert!(event.callback_context.is_none());
    assert!(event.resource_models.is_none());
    assert!(event.message.is_none());
    assert!(event.error_code.is_none());

    let model = event.resource_model.expect("success carries a model");
    assert_eq!(model.domain_name, DOMAIN_NAME);
    assert_eq!(model.default_expiration_days, Some(10));
    let output_tags: HashMap<String, String> = model
        .tags
        .expect("tags present")
        .into_iter()
        .map(|Tag { key, value }| (key, value))
        .collect();
    assert_eq!(output_tags.get("Key2").map(String::as_str), Some("Value4"));
    assert_eq!(output_tags.len(), 2);

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        RecordedCall::GetDomain {
            domain_name: DOMAIN_NAME.to_string()
        }
    );
    match &calls[1] {
        RecordedCall::UntagResource {
            resource_arn,
            tag_keys,
        } => {
            assert_eq!(
                resource_arn,
                "arn:aws:profile:us-east-1:123456789012:domains/testDomainName"
            );
            assert_eq!(sorted(tag_keys.clone()), vec!["Key1", "Key2"]);
        }
        other => panic!("expected untag, got {other:?}"),
    }
    assert_eq!(
        calls[2],
        RecordedCall::UpdateDomain(UpdateDomainInput {
            domain_name: DOMAIN_NAME.to_string(),
            default_expiration_days: Some(10),
            tags: Some(tags(&[("Key2", "Value4"), ("Key3", "Value3")])),
            ..UpdateDomainInput::default()
        })
    );
    mock.verify();
}

#[tokio::test]
async fn test_update_without_previous_tags_skips_untag() {
    for previous in [None, Some(HashMap::new())] {
        let mock = MockProfilesApi::new();
        mock.expect_get_domain().return_ok(domain_description(None));
        mock.expect_update_domain()
            .return_ok(domain_description(Some(tags(&[("Key1", "Value1")]))));

        let provider = domain_handler::new(Arc::new(mock.clone()));
        let event = provider
            .invoke(
                Action::Update,
                update_request(previous, Some(tags(&[("Key1", "Value1")]))),
            )
            .await;

        assert!(event.is_success());
        assert!(mock.untagged_keys().is_empty());
        mock.verify();
    }
}

#[tokio::test]
async fn test_update_with_no_desired_tags_sends_none() {
    for desired in [None, Some(HashMap::new())] {
        let mock = MockProfilesApi::new();
        mock.expect_get_domain().return_ok(domain_description(None));
        mock.expect_untag_resource().return_ok(());
        mock.expect_update_domain().return_ok(domain_description(Some(HashMap::new())));

        let provider = domain_handler::new(Arc::new(mock.clone()));
        let event = provider
            .invoke(
                Action::Update,
                update_request(Some(tags(&[("Key1", "Value1")])), desired),
            )
            .await;

        assert!(event.is_success());
        let model = event.resource_model.expect("success carries a model");
        assert!(model.tags.is_none(), "empty response tags become no tags");

        match &mock.calls()[2] {
            RecordedCall::UpdateDomain(input) => assert!(input.tags.is_none()),
            other => panic!("expected update, got {other:?}"),
        }
        assert_eq!(mock.untagged_keys(), vec![vec!["Key1".to_string()]]);
        mock.verify();
    }
}

fn faults() -> Vec<(ServiceFault, HandlerErrorCode)> {
    vec![
        (
            ServiceFault::BadRequest("invalid".to_string()),
            HandlerErrorCode::InvalidRequest,
        ),
        (
            ServiceFault::ResourceNotFound("missing".to_string()),
            HandlerErrorCode::NotFound,
        ),
        (
            ServiceFault::InternalServer("boom".to_string()),
            HandlerErrorCode::ServiceInternalError,
        ),
        (
            ServiceFault::Throttling("Rate exceeded".to_string()),
            HandlerErrorCode::GeneralServiceException,
        ),
    ]
}

/// A failed update leaves the previous tags removed; nothing re-tags them.
#[tokio::test]
async fn test_update_failure_is_classified() {
    for (fault, expected) in faults() {
        let mock = MockProfilesApi::new();
        mock.expect_get_domain().return_ok(domain_description(None));
        mock.expect_untag_resource().return_ok(());
        mock.expect_update_domain().return_err(fault.clone());

        let provider = domain_handler::new(Arc::new(mock.clone()));
        let event = provider
            .invoke(
                Action::Update,
                update_request(
                    Some(tags(&[("Key1", "Value1"), ("Key2", "Value2")])),
                    Some(tags(&[("Key2", "Value4"), ("Key3", "Value3")])),
                ),
            )
            .await;

        assert_eq!(event.status, OperationStatus::Failed);
        assert_eq!(event.error_code, Some(expected), "fault {fault:?}");
        assert!(event.resource_model.is_none());
        assert!(event
            .message
            .as_deref()
            .is_some_and(|message| message.contains(&fault.to_string())));

        let calls = mock.calls();
        assert_eq!(calls.len(), 3, "get, untag, update and nothing after");
        assert!(matches!(calls[0], RecordedCall::GetDomain { .. }));
        assert!(matches!(calls[1], RecordedCall::UntagResource { .. }));
        assert!(matches!(calls[2], RecordedCall::UpdateDomain(_)));
        assert_eq!(mock.untagged_keys().len(), 1);
        mock.verify();
    }
}

#[tokio::test]
async fn test_get_failure_aborts_before_any_mutation() {
    for (fault, expected) in faults() {
        let mock = MockProfilesApi::new();
        mock.expect_get_domain().return_err(fault);

        let provider = domain_handler::new(Arc::new(mock.clone()));
        let event = provider
            .invoke(
                Action::Update,
                update_request(
                    Some(tags(&[("Key1", "Value1")])),
                    Some(tags(&[("Key2", "Value2")])),
                ),
            )
            .await;

        assert_eq!(event.error_code, Some(expected));
        assert_eq!(mock.calls().len(), 1, "only the existence check may run");
        mock.verify();
    }
}

/// A failed untag stops the update; nothing is written afterwards.
#[tokio::test]
async fn test_untag_failure_is_classified() {
    let mut cases = faults();
    cases.push((
        ServiceFault::AccessDenied("not allowed".to_string()),
        HandlerErrorCode::GeneralServiceException,
    ));

    for (fault, expected) in cases {
        let mock = MockProfilesApi::new();
        mock.expect_get_domain().return_ok(domain_description(None));
        mock.expect_untag_resource().return_err(fault.clone());

        let provider = domain_handler::new(Arc::new(mock.clone()));
        let event = provider
            .invoke(
                Action::Update,
                update_request(Some(tags(&[("Key1", "Value1")])), None),
            )
            .await;

        assert_eq!(event.error_code, Some(expected), "fault {fault:?}");
        assert_eq!(mock.calls().len(), 2, "no update after a failed untag");
        mock.verify();
    }
}

#[tokio::test]
async fn test_update_needs_request_environment_to_untag() {
    let mock = MockProfilesApi::new();
    mock.expect_get_domain().return_ok(domain_description(None));

    let mut request = update_request(Some(tags(&[("Key1", "Value1")])), None);
    request.aws_account_id = None;

    let provider = domain_handler::new(Arc::new(mock.clone()));
    let event = provider.invoke(Action::Update, request).await;

    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert_eq!(mock.calls().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_read_returns_current_domain() {
    let mock = MockProfilesApi::new();
    mock.expect_get_domain()
        .return_ok(domain_description(Some(tags(&[("env", "prod")]))));

    let provider = domain_handler::new(Arc::new(mock.clone()));
    let event = provider
        .invoke(Action::Read, update_request(None, None))
        .await;

    assert!(event.is_success());
    let model = event.resource_model.expect("success carries a model");
    assert_eq!(model.tags, Some(vec![Tag::new("env", "prod")]));
    assert_eq!(
        model.default_encryption_key.as_deref(),
        Some("arn:aws:kms:us-east-1:123456789012:key/1")
    );
    mock.verify();
}

#[tokio::test]
async fn test_read_missing_domain_is_not_found() {
    let mock = MockProfilesApi::new();
    mock.expect_get_domain()
        .return_err(ServiceFault::ResourceNotFound("no such domain".to_string()));

    let provider = domain_handler::new(Arc::new(mock.clone()));
    let event = provider
        .invoke(Action::Read, update_request(None, None))
        .await;

    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    mock.verify();
}

#[tokio::test]
async fn test_create_is_not_supported() {
    let mock = MockProfilesApi::new();

    let provider = domain_handler::new(Arc::new(mock.clone()));
    let event = provider
        .invoke(Action::Create, update_request(None, None))
        .await;

    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert!(mock.calls().is_empty());
}
