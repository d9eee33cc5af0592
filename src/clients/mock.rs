//! # Mock CustomerProfiles API
//!
//! `MockProfilesApi` implements [`ProfilesApi`] entirely in memory. Tests queue
//! the responses they want, run a handler against the mock, then inspect the
//! calls it recorded. Expectations are consumed in order: the first remote call
//! gets the first expectation, and so on.
//!
//! ## When to use the mock vs the SDK client
//!
//! | Feature | MockProfilesApi | SdkProfilesClient |
//! |---------|-----------------|-------------------|
//! | **Speed** | Instant (in-memory) | Network round trips |
//! | **Determinism** | 100% Deterministic | Depends on the service |
//! | **Fault Injection** | Easy (`return_err`) | Hard (requires real failures) |
//! | **Use Case** | Handler logic, error mapping | End-to-end against an account |
//!
//! ## Example
//!
//! ```rust
//! use customerprofiles_resources::clients::{
//!     DomainDescription, MockProfilesApi, ProfilesApi, RecordedCall, ServiceFault,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockProfilesApi::new();
//!     mock.expect_get_domain().return_ok(DomainDescription::default());
//!     mock.expect_untag_resource()
//!         .return_err(ServiceFault::Throttling("Rate exceeded".to_string()));
//!
//!     assert!(mock.get_domain("d1").await.is_ok());
//!     assert!(mock.untag_resource("arn", vec!["k".to_string()]).await.is_err());
//!
//!     assert_eq!(
//!         mock.calls()[0],
//!         RecordedCall::GetDomain { domain_name: "d1".to_string() }
//!     );
//!     mock.verify();
//! }
//! ```

use super::fault::ServiceFault;
use super::profiles_api::{
    DomainDescription, IntegrationDescription, ProfilesApi, PutIntegrationInput, UpdateDomainInput,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A scripted response for the next remote call.
#[derive(Debug)]
enum Expectation {
    GetDomain(Result<DomainDescription, ServiceFault>),
    UpdateDomain(Result<DomainDescription, ServiceFault>),
    GetIntegration(Result<IntegrationDescription, ServiceFault>),
    PutIntegration(Result<IntegrationDescription, ServiceFault>),
    UntagResource(Result<(), ServiceFault>),
}

/// A remote call as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    GetDomain {
        domain_name: String,
    },
    UpdateDomain(UpdateDomainInput),
    GetIntegration {
        domain_name: String,
        uri: Option<String>,
    },
    PutIntegration(PutIntegrationInput),
    UntagResource {
        resource_arn: String,
        tag_keys: Vec<String>,
    },
}

/// In-memory [`ProfilesApi`] with expectation tracking.
#[derive(Clone, Default)]
pub struct MockProfilesApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProfilesApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Tag keys of every `UntagResource` call received so far.
    pub fn untagged_keys(&self) -> Vec<Vec<String>> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                RecordedCall::UntagResource { tag_keys, .. } => Some(tag_keys.clone()),
                _ => None,
            })
            .collect()
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn push(&self, expectation: Expectation) {
        lock(&self.expectations).push_back(expectation);
    }

    fn next(&self, call: RecordedCall) -> Expectation {
        lock(&self.calls).push(call.clone());
        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(expectation) => expectation,
            None => panic!("Unexpected call with no expectation left: {call:?}"),
        }
    }
}

macro_rules! expectation_builders {
    ($($operation:ident => $output:ty),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Builder for `" $operation "` expectations."]
                pub struct [<$operation Expectation>] {
                    mock: MockProfilesApi,
                }

                impl [<$operation Expectation>] {
                    /// Sets the expectation to return a successful result.
                    pub fn return_ok(self, value: $output) {
                        self.mock.push(Expectation::$operation(Ok(value)));
                    }

                    /// Sets the expectation to fail with `fault`.
                    pub fn return_err(self, fault: ServiceFault) {
                        self.mock.push(Expectation::$operation(Err(fault)));
                    }
                }

                impl MockProfilesApi {
                    #[doc = "Expects a `" $operation "` call."]
                    pub fn [<expect_ $operation:snake>](&self) -> [<$operation Expectation>] {
                        [<$operation Expectation>] { mock: self.clone() }
                    }
                }
            )*
        }
    };
}

expectation_builders! {
    GetDomain => DomainDescription,
    UpdateDomain => DomainDescription,
    GetIntegration => IntegrationDescription,
    PutIntegration => IntegrationDescription,
    UntagResource => (),
}

#[async_trait]
impl ProfilesApi for MockProfilesApi {
    async fn get_domain(&self, domain_name: &str) -> Result<DomainDescription, ServiceFault> {
        match self.next(RecordedCall::GetDomain {
            domain_name: domain_name.to_string(),
        }) {
            Expectation::GetDomain(response) => response,
            other => panic!("get_domain called, but next expectation was {other:?}"),
        }
    }

    async fn update_domain(&self, input: UpdateDomainInput) -> Result<DomainDescription, ServiceFault> {
        match self.next(RecordedCall::UpdateDomain(input)) {
            Expectation::UpdateDomain(response) => response,
            other => panic!("update_domain called, but next expectation was {other:?}"),
        }
    }

    async fn get_integration(
        &self,
        domain_name: &str,
        uri: Option<&str>,
    ) -> Result<IntegrationDescription, ServiceFault> {
        match self.next(RecordedCall::GetIntegration {
            domain_name: domain_name.to_string(),
            uri: uri.map(str::to_string),
        }) {
            Expectation::GetIntegration(response) => response,
            other => panic!("get_integration called, but next expectation was {other:?}"),
        }
    }

    async fn put_integration(
        &self,
        input: PutIntegrationInput,
    ) -> Result<IntegrationDescription, ServiceFault> {
        match self.next(RecordedCall::PutIntegration(input)) {
            Expectation::PutIntegration(response) => response,
            other => panic!("put_integration called, but next expectation was {other:?}"),
        }
    }

    async fn untag_resource(&self, resource_arn: &str, tag_keys: Vec<String>) -> Result<(), ServiceFault> {
        match self.next(RecordedCall::UntagResource {
            resource_arn: resource_arn.to_string(),
            tag_keys,
        }) {
            Expectation::UntagResource(response) => response,
            other => panic!("untag_resource called, but next expectation was {other:?}"),
        }
    }
}
