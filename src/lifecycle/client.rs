//! The process-wide CustomerProfiles client.

use super::config::ProfilesClientConfig;
use crate::clients::{ProfilesApi, SdkProfilesClient};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

static SHARED_CLIENT: OnceCell<Arc<SdkProfilesClient>> = OnceCell::const_new();

/// Returns the shared SDK client, building it from `config` on first use.
///
/// Later calls reuse the first client; their `config` is ignored.
pub async fn shared_client(config: &ProfilesClientConfig) -> Arc<dyn ProfilesApi> {
    let client = SHARED_CLIENT
        .get_or_init(|| async {
            info!(region = ?config.region, endpoint = ?config.endpoint, "Building CustomerProfiles client");
            Arc::new(SdkProfilesClient::new(config).await)
        })
        .await;
    client.clone()
}
