use customerprofiles_resources::lifecycle::{
    failure_response, setup_tracing, shared_client, HandlerSystem, ProfilesClientConfig,
};
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut payload = String::new();
    tokio::io::stdin()
        .read_to_string(&mut payload)
        .await
        .map_err(|e| format!("failed to read invocation from stdin: {e}"))?;

    let response = match ProfilesClientConfig::from_env() {
        Ok(config) => {
            let system = HandlerSystem::new(shared_client(&config).await);
            system.dispatch(&payload).await
        }
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            failure_response(&e.into())
        }
    }
    .map_err(|e| format!("failed to encode progress event: {e}"))?;

    info!("Invocation complete");
    println!("{response}");
    Ok(())
}
