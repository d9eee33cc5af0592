/// Initializes the tracing/logging infrastructure for a handler process.
///
/// Output goes to stderr so stdout stays free for the progress event.
///
/// Set `RUST_LOG` to control verbosity:
/// - `RUST_LOG=info` - invocation outcomes and remote calls
/// - `RUST_LOG=debug` - full request payloads
/// - `RUST_LOG=customerprofiles_resources=debug` - debug for the handlers only
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Handler started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
