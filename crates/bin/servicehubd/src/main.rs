//! # servicehubd — servicehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing`
//! - Fill the service registry from the enabled providers, then freeze it
//! - Build the axum router around the dispatcher
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no dispatch logic belongs here.

mod config;

use servicehub_adapter_builtin::BuiltinServices;
use servicehub_adapter_http_axum::router;
use servicehub_adapter_http_axum::state::AppState;
use servicehub_app::registry::ServiceRegistry;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Services
    let mut registry = ServiceRegistry::new();
    if config.services.builtin_enabled {
        registry.install(&BuiltinServices);
    }
    if registry.is_empty() {
        tracing::warn!("no services registered, every dispatch will be rejected");
    }
    tracing::info!(services = ?registry.list(), "service registry ready");

    // HTTP
    let state =
        AppState::from_registry(registry).with_max_body_bytes(config.server.max_body_bytes);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("servicehubd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("servicehubd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(err) = invalid {
        tracing::warn!(filter, error = %err, "invalid log filter, falling back to `info`");
    }
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
