//! # postboard binary
//!
//! Loads settings, installs logging, wires the in-memory repositories into the
//! HTTP router and serves until Ctrl+C or SIGTERM.

mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{router, AppState, ServiceInfo};
use configs::Settings;
use domains::{PostRepository, UserRepository};
use services::{PostService, UserService};
use storage_adapters::{InMemoryPostRepository, InMemoryUserRepository};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading configuration")?;
    telemetry::init(&settings.app)?;
    if let Some(path) = &settings.env_file {
        info!(path = %path.display(), "loaded .env file");
    }
    info!(
        address = %settings.server.address(),
        log_format = ?settings.app.log_format,
        "configuration loaded"
    );

    // One instance of each repository for the life of the process.
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());

    let state = AppState::new(
        UserService::new(users.clone()),
        PostService::new(posts, users),
        ServiceInfo {
            service_name: settings.app.service_name.clone(),
            title: settings.app.title.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    );
    let app = router(state);

    let address = settings.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(%address, service = %settings.app.service_name, "postboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("postboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("received Ctrl+C, shutting down"),
        _ = terminate => warn!("received SIGTERM, shutting down"),
    }
}
