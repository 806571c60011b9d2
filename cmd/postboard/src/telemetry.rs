//! Global `tracing` subscriber.

use anyhow::Context;
use configs::{AppSettings, LogFormat};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins over the configured level when both are present.
pub fn init(app: &AppSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.log_level))
        .with_context(|| format!("invalid log filter {:?}", app.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match app.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    };
    installed.context("installing tracing subscriber")
}
