//! # configs
//!
//! Runtime settings for the postboard binary.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `POSTBOARD__<SECTION>__<KEY>` environment variables
//! 4. plain `PORT`, which overrides `server.port`
//!
//! A `.env` file in the working directory is loaded before any of these.
//!
//! Nothing here logs: settings are read before the subscriber exists, so the
//! binary reports what was loaded once telemetry is up.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "POSTBOARD";
pub const DEFAULT_CONFIG_FILE: &str = "config/default";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub app: AppSettings,
    /// The `.env` file applied by [`Settings::load`], if one was found.
    #[serde(skip)]
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port`, ready for a TCP bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Reported as `service` by the health endpoint.
    pub service_name: String,
    /// Reported as `message` by the root endpoint.
    pub title: String,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Settings {
    /// Reads `.env`, the default config file, the environment and `PORT`.
    pub fn load() -> Result<Self, SettingsError> {
        let env_file = dotenvy::dotenv().ok();
        let port = std::env::var("PORT").ok();
        let mut settings = Self::load_from(Some(DEFAULT_CONFIG_FILE), port.as_deref())?;
        settings.env_file = env_file;
        Ok(settings)
    }

    /// Builds settings from an optional config file and an optional raw port
    /// override. An empty override is ignored.
    pub fn load_from(file: Option<&str>, port_override: Option<&str>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("app.service_name", "postboard-api")?
            .set_default("app.title", "Postboard API Starter")?
            .set_default("app.log_level", "info")?
            .set_default("app.log_format", "text")?;

        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(raw) = port_override.filter(|raw| !raw.is_empty()) {
            let port = parse_port(raw)?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::Invalid {
                key: "server.port",
                reason: "must be greater than 0",
            });
        }
        if self.app.service_name.is_empty() {
            return Err(SettingsError::Invalid {
                key: "app.service_name",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

fn parse_port(raw: &str) -> Result<u16, SettingsError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(SettingsError::InvalidPort(raw.to_string())),
    }
}
