//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PERSONNEL_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::RuntimeMode;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Failures turning loaded settings into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(String),
    #[error("invalid bind address {value}: {message}")]
    BindAddr { value: String, message: String },
}

/// Runtime settings of the personnel service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PERSONNEL")]
pub struct AppSettings {
    /// PostgreSQL connection string. Fixture data is served when absent.
    pub database_url: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// `production` or `development`.
    pub runtime_mode: Option<String>,
    pub pool_max_size: Option<u32>,
    pub pool_connection_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn from_process() -> Result<Self, SettingsError> {
        Self::load_from_iter(std::env::args_os())
            .map_err(|err| SettingsError::Load(err.to_string()))
    }

    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Unknown modes fall back to production.
    #[must_use]
    pub fn runtime_mode(&self) -> RuntimeMode {
        RuntimeMode::from_setting(self.runtime_mode.as_deref())
    }

    /// Pool configuration; `None` when no database URL is configured.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().map(str::trim)?;
        if url.is_empty() {
            return None;
        }
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_connection_timeout(Duration::from_secs(
                    self.pool_connection_timeout_secs
                        .unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
                )),
        )
    }
}
