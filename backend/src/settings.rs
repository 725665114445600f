//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `DB_*` and `HTTP_*` environment variables (or an
//! OrthoConfig configuration file); unset values fall back to local
//! development defaults.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "review";
const DEFAULT_CONNECTION_LIMIT: u32 = 10;
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_DRAIN_GRACE_SECS: u64 = 5;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid database URL: {message}")]
    DatabaseUrl { message: String },
    #[error("invalid HTTP bind address: {message}")]
    BindAddress { message: String },
}

/// Connection settings for the review store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Database name.
    pub name: Option<String>,
    /// Upper bound on pooled connections.
    pub connection_limit: Option<u32>,
}

impl DatabaseSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_DB_PORT)
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    /// Empty when unset.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DB_NAME)
    }

    pub fn connection_limit(&self) -> u32 {
        self.connection_limit.unwrap_or(DEFAULT_CONNECTION_LIMIT)
    }

    /// Assemble a `postgres://` URL with credentials percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DatabaseUrl`] when the host cannot be
    /// represented in a URL.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let invalid = |message: String| SettingsError::DatabaseUrl { message };

        let mut url = Url::parse(&format!("postgres://{DEFAULT_DB_HOST}"))
            .map_err(|err| invalid(err.to_string()))?;
        url.set_host(Some(self.host()))
            .map_err(|err| invalid(format!("host {:?}: {err}", self.host())))?;
        url.set_port(Some(self.port()))
            .map_err(|()| invalid("port cannot be set".to_owned()))?;
        url.set_username(self.user())
            .map_err(|()| invalid("user cannot be set".to_owned()))?;
        if !self.password().is_empty() {
            url.set_password(Some(self.password()))
                .map_err(|()| invalid("password cannot be set".to_owned()))?;
        }
        url.set_path(&format!("/{}", self.name()));

        Ok(url.into())
    }
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HTTP")]
pub struct HttpSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Seconds between failing liveness and closing the listener.
    pub drain_grace_secs: Option<u64>,
}

impl HttpSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HTTP_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_HTTP_PORT)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddress`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self.host().parse().map_err(|err| SettingsError::BindAddress {
            message: format!("{:?}: {err}", self.host()),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    pub fn drain_grace(&self) -> Duration {
        Duration::from_secs(self.drain_grace_secs.unwrap_or(DEFAULT_DRAIN_GRACE_SECS))
    }
}
