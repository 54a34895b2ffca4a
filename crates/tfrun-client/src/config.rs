//! Client configuration.

use crate::error::ClientError;

/// Hostname used when none is configured.
pub const DEFAULT_HOSTNAME: &str = "app.terraform.io";

/// Environment variable holding the control plane hostname.
pub const HOSTNAME_ENV: &str = "TFE_HOSTNAME";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "TFE_TOKEN";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Control plane hostname, or a full `http(s)://` base address.
    pub hostname: String,

    /// API token sent as a bearer credential.
    pub token: String,
}

impl ClientConfig {
    /// Create a config for the default hostname.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            token: token.into(),
        }
    }

    /// Builder method to set the hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Load from `TFE_HOSTNAME` / `TFE_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Config(format!("{TOKEN_ENV} is not set")))?;

        let mut config = Self::new(token);
        if let Some(hostname) = lookup(HOSTNAME_ENV).filter(|h| !h.is_empty()) {
            config.hostname = hostname;
        }
        Ok(config)
    }

    /// Base URL of the v2 API.
    pub fn api_base_url(&self) -> String {
        let host = self.hostname.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}/api/v2")
        } else {
            format!("https://{host}/api/v2")
        }
    }
}
