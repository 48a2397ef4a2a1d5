#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_USER_AGENT: &str = concat!("mcp-gateway/", env!("CARGO_PKG_VERSION"));

/// Resolved runtime configuration. Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub token_env: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_base_url", &self.api_base_url)
            .field("token_env", &self.token_env)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

impl GatewayConfig {
    /// Defaults overlaid with whatever the file sets.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: file.server.host.clone().unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            api_base_url: file
                .upstream
                .api_base_url
                .clone()
                .unwrap_or(defaults.api_base_url),
            token_env: file.upstream.token_env.clone().unwrap_or(defaults.token_env),
            token: None,
            user_agent: file
                .upstream
                .user_agent
                .clone()
                .unwrap_or(defaults.user_agent),
            request_timeout_seconds: file.upstream.request_timeout_seconds,
        }
    }

    /// Reads the API token from `token_env`. An unset or empty variable leaves it `None`.
    pub fn with_token_from_env(mut self) -> Self {
        self.token = std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty());
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for GatewayConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_non_empty_string("token_env", &self.token_env)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        if let Some(timeout) = self.request_timeout_seconds {
            validation::validate_positive_number("request_timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
