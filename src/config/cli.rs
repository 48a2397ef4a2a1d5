use crate::config::toml_config::TomlConfig;
use crate::config::GatewayConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mcp-gateway")]
#[command(about = "HTTP command gateway for the GitHub repository API")]
pub struct CliConfig {
    #[arg(long, short, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Address to bind [default: 0.0.0.0]")]
    pub host: Option<String>,

    #[arg(long, short, help = "Port to listen on [default: 5000]")]
    pub port: Option<u16>,

    #[arg(long, help = "Base URL of the upstream API [default: https://api.github.com]")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// CLI flags over the config file over defaults, plus the token from the environment.
    pub fn resolve(&self) -> Result<GatewayConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut config = GatewayConfig::from_toml(&file);
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(api_base_url) = &self.api_base_url {
            config.api_base_url = api_base_url.clone();
        }

        let config = config.with_token_from_env();
        config.validate()?;
        Ok(config)
    }
}
