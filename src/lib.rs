pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::github::GitHubClient;
pub use config::GatewayConfig;
pub use core::gateway::CommandGateway;
pub use http::create_router;
pub use utils::error::{GatewayError, Result};
