use clap::Parser;
use mcp_gateway::utils::logger;
use mcp_gateway::{http, CliConfig, CommandGateway, GitHubClient};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 檔案為選用
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_logger(cli.verbose);
    }

    tracing::info!("Starting mcp-gateway");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    if config.token.is_none() {
        tracing::warn!(
            "{} is not set; upstream requests will be sent unauthenticated",
            config.token_env
        );
    }

    let client = GitHubClient::new(&config)?;
    let gateway = CommandGateway::new(client);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    http::serve(listener, gateway, http::shutdown_signal()).await?;

    Ok(())
}
