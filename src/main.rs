use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::EnvFilter;

use mcp_rental_front::adapters::rest::client::HttpRentalApi;
use mcp_rental_front::app::App;
use mcp_rental_front::config::load_config;
use mcp_rental_front::mcp::server::RentalFrontServer;
use mcp_rental_front::ports::rental_api::RentalApi;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        dirs_next().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn dirs_next() -> PathBuf {
    // Look in the directory where the binary is
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting mcp-rental-front server");

    let config_path = find_config_path();
    let config = load_config(&config_path)?;
    tracing::info!(base_url = %config.api.base_url, "Using rental API");

    let api: Arc<dyn RentalApi> = Arc::new(HttpRentalApi::new(&config.api)?);
    let server = RentalFrontServer::new(App::new(api, &config.booking));

    // Start MCP server over stdio
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
