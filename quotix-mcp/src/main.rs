//! Server entry point: stdio transport, live Yahoo Finance provider.

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::EnvFilter;

use quotix_mcp::QuotixServer;
use quotix_yfinance::YfProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let provider = Arc::new(YfProvider::new_default());
    let service = QuotixServer::new(provider).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
