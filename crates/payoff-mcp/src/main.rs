//! Payoff MCP Server - long option payoff analysis via Model Context Protocol
//!
//! # Usage
//!
//! ## stdio transport (for Claude Desktop, local use)
//! ```bash
//! payoff-mcp-server
//! ```
//!
//! ## HTTP transport (for remote hosting)
//! ```bash
//! payoff-mcp-server --http --port 8080
//! ```
//!
//! ## Config file
//! ```bash
//! payoff-mcp-server --config payoff-mcp.toml
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payoff_mcp::{OptionsMcpServer, ServerConfig, Transport};

/// Payoff MCP Server - breakeven and payoff bounds for long calls and puts
#[derive(Parser, Debug)]
#[command(name = "payoff-mcp-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use HTTP transport instead of stdio (for remote hosting)
    #[arg(long)]
    http: bool,

    /// HTTP port (only used with HTTP transport)
    #[arg(short, long)]
    port: Option<u16>,

    /// HTTP host to bind to (only used with HTTP transport)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolve the effective configuration: file first, then flags on top.
    fn resolve(&self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if self.http {
            config.transport = Transport::Http;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve()?;

    // Initialize logging
    let default_filter = if args.verbose {
        "payoff_mcp=debug,payoff_core=debug,rmcp=debug".to_string()
    } else {
        config
            .log_filter
            .clone()
            .unwrap_or_else(|| "payoff_mcp=info,rmcp=warn".to_string())
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Only log to stderr for stdio transport to avoid corrupting the protocol
    match config.transport {
        Transport::Http => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        Transport::Stdio => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    let server = OptionsMcpServer::new();
    tracing::info!("Starting Payoff MCP Server");

    match config.transport {
        Transport::Http => run_http_server(&config).await,
        Transport::Stdio => run_stdio_server(server).await,
    }
}

/// Run the server with stdio transport (for Claude Desktop)
async fn run_stdio_server(server: OptionsMcpServer) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    tracing::info!("Using stdio transport");

    let tools = server.tool_names().join(", ");
    let service = server.serve(stdio()).await?;

    tracing::info!("Payoff MCP Server ready");
    tracing::info!("Available tools: {}", tools);

    service.waiting().await?;

    Ok(())
}

/// Run the server with HTTP transport (for remote hosting)
#[cfg(feature = "http")]
async fn run_http_server(config: &ServerConfig) -> anyhow::Result<()> {
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };
    use tower_http::cors::{Any, CorsLayer};

    let addr = config.bind_addr();
    tracing::info!("Using HTTP transport on {}", addr);

    let mcp_service = StreamableHttpService::new(
        || Ok(OptionsMcpServer::new()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    // Configure CORS for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest_service("/mcp", mcp_service)
        .route("/health", axum::routing::get(health_check))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Payoff MCP Server listening on http://{}/mcp", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for CTRL+C: {}", e);
            }
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

/// Health check endpoint for HTTP transport
#[cfg(feature = "http")]
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback when HTTP feature is not enabled
#[cfg(not(feature = "http"))]
async fn run_http_server(_config: &ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!("HTTP transport not available. Rebuild with: cargo build --features http")
}
