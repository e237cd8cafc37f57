//! # Payoff MCP Server
//!
//! Model Context Protocol (MCP) server for long option payoff analysis.
//!
//! This crate exposes the `payoff-core` calculator as MCP tools so that AI
//! assistants like Claude Desktop, Cursor and other MCP-compatible clients
//! can ask for breakeven prices and payoff bounds.
//!
//! ## Tools
//!
//! - **call_option**: breakeven, max profit and max loss of a long call
//! - **put_option**: breakeven, max profit and max loss of a long put
//! - **option_profit_at_expiry**: intrinsic payoff and net profit at a given
//!   underlying price
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with stdio transport (for Claude Desktop)
//! payoff-mcp-server
//!
//! # Run with HTTP transport (for remote hosting)
//! payoff-mcp-server --http --port 8080
//!
//! # Load settings from a TOML file
//! payoff-mcp-server --config payoff-mcp.toml
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod server;

pub use config::{ConfigError, ServerConfig, Transport};
pub use server::OptionsMcpServer;

/// Server name for MCP protocol
pub const SERVER_NAME: &str = "payoff-mcp";

/// Server version (same as crate version)
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
