//! Session Todos MCP Server - Main Entry Point
//!
//! This is the main entry point for the session todo list server.
//! The actual implementation is in the `session_todos` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use session_todos::{Config, TodoServerHandler};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Session Todos MCP Server - named todo lists via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "session-todos.toml")]
    config: PathBuf,

    /// Session name, overrides `session.name` from the configuration
    #[arg(long)]
    session: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(session) = args.session {
        config.session.name = session;
    }

    install_tracing(&config.logging.filter);
    info!(session = %config.session.name, "starting session todos server");

    let handler = TodoServerHandler::from_config(&config);
    serve_stdio(handler).await?;
    Ok(())
}

fn install_tracing(default_filter: &str) {
    // RUST_LOG wins over the configured filter. Logs go to stderr; stdout
    // carries the MCP protocol.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
