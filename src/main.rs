//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr and runs the configured
//! transport. Startup fails if the tool registry does not validate.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use uswds_mcp_server::core::{Config, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        react_default = config.framework.use_react_default,
        auth = config.auth.is_enforced(),
        "Configuration loaded"
    );

    let transport = TransportService::new(config.transport.clone());
    transport.run(config).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem on stderr.
///
/// `RUST_LOG` directives, when set, refine the configured level.
fn init_logging(level: &str) {
    let level: Level = level.trim().parse().unwrap_or(Level::INFO);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
