//! HTTP server command for the roster records API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::{create_pool_with_options, schema, DEFAULT_MAX_CONNECTIONS};
use roster_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database URL (file is created if missing)
    #[arg(long, env = "ROSTER_DATABASE_URL", default_value = "sqlite://example.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Skip creating the records table at startup
    #[arg(long)]
    pub no_init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting roster server on {}", args.bind);

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    if args.no_init_schema {
        tracing::info!("Skipping schema provisioning");
    } else {
        schema::ensure(&pool)
            .await
            .context("Failed to provision records table")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
