use anyhow::Result;
use clap::{Parser, Subcommand};

/// tvshows - television show browser
#[derive(Parser)]
#[command(name = "tvshows")]
#[command(about = "Web front-end over a table of television shows", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tvshows::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tvshows::observability::init_observability("tvshows", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: tvshows::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let pool = tvshows::db::create_pool(&config.database).await?;

    // The server must not bind its port against an unreachable database
    tracing::info!("Pinging database...");
    if let Err(err) = tvshows::db::ping(&pool).await {
        tracing::error!(err = %err, "Cannot start server: database unreachable");
        return Err(err.into());
    }

    let app = tvshows::create_app(pool);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Application started on {} at {}",
        listener.local_addr()?,
        chrono::Utc::now()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
