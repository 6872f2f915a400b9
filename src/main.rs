// ABOUTME: Entry point for the porter binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use porter_auth::build_strategy;
use porter_server::{AppState, ServerConfig, create_router};

#[derive(Parser, Debug)]
#[command(name = "porter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the porter server.
    Up(UpArgs),
}

#[derive(Args, Debug)]
struct UpArgs {
    /// Host interface to bind (default: HOST env or 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (default: PORT env or 8000)
    #[arg(long)]
    port: Option<u16>,

    /// Path to a deployment config file (default: PORTER_CONFIG env)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Up(args) => up(args).await,
    }
}

async fn up(args: UpArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "porter=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let config = ServerConfig::with_overrides(args.host, args.port, args.config)
        .context("invalid server configuration")?;
    let strategy = build_strategy(config.auth_type);

    let bind = config.bind;
    tracing::info!(
        bind = %bind,
        auth_type = config.auth_type.as_str(),
        "porter starting up"
    );

    let state = Arc::new(AppState::new(config, strategy));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
