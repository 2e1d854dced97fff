use anyhow::Context;
use api_client::EvaluationClient;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the stocklens correlation service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (notably STOCKLENS_TOKEN) from .env if present.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A backend proxy that correlates stock price series from the evaluation service.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server exposing the correlation endpoints.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the port from config.toml.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let settings = configuration::load_settings().context("Failed to load config.toml")?;

    let token = std::env::var("STOCKLENS_TOKEN")
        .context("STOCKLENS_TOKEN must be set (bearer token for the evaluation service)")?;
    let provider = EvaluationClient::new(&settings.provider.base_url, &token);

    let port = args.port.unwrap_or(settings.server.port);
    let addr = SocketAddr::new(settings.server.host, port);

    tracing::info!(
        universe = ?settings.correlation.symbol_universe,
        "Starting stocklens server"
    );
    web_server::run_server(addr, provider, settings).await
}
