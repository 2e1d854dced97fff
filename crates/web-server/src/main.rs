use anyhow::Context;
use api_client::EvaluationClient;
use std::net::SocketAddr;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to load the settings and call the crate's `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = configuration::load_settings().context("Failed to load config.toml")?;
    let token = std::env::var("STOCKLENS_TOKEN")
        .context("STOCKLENS_TOKEN must be set (bearer token for the evaluation service)")?;
    let client = EvaluationClient::new(&settings.provider.base_url, &token);

    let addr = SocketAddr::new(settings.server.host, settings.server.port);
    web_server::run_server(addr, client, settings).await
}
