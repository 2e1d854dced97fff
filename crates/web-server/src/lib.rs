use aggregator::Aggregator;
use api_client::EvaluationClient;
use axum::{routing::get, Router};
use configuration::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    /// The aggregation service, driving the pair and matrix endpoints.
    pub aggregator: Aggregator<EvaluationClient>,
    /// A handle on the provider itself for the single-stock passthrough.
    pub client: EvaluationClient,
    pub settings: Settings,
}

/// The main function to configure and run the web server.
pub async fn run_server(
    addr: SocketAddr,
    client: EvaluationClient,
    settings: Settings,
) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState {
        aggregator: Aggregator::new(client.clone()),
        client,
        settings,
    });

    // The dashboard is served from another origin, so mirror the original
    // proxy's wide-open CORS policy.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/avg-stock/:ticker", get(handlers::get_average_stock))
        .route("/stockcorrelation", get(handlers::get_stock_correlation))
        .route("/correlation-matrix", get(handlers::get_correlation_matrix))
        .with_state(app_state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
