use crate::{error::AppError, AppState};
use api_client::StockDataProvider;
use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;
use core_types::{AveragePayload, CorrelationMatrix, CorrelationResult};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CorrelationQuery {
    /// Repeated parameter: `?ticker=NVDA&ticker=PYPL`.
    #[serde(default)]
    ticker: Vec<String>,
    minutes: Option<u32>,
}

/// # GET /avg-stock/:ticker
/// Passes the upstream average payload through for the single-stock view.
pub async fn get_average_stock(
    Path(ticker): Path<String>,
    Query(query): Query<WindowQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AveragePayload>, AppError> {
    let minutes = query
        .minutes
        .unwrap_or(state.settings.correlation.default_minutes);
    let payload = state.client.fetch_average(&ticker, minutes).await?;
    Ok(Json(payload))
}

/// # GET /stockcorrelation?minutes=50&ticker=NVDA&ticker=PYPL
/// Pairwise correlation with per-ticker average and full price history.
pub async fn get_stock_correlation(
    Query(query): Query<CorrelationQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CorrelationResult>, AppError> {
    let minutes = query
        .minutes
        .unwrap_or(state.settings.correlation.default_minutes);
    let result = state
        .aggregator
        .pair_correlation(&query.ticker, minutes)
        .await?;
    Ok(Json(result))
}

/// # GET /correlation-matrix?minutes=50
/// Correlation matrix over the configured symbol universe. Never hard-fails
/// on upstream trouble; failed cells degrade to 0.
pub async fn get_correlation_matrix(
    Query(query): Query<WindowQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<CorrelationMatrix> {
    let minutes = query
        .minutes
        .unwrap_or(state.settings.correlation.default_minutes);
    let matrix = state
        .aggregator
        .correlation_matrix(&state.settings.correlation.symbol_universe, minutes)
        .await;
    Json(matrix)
}
