use aggregator::error::AggregatorError;
use api_client::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregatorError),
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation failures are the client's fault (400); anything upstream is a
/// bad-gateway (502) with the cause attached under `details` for diagnostics.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::Aggregation(AggregatorError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message, None)
            }
            AppError::Aggregation(AggregatorError::Upstream(cause)) => {
                tracing::error!(error = %cause, "Upstream fetch failed during correlation.");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to calculate correlation".to_string(),
                    Some(cause.to_string()),
                )
            }
            AppError::Provider(cause) => {
                tracing::error!(error = %cause, "Upstream fetch failed.");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch stock data".to_string(),
                    Some(cause.to_string()),
                )
            }
        };

        let body = match details {
            Some(details) => json!({ "error": error_message, "details": details }),
            None => json!({ "error": error_message }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_body(err: AppError) -> Value {
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = AppError::Aggregation(AggregatorError::Validation(
            "Exactly two tickers are required.".to_string(),
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let err = AppError::Aggregation(AggregatorError::Upstream(ProviderError::Status(503)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn passthrough_provider_errors_map_to_bad_gateway() {
        let err = AppError::Provider(ProviderError::Deserialization("bad json".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn upstream_error_body_carries_summary_and_cause_details() {
        let body = response_body(AppError::Aggregation(AggregatorError::Upstream(
            ProviderError::Status(503),
        )))
        .await;

        assert_eq!(body["error"], "Failed to calculate correlation");
        assert!(body["details"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn passthrough_error_body_carries_summary_and_cause_details() {
        let body = response_body(AppError::Provider(ProviderError::Deserialization(
            "bad json".to_string(),
        )))
        .await;

        assert_eq!(body["error"], "Failed to fetch stock data");
        assert!(body["details"].as_str().unwrap().contains("bad json"));
    }

    #[tokio::test]
    async fn validation_error_body_omits_details() {
        let body = response_body(AppError::Aggregation(AggregatorError::Validation(
            "Exactly two tickers are required.".to_string(),
        )))
        .await;

        assert_eq!(body["error"], "Exactly two tickers are required.");
        assert!(body.get("details").is_none());
    }
}
