use api_client::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    /// Malformed request, rejected before any upstream call.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// A required upstream fetch failed; the whole pair request aborts.
    #[error("Failed to fetch stock data: {0}")]
    Upstream(#[from] ProviderError),
}
