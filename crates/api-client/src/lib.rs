use async_trait::async_trait;
use core_types::{AveragePayload, HistoryPayload, PricePoint};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

pub mod error;

pub use error::ProviderError;

/// The generic, abstract interface for the upstream stock data provider.
/// This trait is the contract the aggregation service programs against,
/// allowing the underlying implementation (live or mock) to be swapped out.
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Fetches the average price for one ticker over the trailing window.
    async fn fetch_average(&self, ticker: &str, minutes: u32)
        -> Result<AveragePayload, ProviderError>;

    /// Fetches the ordered price history for one ticker over the trailing window.
    async fn fetch_history(&self, ticker: &str, minutes: u32)
        -> Result<Vec<PricePoint>, ProviderError>;
}

/// A concrete `StockDataProvider` backed by the evaluation service.
#[derive(Clone)]
pub struct EvaluationClient {
    client: reqwest::Client,
    base_url: String,
}

impl EvaluationClient {
    /// Builds a client with the bearer credential baked into every request.
    ///
    /// The token is injected here rather than read from the environment so
    /// that credential sourcing stays the caller's concern.
    pub fn new(base_url: &str, token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).expect("Invalid bearer token"),
        );

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("Failed to build reqwest client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        ticker: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/stocks/{}", self.base_url, ticker);
        tracing::debug!(%url, "Fetching from evaluation service");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload = response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Deserialization(e.to_string()))?;
        Ok(payload)
    }
}

#[async_trait]
impl StockDataProvider for EvaluationClient {
    async fn fetch_average(
        &self,
        ticker: &str,
        minutes: u32,
    ) -> Result<AveragePayload, ProviderError> {
        self.get(
            ticker,
            &[
                ("minutes", minutes.to_string()),
                ("aggregation", "average".to_string()),
            ],
        )
        .await
    }

    async fn fetch_history(
        &self,
        ticker: &str,
        minutes: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let payload: HistoryPayload = self
            .get(ticker, &[("minutes", minutes.to_string())])
            .await?;
        Ok(payload.data)
    }
}
