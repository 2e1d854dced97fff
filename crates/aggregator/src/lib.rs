use analytics::pearson;
use api_client::StockDataProvider;
use core_types::{CorrelationMatrix, CorrelationResult, PricePoint, StockSummary};
use futures::future::join_all;
use std::collections::BTreeMap;

pub mod error;

pub use error::AggregatorError;

/// The aggregation service: orchestrates upstream fetches for the pair and
/// matrix views and feeds the resulting series into the correlation engine.
///
/// Generic over the provider so tests can substitute a mock for the live
/// evaluation-service client.
pub struct Aggregator<P: StockDataProvider> {
    provider: P,
}

impl<P: StockDataProvider> Aggregator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Computes the correlation between exactly two distinct tickers.
    ///
    /// Validation happens before any I/O. The four upstream calls (two
    /// averages, two histories) run concurrently and the request is
    /// all-or-nothing: any failed fetch aborts with an upstream error.
    pub async fn pair_correlation(
        &self,
        tickers: &[String],
        minutes: u32,
    ) -> Result<CorrelationResult, AggregatorError> {
        let [ticker_a, ticker_b] = match tickers {
            [a, b] => [a, b],
            _ => {
                return Err(AggregatorError::Validation(
                    "Exactly two tickers are required.".to_string(),
                ));
            }
        };
        if ticker_a == ticker_b {
            return Err(AggregatorError::Validation(
                "The two tickers must be distinct.".to_string(),
            ));
        }

        let (avg_a, avg_b, history_a, history_b) = tokio::try_join!(
            self.provider.fetch_average(ticker_a, minutes),
            self.provider.fetch_average(ticker_b, minutes),
            self.provider.fetch_history(ticker_a, minutes),
            self.provider.fetch_history(ticker_b, minutes),
        )?;

        let correlation = correlate_histories(&history_a, &history_b);

        let mut stocks = BTreeMap::new();
        stocks.insert(
            ticker_a.clone(),
            StockSummary {
                average_price: avg_a.average,
                price_history: history_a,
            },
        );
        stocks.insert(
            ticker_b.clone(),
            StockSummary {
                average_price: avg_b.average,
                price_history: history_b,
            },
        );

        Ok(CorrelationResult { correlation, stocks })
    }

    /// Computes the full correlation matrix over the configured universe.
    ///
    /// The diagonal is fixed at 1.0 with no fetch. Every unordered pair is
    /// fetched concurrently and joined in bulk; a failed pair degrades that
    /// cell to 0.0 instead of aborting the rest, so this operation never
    /// hard-fails on upstream trouble.
    pub async fn correlation_matrix(&self, universe: &[String], minutes: u32) -> CorrelationMatrix {
        let mut matrix = CorrelationMatrix::identity(universe.to_vec());

        let mut pair_futures = Vec::new();
        for i in 0..universe.len() {
            for j in (i + 1)..universe.len() {
                pair_futures.push(self.pair_cell(universe, i, j, minutes));
            }
        }

        for (i, j, coefficient) in join_all(pair_futures).await {
            matrix.set_pair(i, j, coefficient);
        }

        matrix
    }

    /// Fetches one pair's histories and computes its coefficient, defaulting
    /// to 0.0 on any upstream failure (soft failure, logged only).
    async fn pair_cell(
        &self,
        universe: &[String],
        i: usize,
        j: usize,
        minutes: u32,
    ) -> (usize, usize, f64) {
        let fetched = tokio::try_join!(
            self.provider.fetch_history(&universe[i], minutes),
            self.provider.fetch_history(&universe[j], minutes),
        );

        let coefficient = match fetched {
            Ok((history_a, history_b)) => correlate_histories(&history_a, &history_b),
            Err(e) => {
                tracing::warn!(
                    pair = %format!("{}/{}", universe[i], universe[j]),
                    error = %e,
                    "Pairwise fetch failed; defaulting cell to 0"
                );
                0.0
            }
        };

        (i, j, coefficient)
    }
}

/// Extracts the price-only sequences and runs the engine.
fn correlate_histories(a: &[PricePoint], b: &[PricePoint]) -> f64 {
    let prices_a: Vec<f64> = a.iter().map(|p| p.price).collect();
    let prices_b: Vec<f64> = b.iter().map(|p| p.price).collect();
    pearson(&prices_a, &prices_b)
}
