use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Using `#[serde(rename_all = "camelCase")]` to automatically map between the
// evaluation service's JSON camelCase and Rust snake_case.

/// A single observation of a stock's price at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub price: f64,
    pub last_updated_at: DateTime<Utc>,
}

/// The average-price payload returned by the evaluation service when the
/// `aggregation=average` query parameter is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePayload {
    pub average: f64,
    /// The service echoes the underlying observations alongside the average.
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
}

/// The raw price-history payload returned by the evaluation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub data: Vec<PricePoint>,
}

/// Per-ticker slice of a pair-correlation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub average_price: f64,
    pub price_history: Vec<PricePoint>,
}

/// The response payload for a single-pair correlation request.
///
/// `stocks` is keyed by ticker symbol; a BTreeMap keeps the serialized
/// order deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub correlation: f64,
    pub stocks: BTreeMap<String, StockSummary>,
}

/// A symmetric N x N correlation matrix over a fixed ordered symbol universe.
///
/// `matrix[i][j]` is the coefficient between `symbols[i]` and `symbols[j]`;
/// the diagonal is always 1.0 and cells whose upstream fetch failed are 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// An identity-diagonal matrix with every off-diagonal cell zeroed.
    pub fn identity(symbols: Vec<String>) -> Self {
        let n = symbols.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { symbols, matrix }
    }

    /// Sets both `(i, j)` and `(j, i)` to `coefficient`.
    pub fn set_pair(&mut self, i: usize, j: usize, coefficient: f64) {
        self.matrix[i][j] = coefficient;
        self.matrix[j][i] = coefficient;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn correlation_result_serializes_with_wire_field_names() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 9, 10, 30, 0).unwrap();
        let mut stocks = BTreeMap::new();
        stocks.insert(
            "NVDA".to_string(),
            StockSummary {
                average_price: 453.57,
                price_history: vec![PricePoint {
                    price: 441.86,
                    last_updated_at: ts,
                }],
            },
        );
        let result = CorrelationResult {
            correlation: 0.92,
            stocks,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["correlation"], 0.92);
        assert_eq!(json["stocks"]["NVDA"]["averagePrice"], 453.57);
        assert_eq!(json["stocks"]["NVDA"]["priceHistory"][0]["price"], 441.86);
        assert!(json["stocks"]["NVDA"]["priceHistory"][0]["lastUpdatedAt"].is_string());
    }

    #[test]
    fn history_payload_tolerates_missing_data_field() {
        let payload: HistoryPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.data.is_empty());
    }

    #[test]
    fn identity_matrix_has_unit_diagonal() {
        let m = CorrelationMatrix::identity(vec!["AAPL".into(), "MSFT".into(), "TSLA".into()]);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.matrix[i][j], expected);
            }
        }
    }
}
