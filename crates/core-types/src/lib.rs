pub mod structs;

// Re-export the core types to provide a clean public API.
pub use structs::{
    AveragePayload, CorrelationMatrix, CorrelationResult, HistoryPayload, PricePoint, StockSummary,
};
