use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("The evaluation service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The evaluation service returned a non-success status: {0}")]
    Status(u16),

    #[error("Failed to deserialize the evaluation service response: {0}")]
    Deserialization(String),
}
