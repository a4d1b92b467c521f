#[derive(Debug, thiserror::Error)]
pub enum DiseaseShError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Mismatched history series: {0}")]
    MismatchedSeries(String),

    #[error("Country not found: {0}")]
    CountryNotFound(String),
}

pub type Result<T> = std::result::Result<T, DiseaseShError>;
