//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance API error: {0}")]
    YahooApi(String),

    /// Malformed record in a JSON-lines dataset
    #[error("malformed record on line {line}: {source}")]
    Parse {
        /// 1-based line number within the dataset
        line: usize,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Mapping table is missing an expected column
    #[error("mapping table is missing the '{0}' column")]
    MissingColumn(String),

    /// Invalid symbol
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<yahoo_finance_api::YahooError> for DataError {
    fn from(err: yahoo_finance_api::YahooError) -> Self {
        Self::YahooApi(err.to_string())
    }
}
