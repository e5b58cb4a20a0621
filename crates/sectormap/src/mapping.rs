//! Rows of the two-column ticker→sector mapping table.

use serde::{Deserialize, Serialize};

/// One row of the mapping table: a normalized ticker and its sector name.
///
/// The sector is an empty string in a skeleton table and is filled in by
/// the enrichment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    /// Normalized ticker symbol.
    pub ticker: String,

    /// Sector name, or empty if not yet assigned.
    #[serde(default)]
    pub sector: String,
}

impl MappingRow {
    /// Create a row with a known sector name.
    pub const fn new(ticker: String, sector: String) -> Self {
        Self { ticker, sector }
    }

    /// Create a placeholder row with an empty sector.
    pub const fn placeholder(ticker: String) -> Self {
        Self {
            ticker,
            sector: String::new(),
        }
    }

    /// Whether the sector column has been filled in.
    pub fn has_sector(&self) -> bool {
        !self.sector.is_empty()
    }

    /// Build skeleton rows from a sorted ticker list.
    pub fn skeleton<I, S>(tickers: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tickers
            .into_iter()
            .map(|t| Self::placeholder(t.into()))
            .collect()
    }
}
