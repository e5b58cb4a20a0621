//! Sector lookup against Yahoo Finance with rate limiting.

use crate::error::{DataError, Result};
use sectormap::Sector;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// Outcome of a sector lookup for a single ticker.
///
/// A failed lookup is distinct from a confirmed "no sector assigned", so
/// downstream consumers never have to guess which of the two an empty
/// sector cell means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectorLookup {
    /// The provider returned a sector that maps onto the canonical table.
    Found(Sector),

    /// The provider answered, but no sector is assigned to the ticker.
    NotFound,

    /// The lookup itself failed: transport error, API error, or a sector
    /// name that maps onto none of the 11 canonical sectors.
    Failed(String),
}

impl SectorLookup {
    /// The value to place in the sector column of a mapping table.
    ///
    /// `NotFound` and `Failed` both render empty for table compatibility;
    /// callers that need to tell them apart keep the outcome itself.
    pub const fn csv_value(&self) -> &'static str {
        match self {
            Self::Found(sector) => sector.name(),
            Self::NotFound | Self::Failed(_) => "",
        }
    }

    /// Whether the lookup produced a usable sector.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Classify the raw sector string of an asset profile.
    fn from_profile(profile_sector: Option<String>) -> Self {
        match profile_sector {
            Some(name) => Sector::from_name(&name).map_or_else(
                || Self::Failed(format!("unrecognized sector name '{name}'")),
                Self::Found,
            ),
            None => Self::NotFound,
        }
    }
}

/// Yahoo Finance sector provider with rate limiting.
///
/// Queries the quoteSummary asset-profile endpoint one ticker at a time,
/// sleeping between requests (default 1 req/sec).
pub struct YahooSectorProvider {
    provider: Mutex<yahoo::YahooConnector>,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooSectorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooSectorProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooSectorProvider {
    /// Create a provider with default rate limiting (1 req/sec).
    pub fn new() -> Result<Self> {
        Self::with_rate_limit(Duration::from_millis(1000))
    }

    /// Create a provider with a custom inter-request delay.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Result<Self> {
        let provider = yahoo::YahooConnector::new()?;

        Ok(Self {
            provider: Mutex::new(provider),
            rate_limit_delay,
        })
    }

    /// The configured inter-request delay.
    pub const fn rate_limit_delay(&self) -> Duration {
        self.rate_limit_delay
    }

    /// Look up the sector for a single ticker.
    ///
    /// Never aborts a batch: any per-ticker failure is folded into
    /// [`SectorLookup::Failed`], so a run over N tickers always yields N
    /// outcomes. The rate-limit delay is applied after every call,
    /// successful or not.
    pub async fn lookup(&self, ticker: &str) -> SectorLookup {
        let outcome = match self.fetch_profile_sector(ticker).await {
            Ok(profile_sector) => SectorLookup::from_profile(profile_sector),
            Err(e) => SectorLookup::Failed(e.to_string()),
        };

        sleep(self.rate_limit_delay).await;

        outcome
    }

    /// Fetch the raw sector string from the ticker's asset profile.
    async fn fetch_profile_sector(&self, ticker: &str) -> Result<Option<String>> {
        if ticker.is_empty() {
            return Err(DataError::InvalidSymbol("empty symbol".to_string()));
        }

        // The connector refreshes its crumb on demand, hence &mut.
        let info = {
            let mut provider = self.provider.lock().await;
            provider.get_ticker_info(ticker).await?
        };

        let summary = info
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|results| results.into_iter().next());

        Ok(summary
            .and_then(|s| s.asset_profile)
            .and_then(|profile| profile.sector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_name() {
        let outcome = SectorLookup::from_profile(Some("Energy".to_string()));
        assert_eq!(outcome, SectorLookup::Found(Sector::Energy));
    }

    #[test]
    fn test_classify_yahoo_alias() {
        let outcome = SectorLookup::from_profile(Some("Financial Services".to_string()));
        assert_eq!(outcome, SectorLookup::Found(Sector::Financials));
    }

    #[test]
    fn test_classify_unrecognized_name_is_a_failure() {
        let outcome = SectorLookup::from_profile(Some("Conglomerates".to_string()));
        assert!(matches!(outcome, SectorLookup::Failed(_)));
        assert_eq!(outcome.csv_value(), "");
    }

    #[test]
    fn test_classify_absent_sector_is_not_found() {
        assert_eq!(SectorLookup::from_profile(None), SectorLookup::NotFound);
    }

    #[test]
    fn test_csv_value() {
        assert_eq!(
            SectorLookup::Found(Sector::HealthCare).csv_value(),
            "Health Care"
        );
        assert_eq!(SectorLookup::NotFound.csv_value(), "");
        assert_eq!(SectorLookup::Failed("timeout".to_string()).csv_value(), "");
    }

    #[tokio::test]
    #[ignore = "hits the live Yahoo Finance API"]
    async fn test_lookup_known_ticker() {
        let provider = YahooSectorProvider::with_rate_limit(Duration::from_millis(100)).unwrap();
        let outcome = provider.lookup("AAPL").await;
        assert_eq!(outcome, SectorLookup::Found(Sector::Technology));
    }

    #[tokio::test]
    #[ignore = "hits the live Yahoo Finance API"]
    async fn test_lookup_unknown_ticker_does_not_panic() {
        let provider = YahooSectorProvider::with_rate_limit(Duration::from_millis(100)).unwrap();
        let outcome = provider.lookup("NOTAREALTICKER123").await;
        assert!(!outcome.is_found());
    }
}
