//! Ticker extraction and deduplication.
//!
//! A single pass over a sequence of records folds every raw ticker string
//! into a set of normalized symbols, which is then rendered in ascending
//! lexicographic order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One input record from a line-oriented dataset.
///
/// Only the `tickers` field is consumed; records without it contribute
/// zero tickers and are not treated as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    /// Raw ticker strings attached to the record, possibly mixed-case and
    /// with surrounding whitespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickers: Option<Vec<String>>,
}

impl Record {
    /// Create a record carrying the given raw ticker strings.
    pub fn with_tickers<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tickers: Some(tickers.into_iter().map(Into::into).collect()),
        }
    }
}

/// Normalize a raw ticker string: trim surrounding whitespace, uppercase
/// ASCII letters.
///
/// Identity of a ticker is its normalized form; two raw strings that
/// normalize equal are the same ticker. Normalization is case-only:
/// punctuation such as share-class separators is preserved, so `"BRK.A"`
/// and `"BRK-A"` remain distinct symbols. Non-ASCII bytes pass through
/// unchanged.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Collect the unique normalized tickers from a sequence of records.
///
/// Returns the deduplicated tickers in ascending lexicographic order.
/// Records missing the `tickers` field are tolerated silently; no ticker
/// format validation is applied.
pub fn collect_tickers<I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = Record>,
{
    let mut unique = BTreeSet::new();

    for record in records {
        for raw in record.tickers.into_iter().flatten() {
            unique.insert(normalize_ticker(&raw));
        }
    }

    unique.into_iter().collect()
}

/// Collect unique normalized tickers from a fallible record sequence.
///
/// Folds a lazy decoder's records directly, without materializing them
/// first; the first error ends the pass and is returned as-is.
pub fn try_collect_tickers<I, E>(records: I) -> Result<Vec<String>, E>
where
    I: IntoIterator<Item = Result<Record, E>>,
{
    let mut unique = BTreeSet::new();

    for record in records {
        for raw in record?.tickers.into_iter().flatten() {
            unique.insert(normalize_ticker(&raw));
        }
    }

    Ok(unique.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("aapl", "AAPL")]
    #[case(" AAPL ", "AAPL")]
    #[case("brk.a", "BRK.A")]
    #[case("\tmsft\n", "MSFT")]
    #[case("", "")]
    fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_ticker(raw), expected);
    }

    #[rstest]
    #[case("aapl")]
    #[case(" AAPL ")]
    #[case("BRK.A")]
    fn test_normalize_idempotent(#[case] raw: &str) {
        let once = normalize_ticker(raw);
        assert_eq!(normalize_ticker(&once), once);
    }

    #[test]
    fn test_collect_dedupes_and_sorts() {
        let records = vec![
            Record::with_tickers(["aapl", " AAPL "]),
            Record::with_tickers(["MSFT"]),
            Record::default(),
        ];

        assert_eq!(collect_tickers(records), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_normalize_uppercases_ascii_only() {
        assert_eq!(normalize_ticker("brk.a"), "BRK.A");
        // Non-ASCII bytes pass through unchanged.
        assert_eq!(normalize_ticker("sø"), "Sø");
    }

    #[test]
    fn test_try_collect_matches_infallible_collect() {
        let records = vec![
            Record::with_tickers(["aapl", " AAPL "]),
            Record::with_tickers(["MSFT"]),
            Record::default(),
        ];

        let fallible: Vec<Result<Record, String>> = records.iter().cloned().map(Ok).collect();
        assert_eq!(
            try_collect_tickers(fallible).unwrap(),
            collect_tickers(records)
        );
    }

    #[test]
    fn test_try_collect_propagates_first_error() {
        let records: Vec<Result<Record, String>> = vec![
            Ok(Record::with_tickers(["aapl"])),
            Err("bad line".to_string()),
            Ok(Record::with_tickers(["msft"])),
        ];

        assert_eq!(try_collect_tickers(records), Err("bad line".to_string()));
    }

    #[test]
    fn test_collect_empty_input() {
        assert!(collect_tickers(Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_field_contributes_nothing() {
        let records = vec![Record::default(), Record::default()];
        assert!(collect_tickers(records).is_empty());
    }

    #[test]
    fn test_share_class_punctuation_is_preserved() {
        // Case-only normalization: dots and dashes are distinct symbols.
        let records = vec![Record::with_tickers(["brk.a", "BRK.A", "BRK-A"])];
        assert_eq!(collect_tickers(records), vec!["BRK-A", "BRK.A"]);
    }

    #[test]
    fn test_sorted_ascending() {
        let records = vec![Record::with_tickers(["zm", "nvda", "amd", "f"])];
        let tickers = collect_tickers(records);

        let mut sorted = tickers.clone();
        sorted.sort();
        assert_eq!(tickers, sorted);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: Record =
            serde_json::from_str(r#"{"text": "10-K filing body", "tickers": ["ibm"]}"#).unwrap();
        assert_eq!(record.tickers, Some(vec!["ibm".to_string()]));

        let bare: Record = serde_json::from_str(r#"{"text": "no tickers here"}"#).unwrap();
        assert!(bare.tickers.is_none());
    }
}
