//! Lazy decoding of JSON-lines datasets.
//!
//! Each line of the input is an independent JSON document decoded into a
//! [`Record`]. Records are handed to the caller one at a time, so a dataset
//! is never held in memory beyond the rows the caller keeps.

use crate::error::{DataError, Result};
use sectormap::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Iterator over the records of a line-oriented dataset.
///
/// Blank lines are skipped. An unparseable line yields a
/// [`DataError::Parse`] carrying its 1-based line number; iteration can
/// continue past it.
#[derive(Debug)]
pub struct RecordReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a reader over any buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl RecordReader<BufReader<File>> {
    /// Open a dataset file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(DataError::Io(e))),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|source| DataError::Parse {
                line: self.line_no,
                source,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectormap::{collect_tickers, try_collect_tickers};
    use std::io::Cursor;

    #[test]
    fn test_reads_records_lazily() {
        let input = "{\"tickers\": [\"aapl\"]}\n{\"tickers\": [\"MSFT\", \"msft\"]}\n{}\n";
        let records: Result<Vec<_>> = RecordReader::new(Cursor::new(input)).collect();

        let records = records.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(collect_tickers(records), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n{\"tickers\": [\"ibm\"]}\n\n  \n{\"tickers\": [\"ge\"]}\n";
        let records: Result<Vec<_>> = RecordReader::new(Cursor::new(input)).collect();

        assert_eq!(records.unwrap().len(), 2);
    }

    #[test]
    fn test_streaming_fold_without_materializing() {
        let input = "{\"tickers\": [\"aapl\"]}\n{\"tickers\": [\"msft\", \"AAPL\"]}\n";
        let tickers = try_collect_tickers(RecordReader::new(Cursor::new(input))).unwrap();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_streaming_fold_propagates_parse_error() {
        let input = "{\"tickers\": [\"aapl\"]}\nnot json\n{\"tickers\": [\"msft\"]}\n";
        let err = try_collect_tickers(RecordReader::new(Cursor::new(input))).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let input = "{\"tickers\": [\"aapl\"]}\nnot json\n";
        let mut reader = RecordReader::new(Cursor::new(input));

        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_record_without_tickers_field_is_not_an_error() {
        let input = "{\"text\": \"filing body with no tickers\"}\n";
        let records: Result<Vec<_>> = RecordReader::new(Cursor::new(input)).collect();

        let records = records.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].tickers.is_none());
    }

    #[test]
    fn test_empty_input() {
        let records: Result<Vec<_>> = RecordReader::new(Cursor::new("")).collect();
        assert!(records.unwrap().is_empty());
    }
}
