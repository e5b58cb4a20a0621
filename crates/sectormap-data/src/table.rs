//! CSV reader/writer for the two-column ticker→sector mapping table.
//!
//! The on-disk format is a plain CSV with header `ticker,sector`. A
//! skeleton table has every sector cell empty; the enrichment pass rewrites
//! the same shape with sectors filled in where a lookup succeeded.

use crate::error::{DataError, Result};
use sectormap::MappingRow;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Serialize mapping rows as CSV into any writer.
pub fn write_mapping_to<W: Write>(writer: W, rows: &[MappingRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    // serialize() of the first row emits the ticker,sector header; an empty
    // table must still get one.
    if rows.is_empty() {
        wtr.write_record(["ticker", "sector"])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(DataError::Io)?;
    Ok(())
}

/// Write a mapping table to a file, replacing any existing content.
pub fn write_mapping(path: impl AsRef<Path>, rows: &[MappingRow]) -> Result<()> {
    let file = File::create(path)?;
    write_mapping_to(file, rows)
}

/// Write a skeleton table: one row per ticker, sector column empty.
pub fn write_skeleton<I, S>(path: impl AsRef<Path>, tickers: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    write_mapping(path, &MappingRow::skeleton(tickers))
}

/// Deserialize mapping rows from any CSV source.
pub fn read_mapping_from<R: Read>(reader: R) -> Result<Vec<MappingRow>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?;
    if !headers.iter().any(|h| h == "ticker") {
        return Err(DataError::MissingColumn("ticker".to_string()));
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Read a mapping table from a file.
pub fn read_mapping(path: impl AsRef<Path>) -> Result<Vec<MappingRow>> {
    let file = File::open(path)?;
    read_mapping_from(file)
}
