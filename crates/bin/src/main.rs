//! sectormap CLI binary.
//!
//! Data-preparation commands for building a ticker→sector mapping:
//! print the sector table, extract unique tickers from a JSON-lines
//! dataset, and fill in sectors from Yahoo Finance.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use sectormap::{MappingRow, Sector, try_collect_tickers};
use sectormap_data::{
    RecordReader, SectorLookup, YahooSectorProvider, read_mapping, write_mapping, write_skeleton,
};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "sectormap")]
#[command(about = "Build a ticker-to-sector mapping for financial records", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fixed table of 11 sectors
    Sectors,

    /// Extract unique tickers from a JSON-lines dataset into a CSV skeleton
    Extract {
        /// Input dataset, one JSON record per line
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path (header: ticker,sector; sector column empty)
        #[arg(long)]
        output: PathBuf,
    },

    /// Fill the sector column of a mapping table from Yahoo Finance
    Fill {
        /// Input mapping table (skeleton or partially filled)
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path for the filled table
        #[arg(long)]
        output: PathBuf,

        /// Delay between lookups in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sectors => list_sectors(),
        Commands::Extract { input, output } => extract(&input, &output)?,
        Commands::Fill {
            input,
            output,
            delay_ms,
        } => fill(&input, &output, delay_ms).await?,
    }

    Ok(())
}

fn list_sectors() {
    println!("Sectors:");
    for sector in Sector::all() {
        println!("  {:2}: {}", sector.index(), sector.name());
    }
}

fn extract(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // One streaming pass: the reader hands records to the fold lazily.
    let records = RecordReader::open(input)?;
    let tickers = try_collect_tickers(records)?;
    let count = tickers.len();

    write_skeleton(output, tickers)?;
    println!("Wrote {} unique tickers to {}", count, output.display());

    Ok(())
}

async fn fill(
    input: &Path,
    output: &Path,
    delay_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = read_mapping(input)?;
    let provider = YahooSectorProvider::with_rate_limit(Duration::from_millis(delay_ms))?;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Looking up sectors...");

    let mut filled = Vec::with_capacity(rows.len());
    let mut found = 0usize;
    let mut not_found = 0usize;
    let mut failed = 0usize;

    for row in rows {
        let outcome = provider.lookup(&row.ticker).await;

        match &outcome {
            SectorLookup::Found(sector) => {
                found += 1;
                pb.println(format!("{} → {}", row.ticker, sector));
            }
            SectorLookup::NotFound => {
                not_found += 1;
                pb.println(format!("{} → (no sector assigned)", row.ticker));
            }
            SectorLookup::Failed(reason) => {
                failed += 1;
                pb.println(format!("{} → lookup failed: {}", row.ticker, reason));
            }
        }

        filled.push(MappingRow::new(row.ticker, outcome.csv_value().to_string()));
        pb.inc(1);
    }

    pb.finish_with_message(format!("{} tickers processed", filled.len()));

    write_mapping(output, &filled)?;
    println!(
        "Saved sectors to {} ({} found, {} without sector, {} failed)",
        output.display(),
        found,
        not_found,
        failed
    );

    Ok(())
}
