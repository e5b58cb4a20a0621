#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sectormap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod jsonl;
pub mod table;
pub mod yahoo;

pub use error::{DataError, Result};
pub use jsonl::RecordReader;
pub use table::{read_mapping, write_mapping, write_skeleton};
pub use yahoo::{SectorLookup, YahooSectorProvider};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
