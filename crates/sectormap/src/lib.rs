#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sectormap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod collect;
pub mod mapping;
pub mod sector;

pub use collect::{Record, collect_tickers, normalize_ticker, try_collect_tickers};
pub use mapping::MappingRow;
pub use sector::Sector;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
