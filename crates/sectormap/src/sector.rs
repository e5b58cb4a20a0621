//! The fixed table of 11 GICS-style sectors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 11 sectors a ticker can be classified into.
///
/// The list and its order are fixed for the lifetime of the process; the
/// index of each variant is its position in that canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Technology
    Technology,

    /// Energy
    Energy,

    /// Financials
    Financials,

    /// Consumer Discretionary
    ConsumerDiscretionary,

    /// Consumer Staples
    ConsumerStaples,

    /// Health Care
    HealthCare,

    /// Industrials
    Industrials,

    /// Materials
    Materials,

    /// Real Estate
    RealEstate,

    /// Utilities
    Utilities,

    /// Communication Services
    CommunicationServices,
}

impl Sector {
    /// Returns all sectors in canonical order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Technology,
            Self::Energy,
            Self::Financials,
            Self::ConsumerDiscretionary,
            Self::ConsumerStaples,
            Self::HealthCare,
            Self::Industrials,
            Self::Materials,
            Self::RealEstate,
            Self::Utilities,
            Self::CommunicationServices,
        ]
    }

    /// Returns the position of this sector in the canonical order (0..=10).
    pub const fn index(&self) -> usize {
        match self {
            Self::Technology => 0,
            Self::Energy => 1,
            Self::Financials => 2,
            Self::ConsumerDiscretionary => 3,
            Self::ConsumerStaples => 4,
            Self::HealthCare => 5,
            Self::Industrials => 6,
            Self::Materials => 7,
            Self::RealEstate => 8,
            Self::Utilities => 9,
            Self::CommunicationServices => 10,
        }
    }

    /// Returns the full sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Energy => "Energy",
            Self::Financials => "Financials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::HealthCare => "Health Care",
            Self::Industrials => "Industrials",
            Self::Materials => "Materials",
            Self::RealEstate => "Real Estate",
            Self::Utilities => "Utilities",
            Self::CommunicationServices => "Communication Services",
        }
    }

    /// Parse a sector from its canonical index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Technology),
            1 => Some(Self::Energy),
            2 => Some(Self::Financials),
            3 => Some(Self::ConsumerDiscretionary),
            4 => Some(Self::ConsumerStaples),
            5 => Some(Self::HealthCare),
            6 => Some(Self::Industrials),
            7 => Some(Self::Materials),
            8 => Some(Self::RealEstate),
            9 => Some(Self::Utilities),
            10 => Some(Self::CommunicationServices),
            _ => None,
        }
    }

    /// Parse a sector from its name, case-insensitively.
    ///
    /// Accepts the canonical names plus the aliases Yahoo Finance asset
    /// profiles use for the same classifications ("Financial Services",
    /// "Healthcare", "Consumer Cyclical", "Consumer Defensive",
    /// "Basic Materials").
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();

        let sector = match normalized.as_str() {
            "technology" | "information technology" => Self::Technology,
            "energy" => Self::Energy,
            "financials" | "financial services" => Self::Financials,
            "consumer discretionary" | "consumer cyclical" => Self::ConsumerDiscretionary,
            "consumer staples" | "consumer defensive" => Self::ConsumerStaples,
            "health care" | "healthcare" => Self::HealthCare,
            "industrials" => Self::Industrials,
            "materials" | "basic materials" => Self::Materials,
            "real estate" => Self::RealEstate,
            "utilities" => Self::Utilities,
            "communication services" => Self::CommunicationServices,
            _ => return None,
        };

        Some(sector)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
