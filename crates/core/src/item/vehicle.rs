//! Vehicle payload (FIPE vertical).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calc::classify_trend;
use crate::error::CoreError;

/// Market trend classification derived from the price history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "stable" => Ok(Self::Stable),
            other => Err(CoreError::UnknownTrend(other.to_owned())),
        }
    }
}

/// One month on the price curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// Month label, e.g. `"Jan/26"`.
    pub month: String,
    pub value: f64,
}

/// Trend plus the signed percentage backing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Depreciation {
    pub trend: Trend,
    pub percentage: f64,
}

impl Depreciation {
    /// Build from a signed percentage, keeping trend and percentage
    /// consistent by construction.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        Self { trend: classify_trend(percentage), percentage }
    }

    /// Whether the stored trend matches the deadband rule for the stored
    /// percentage. Holds for anything built via [`Self::from_percentage`].
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.trend == classify_trend(self.percentage)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleData {
    pub current_price: f64,
    /// Ordered most-recent-first.
    pub price_history: Vec<PricePoint>,
    /// Estimated annual vehicle tax.
    pub ipva_estimated: f64,
    pub depreciation: Depreciation,
}
