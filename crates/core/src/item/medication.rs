//! Medication payload (ANVISA vertical).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calc::round2;
use crate::error::CoreError;

/// ANVISA stripe classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tarja {
    /// Over the counter.
    Livre,
    /// Prescription retained at the pharmacy.
    Amarela,
    /// Standard prescription.
    Vermelha,
    /// Controlled substances.
    Preta,
}

impl Tarja {
    pub const ALL_VARIANTS_STR: &'static str = "livre|amarela|vermelha|preta";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Livre => "livre",
            Self::Amarela => "amarela",
            Self::Vermelha => "vermelha",
            Self::Preta => "preta",
        }
    }

    /// Semantic accent for the item page: red for prescription stripes,
    /// green for OTC, amber otherwise.
    #[must_use]
    pub const fn accent_color(&self) -> &'static str {
        match *self {
            Self::Vermelha => "#ef4444",
            Self::Livre => "#10b981",
            Self::Amarela | Self::Preta => "#f59e0b",
        }
    }
}

impl fmt::Display for Tarja {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tarja {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "livre" => Ok(Self::Livre),
            "amarela" => Ok(Self::Amarela),
            "vermelha" => Ok(Self::Vermelha),
            "preta" => Ok(Self::Preta),
            other => Err(CoreError::UnknownTarja(other.to_owned())),
        }
    }
}

/// Reference-vs-generic price bundle. The savings fields are derived;
/// construct through [`Self::from_reference_and_generic`] so they stay
/// consistent whenever either source price changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationPrices {
    pub reference: f64,
    pub generic_avg: f64,
    pub savings: f64,
    pub savings_percentage: i64,
}

impl MedicationPrices {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, reason = "percentages are far below i64::MAX")]
    pub fn from_reference_and_generic(reference: f64, generic_avg: f64) -> Self {
        let savings = round2(reference - generic_avg);
        let savings_percentage =
            if reference > 0.0 { (savings / reference * 100.0).round() as i64 } else { 0 };
        Self { reference, generic_avg, savings, savings_percentage }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationData {
    pub active_ingredient: String,
    pub manufacturer: String,
    /// ANVISA registration code.
    pub registration_code: String,
    pub therapeutic_class: String,
    /// Dosage/presentation string, e.g. `"500 MG COMP CX 4 BL X 5"`.
    pub presentation: String,
    pub tarja: Tarja,
    pub prices: MedicationPrices,
}
