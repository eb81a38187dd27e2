//! Vertical capability tokens.
//!
//! A vertical declares which tiles its items may mount through an ordered
//! capability list (the `ui_config` column). Tokens form a closed set; adding
//! a tile means adding a variant here and a rule in the render crate, both
//! checked exhaustively at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Current price with the price-history sparkline.
    PriceChart,
    /// Market trend badge (up/down/stable with percentage).
    DepreciationBadge,
    /// Estimated annual vehicle tax.
    IpvaEstimate,
    /// Macronutrient facts for one serving.
    NutritionFacts,
    /// Micronutrient radar against daily reference values.
    ComparisonRadar,
    /// Reference-vs-generic price comparison with savings.
    PriceComparison,
    /// Active ingredient, therapeutic class, and tarja badge.
    ActiveIngredientBadge,
}

impl Capability {
    pub const ALL_VARIANTS_STR: &'static str = "price_chart|depreciation_badge|ipva_estimate|\
         nutrition_facts|comparison_radar|price_comparison|active_ingredient_badge";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::PriceChart => "price_chart",
            Self::DepreciationBadge => "depreciation_badge",
            Self::IpvaEstimate => "ipva_estimate",
            Self::NutritionFacts => "nutrition_facts",
            Self::ComparisonRadar => "comparison_radar",
            Self::PriceComparison => "price_comparison",
            Self::ActiveIngredientBadge => "active_ingredient_badge",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price_chart" => Ok(Self::PriceChart),
            "depreciation_badge" => Ok(Self::DepreciationBadge),
            "ipva_estimate" => Ok(Self::IpvaEstimate),
            "nutrition_facts" => Ok(Self::NutritionFacts),
            "comparison_radar" => Ok(Self::ComparisonRadar),
            "price_comparison" => Ok(Self::PriceComparison),
            "active_ingredient_badge" => Ok(Self::ActiveIngredientBadge),
            other => Err(CoreError::UnknownCapability(other.to_owned())),
        }
    }
}
