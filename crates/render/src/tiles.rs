//! Tile shapes and their builders.
//!
//! Each builder is pure: it reads one slice of the item's payload and
//! returns `None` when that slice does not apply to the item's variant.

use chrono::{DateTime, Utc};
use serde::Serialize;

use portal_core::{
    ItemPayload, Macros, MedicationPrices, Micronutrient, PortalItem, PricePoint, Tarja, Trend,
};

/// One self-contained presentational unit bound to a slice of an item's
/// payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "tile", rename_all = "snake_case")]
pub enum TileSpec {
    /// Always present: identity, provenance, insights.
    Header {
        title: String,
        description: String,
        badge: String,
        updated_at: DateTime<Utc>,
        accent_color: String,
        summary: String,
        highlights: Vec<String>,
    },
    /// Current price with the history sparkline.
    Price { current_price: f64, price_history: Vec<PricePoint> },
    /// Market trend badge.
    Depreciation { trend: Trend, percentage: f64 },
    /// Estimated annual vehicle tax.
    Ipva { ipva_estimated: f64 },
    /// Macronutrients for one serving.
    Nutrition { serving_size: String, macros: Macros },
    /// Micronutrients against daily reference values.
    Micronutrients { micros: Vec<Micronutrient> },
    /// Reference-vs-generic price comparison.
    PriceComparison { prices: MedicationPrices },
    /// Active ingredient with class and stripe.
    ActiveIngredient { active_ingredient: String, therapeutic_class: String, tarja: Tarja },
    /// Generic key/value table of scalar payload fields no tile consumed.
    Fallback { entries: Vec<FallbackEntry> },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FallbackEntry {
    pub key: String,
    pub value: String,
}

pub(crate) fn header_tile(item: &PortalItem) -> TileSpec {
    TileSpec::Header {
        title: item.title.clone(),
        description: item.description.clone(),
        badge: item.source.clone(),
        updated_at: item.updated_at,
        accent_color: item.accent_color.clone(),
        summary: item.summary.clone(),
        highlights: item.highlights.clone(),
    }
}

pub(crate) fn price_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Vehicle(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::Price {
        current_price: data.current_price,
        price_history: data.price_history.clone(),
    })
}

pub(crate) fn depreciation_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Vehicle(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::Depreciation {
        trend: data.depreciation.trend,
        percentage: data.depreciation.percentage,
    })
}

pub(crate) fn ipva_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Vehicle(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::Ipva { ipva_estimated: data.ipva_estimated })
}

pub(crate) fn nutrition_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Food(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::Nutrition {
        serving_size: data.serving_size.clone(),
        macros: data.macros.clone(),
    })
}

pub(crate) fn micronutrient_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Food(data) = &item.payload else {
        return None;
    };
    // An empty micronutrient list renders nothing rather than an empty radar
    if data.micros.is_empty() {
        return None;
    }
    Some(TileSpec::Micronutrients { micros: data.micros.clone() })
}

pub(crate) fn price_comparison_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Medication(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::PriceComparison { prices: data.prices.clone() })
}

pub(crate) fn active_ingredient_tile(item: &PortalItem) -> Option<TileSpec> {
    let ItemPayload::Medication(data) = &item.payload else {
        return None;
    };
    Some(TileSpec::ActiveIngredient {
        active_ingredient: data.active_ingredient.clone(),
        therapeutic_class: data.therapeutic_class.clone(),
        tarja: data.tarja,
    })
}
