//! Tile selection for item pages.
//!
//! A vertical's capability list says which tiles its items may mount; the
//! item's payload says which of those actually have data. Both gates are
//! absence, not error: a declared capability whose payload slice is missing
//! simply yields no tile.
//!
//! The mapping is a static rule table of pure builder functions. Adding a
//! tile means one [`Capability`] variant, one [`TileSpec`] variant, and one
//! row here, all checked exhaustively at compile time.

mod fallback;
mod tiles;

pub use tiles::TileSpec;

use std::collections::HashSet;

use portal_core::{Capability, PortalItem};

use fallback::fallback_tile;
use tiles::{
    active_ingredient_tile, depreciation_tile, header_tile, ipva_tile, micronutrient_tile,
    nutrition_tile, price_comparison_tile, price_tile,
};

type TileBuilder = fn(&PortalItem) -> Option<TileSpec>;

struct TileRule {
    capability: Capability,
    /// Top-level payload keys this tile consumes.
    claims: &'static [&'static str],
    build: TileBuilder,
}

static RULES: &[TileRule] = &[
    TileRule {
        capability: Capability::PriceChart,
        claims: &["current_price", "price_history"],
        build: price_tile,
    },
    TileRule {
        capability: Capability::DepreciationBadge,
        claims: &["depreciation"],
        build: depreciation_tile,
    },
    TileRule {
        capability: Capability::IpvaEstimate,
        claims: &["ipva_estimated"],
        build: ipva_tile,
    },
    TileRule {
        capability: Capability::NutritionFacts,
        claims: &["serving_size", "macros"],
        build: nutrition_tile,
    },
    TileRule {
        capability: Capability::ComparisonRadar,
        claims: &["micros"],
        build: micronutrient_tile,
    },
    TileRule {
        capability: Capability::PriceComparison,
        claims: &["prices"],
        build: price_comparison_tile,
    },
    TileRule {
        capability: Capability::ActiveIngredientBadge,
        claims: &["active_ingredient", "therapeutic_class", "tarja"],
        build: active_ingredient_tile,
    },
];

/// Select the ordered tiles for one item under a vertical's capabilities.
///
/// The header tile always leads. Capabilities mount in declaration order;
/// a capability whose claims overlap an earlier tile is skipped (first
/// declared wins). Unclaimed scalar payload fields land in a trailing
/// fallback tile.
#[must_use]
pub fn select_tiles(item: &PortalItem, capabilities: &[Capability]) -> Vec<TileSpec> {
    let mut tiles = vec![header_tile(item)];
    let mut claimed: HashSet<&'static str> = HashSet::new();

    for capability in capabilities {
        let Some(rule) = RULES.iter().find(|r| r.capability == *capability) else {
            continue;
        };
        if rule.claims.iter().any(|key| claimed.contains(key)) {
            continue;
        }
        if let Some(tile) = (rule.build)(item) {
            claimed.extend(rule.claims);
            tiles.push(tile);
        }
    }

    if let Some(tile) = fallback_tile(item, &claimed) {
        tiles.push(tile);
    }
    tiles
}

#[cfg(test)]
mod tests;
