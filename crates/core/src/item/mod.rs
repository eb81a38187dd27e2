//! The portal item model.
//!
//! Every normalized record, whatever its vertical, shares one envelope
//! (identity, titles, provenance, insights) and carries exactly one
//! variant payload selected by the `type` tag.

mod food;
mod kind;
mod medication;
mod vehicle;

pub use food::*;
pub use kind::*;
pub use medication::*;
pub use vehicle::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vertical-specific payload. The `type` tag fully determines which shape is
/// present; the enum makes mixing fields from two variants unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ItemPayload {
    #[serde(rename = "fipe")]
    Vehicle(VehicleData),
    #[serde(rename = "taco")]
    Food(FoodData),
    #[serde(rename = "medicamentos")]
    Medication(MedicationData),
}

impl ItemPayload {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match *self {
            Self::Vehicle(_) => ItemKind::Vehicle,
            Self::Food(_) => ItemKind::Food,
            Self::Medication(_) => ItemKind::Medication,
        }
    }
}

/// Contextual affiliate pointer rendered below the tiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateOffer {
    pub category: String,
    /// Call-to-action text.
    pub cta: String,
    pub url: String,
}

/// One normalized content record belonging to exactly one vertical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalItem {
    /// Stable identifier, derived from the slug so re-normalization lands on
    /// the same id.
    pub id: String,
    /// URL-safe slug, unique within the item's vertical.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Source label, e.g. `"Tabela FIPE"`.
    pub source: String,
    pub updated_at: DateTime<Utc>,
    /// Semantic accent color for the item page.
    pub accent_color: String,
    /// One-paragraph utility summary.
    pub summary: String,
    /// Ordered key decision points.
    pub highlights: Vec<String>,
    pub affiliate: Option<AffiliateOffer>,
    pub payload: ItemPayload,
}

impl PortalItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        self.payload.kind()
    }

    /// The shape stored in the `data` JSON column: envelope extras plus the
    /// tagged payload, flattened.
    #[must_use]
    pub fn to_data(&self) -> ItemData {
        ItemData {
            source: self.source.clone(),
            accent_color: self.accent_color.clone(),
            summary: self.summary.clone(),
            highlights: self.highlights.clone(),
            affiliate: self.affiliate.clone(),
            payload: self.payload.clone(),
        }
    }

    /// Reassemble an item from its relational columns and `data` JSON.
    #[must_use]
    pub fn from_parts(
        id: String,
        slug: String,
        title: String,
        description: String,
        updated_at: DateTime<Utc>,
        data: ItemData,
    ) -> Self {
        Self {
            id,
            slug,
            title,
            description,
            source: data.source,
            updated_at,
            accent_color: data.accent_color,
            summary: data.summary,
            highlights: data.highlights,
            affiliate: data.affiliate,
            payload: data.payload,
        }
    }
}

/// JSON shape of the `portal_items.data` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemData {
    pub source: String,
    pub accent_color: String,
    pub summary: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<AffiliateOffer>,
    #[serde(flatten)]
    pub payload: ItemPayload,
}

/// Listing order for repository reads. Listing pages use the title order;
/// "what changed" surfaces use recency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    #[default]
    Title,
    RecentlyUpdated,
}

/// Lightweight search index entry: enough to render a result row and link
/// to the item page, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub vertical_slug: String,
    pub vertical_name: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Relevance score, higher is better.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;

    fn vehicle_payload() -> ItemPayload {
        ItemPayload::Vehicle(VehicleData {
            current_price: 78_500.0,
            price_history: vec![PricePoint { month: "Jan/26".to_owned(), value: 78_500.0 }],
            ipva_estimated: 3140.0,
            depreciation: Depreciation::from_percentage(-0.99),
        })
    }

    #[test]
    fn payload_serializes_with_type_tag() {
        let json = serde_json::to_value(vehicle_payload()).unwrap();
        assert_eq!(json["type"], "fipe");
        assert!(json.get("current_price").is_some());
        // No cross-variant leakage: food/medication fields are absent
        assert!(json.get("macros").is_none());
        assert!(json.get("prices").is_none());
    }

    #[test]
    fn payload_kind_matches_tag() {
        let payload = vehicle_payload();
        assert_eq!(payload.kind(), ItemKind::Vehicle);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], payload.kind().as_str());
    }

    #[test]
    fn item_data_round_trips_through_json() {
        let data = ItemData {
            source: "Tabela FIPE".to_owned(),
            accent_color: "#3b82f6".to_owned(),
            summary: "Preço estável nos últimos meses.".to_owned(),
            highlights: vec!["IPVA estimado: R$ 3.140".to_owned()],
            affiliate: None,
            payload: vehicle_payload(),
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: ItemData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn unknown_type_tag_fails_deserialization() {
        let json = r#"{"type":"imoveis","current_price":1.0}"#;
        assert!(serde_json::from_str::<ItemPayload>(json).is_err());
    }
}
