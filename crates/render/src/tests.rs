#![expect(clippy::unwrap_used, reason = "test code")]

use chrono::Utc;

use portal_core::{
    Capability, Depreciation, FoodData, ItemPayload, Macros, MedicationData, MedicationPrices,
    Micronutrient, PortalItem, PricePoint, Tarja, VehicleData, daily_values,
};

use super::{RULES, TileSpec, select_tiles};

fn envelope(payload: ItemPayload) -> PortalItem {
    PortalItem {
        id: "item-1".to_owned(),
        slug: "item-1".to_owned(),
        title: "Item".to_owned(),
        description: "Description".to_owned(),
        source: "Fonte Oficial".to_owned(),
        updated_at: Utc::now(),
        accent_color: "#3b82f6".to_owned(),
        summary: "Resumo.".to_owned(),
        highlights: vec!["Destaque".to_owned()],
        affiliate: None,
        payload,
    }
}

fn vehicle_item() -> PortalItem {
    envelope(ItemPayload::Vehicle(VehicleData {
        current_price: 145_200.0,
        price_history: vec![PricePoint { month: "Jan/26".to_owned(), value: 145_200.0 }],
        ipva_estimated: 5808.0,
        depreciation: Depreciation::from_percentage(-0.99),
    }))
}

fn medication_item() -> PortalItem {
    envelope(ItemPayload::Medication(MedicationData {
        active_ingredient: "DIPIRONA MONOIDRATADA".to_owned(),
        manufacturer: "EMS S/A".to_owned(),
        registration_code: "1023500290021".to_owned(),
        therapeutic_class: "Analgésico e Antipirético".to_owned(),
        presentation: "500 MG COMP CX 4 BL X 5".to_owned(),
        tarja: Tarja::Livre,
        prices: MedicationPrices::from_reference_and_generic(20.50, 12.99),
    }))
}

fn food_item() -> PortalItem {
    envelope(ItemPayload::Food(FoodData {
        serving_size: "100g".to_owned(),
        macros: Macros { calories: 76.0, protein: 4.8, carbs: 13.6, fat: 0.5, fiber: 8.5 },
        micros: vec![Micronutrient::new("Ferro", 1.3, "mg", daily_values::IRON_MG)],
    }))
}

const FIPE_CAPS: &[Capability] =
    &[Capability::PriceChart, Capability::DepreciationBadge, Capability::IpvaEstimate];

#[test]
fn header_tile_always_leads() {
    for item in [vehicle_item(), medication_item(), food_item()] {
        let tiles = select_tiles(&item, &[]);
        assert!(matches!(tiles.first().unwrap(), TileSpec::Header { .. }));
    }
}

#[test]
fn vehicle_mounts_declared_tiles_in_order() {
    let tiles = select_tiles(&vehicle_item(), FIPE_CAPS);
    assert!(matches!(tiles.first().unwrap(), TileSpec::Header { .. }));
    assert!(matches!(tiles.get(1).unwrap(), TileSpec::Price { .. }));
    assert!(matches!(tiles.get(2).unwrap(), TileSpec::Depreciation { .. }));
    assert!(matches!(tiles.get(3).unwrap(), TileSpec::Ipva { .. }));
    // Every vehicle payload field is claimed, so no fallback appears
    assert_eq!(tiles.len(), 4);
}

#[test]
fn capability_without_payload_is_skipped_silently() {
    let tiles = select_tiles(
        &vehicle_item(),
        &[Capability::NutritionFacts, Capability::PriceComparison, Capability::PriceChart],
    );
    assert_eq!(tiles.len(), 3); // header + price + vehicle fallback leftovers
    assert!(matches!(tiles.get(1).unwrap(), TileSpec::Price { .. }));
    assert!(matches!(tiles.get(2).unwrap(), TileSpec::Fallback { .. }));
}

#[test]
fn duplicate_capability_mounts_once() {
    let tiles =
        select_tiles(&vehicle_item(), &[Capability::PriceChart, Capability::PriceChart]);
    let price_tiles =
        tiles.iter().filter(|t| matches!(t, TileSpec::Price { .. })).count();
    assert_eq!(price_tiles, 1);
}

#[test]
fn no_two_tiles_claim_the_same_payload_field() {
    // The static rule table itself must not double-claim
    for (i, a) in RULES.iter().enumerate() {
        for b in RULES.iter().skip(i + 1) {
            for key in a.claims {
                assert!(
                    !b.claims.contains(key),
                    "{} and {} both claim {key}",
                    a.capability,
                    b.capability
                );
            }
        }
    }
}

#[test]
fn fallback_lists_unclaimed_scalars_only() {
    let tiles = select_tiles(
        &medication_item(),
        &[Capability::PriceComparison, Capability::ActiveIngredientBadge],
    );
    let Some(TileSpec::Fallback { entries }) = tiles.last() else {
        panic!("expected trailing fallback tile");
    };
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["manufacturer", "presentation", "registration_code"]);
    // Claimed and nested fields never appear
    assert!(!keys.contains(&"prices"));
    assert!(!keys.contains(&"active_ingredient"));
    assert!(!keys.contains(&"type"));
}

#[test]
fn fallback_never_renders_nested_objects() {
    // With no capabilities, everything is unclaimed; nested structures
    // (prices object) must still be excluded
    let tiles = select_tiles(&medication_item(), &[]);
    let Some(TileSpec::Fallback { entries }) = tiles.last() else {
        panic!("expected trailing fallback tile");
    };
    assert!(entries.iter().all(|e| e.key != "prices"));
    assert!(entries.iter().any(|e| e.key == "active_ingredient"));
    // Scalar enum field renders as its wire token
    assert!(entries.iter().any(|e| e.key == "tarja" && e.value == "livre"));
}

#[test]
fn empty_micronutrient_list_mounts_no_radar() {
    let mut item = food_item();
    if let ItemPayload::Food(data) = &mut item.payload {
        data.micros.clear();
    }
    let tiles =
        select_tiles(&item, &[Capability::NutritionFacts, Capability::ComparisonRadar]);
    assert!(!tiles.iter().any(|t| matches!(t, TileSpec::Micronutrients { .. })));
}

#[test]
fn tiles_serialize_with_tile_tag() {
    let tiles = select_tiles(&food_item(), &[Capability::NutritionFacts]);
    let json = serde_json::to_value(&tiles).unwrap();
    assert_eq!(json[0]["tile"], "header");
    assert_eq!(json[1]["tile"], "nutrition");
}
