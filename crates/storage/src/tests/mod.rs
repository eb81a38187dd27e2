#![expect(clippy::unwrap_used, reason = "test code")]

mod favorites_tests;
mod search_tests;

use chrono::Utc;
use tempfile::TempDir;

use portal_core::{
    Capability, Depreciation, ItemPayload, MedicationData, MedicationPrices, PortalItem,
    PricePoint, Tarja, VehicleData, Vertical,
};

use crate::Storage;

pub(crate) fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("portal.db")).unwrap();
    (storage, temp_dir)
}

pub(crate) fn create_test_vertical(slug: &str) -> Vertical {
    Vertical::new(
        slug,
        &format!("Vertical {slug}"),
        "test vertical",
        vec![Capability::PriceChart, Capability::DepreciationBadge],
    )
}

pub(crate) fn create_vehicle_item(slug: &str, title: &str, price: f64) -> PortalItem {
    PortalItem {
        id: format!("item-{slug}"),
        slug: slug.to_owned(),
        title: title.to_owned(),
        description: format!("Preço Tabela FIPE - {title}"),
        source: "Tabela FIPE".to_owned(),
        updated_at: Utc::now(),
        accent_color: "#3b82f6".to_owned(),
        summary: format!("{title} segundo a Tabela FIPE."),
        highlights: vec!["Código FIPE: 000000-0".to_owned()],
        affiliate: None,
        payload: ItemPayload::Vehicle(VehicleData {
            current_price: price,
            price_history: vec![PricePoint { month: "Jan/26".to_owned(), value: price }],
            ipva_estimated: (price * 0.04).round(),
            depreciation: Depreciation::from_percentage(-0.99),
        }),
    }
}

pub(crate) fn create_medication_item(slug: &str, title: &str) -> PortalItem {
    PortalItem {
        id: format!("item-{slug}"),
        slug: slug.to_owned(),
        title: title.to_owned(),
        description: format!("{title} - Registro: 1023500290021"),
        source: "ANVISA - Agência Nacional de Vigilância Sanitária".to_owned(),
        updated_at: Utc::now(),
        accent_color: "#10b981".to_owned(),
        summary: format!("Economize optando pelo genérico de {title}."),
        highlights: vec![],
        affiliate: None,
        payload: ItemPayload::Medication(MedicationData {
            active_ingredient: "DIPIRONA MONOIDRATADA".to_owned(),
            manufacturer: "EMS S/A".to_owned(),
            registration_code: "1023500290021".to_owned(),
            therapeutic_class: "Analgésico e Antipirético".to_owned(),
            presentation: "500 MG COMP CX 4 BL X 5".to_owned(),
            tarja: Tarja::Livre,
            prices: MedicationPrices::from_reference_and_generic(20.50, 12.99),
        }),
    }
}
