//! ANVISA medication pricing vertical.
//!
//! The upstream open-data CSV carries government column names
//! (`NO_RAZAO_SOCIAL`, `VL_PRECO_MAXIMO`, ...) and decimal-comma prices;
//! this module is the anti-corruption layer turning those rows into clean
//! portal items.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use portal_core::{
    AffiliateOffer, Capability, CoreError, ItemPayload, MedicationData, MedicationPrices,
    PortalItem, Tarja, Vertical, format_currency, parse_decimal, slugify,
};

use crate::item_id;

/// Raw ANVISA open-data row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationRecord {
    /// Laboratory legal name.
    #[serde(rename = "NO_RAZAO_SOCIAL")]
    pub razao_social: String,
    /// ANVISA registration number.
    #[serde(rename = "NU_REGISTRO")]
    pub registro: String,
    /// Commercial product name.
    #[serde(rename = "NO_PRODUTO")]
    pub produto: String,
    /// Active ingredient.
    #[serde(rename = "DS_SUBSTANCIA")]
    pub substancia: String,
    /// Dosage/presentation, e.g. `"500 MG COMP CX 4 BL X 5"`.
    #[serde(rename = "DS_APRESENTACAO")]
    pub apresentacao: String,
    #[serde(rename = "DS_CLASSE_TERAPEUTICA")]
    pub classe_terapeutica: String,
    /// `"1 - Medicamento Novo"`, `"5 - Genérico"`, ...
    #[serde(rename = "TP_PRODUTO")]
    pub tipo_produto: String,
    #[serde(rename = "TP_TARJA")]
    pub tarja: String,
    /// Maximum consumer price, decimal-comma text (`"20,50"`).
    #[serde(rename = "VL_PRECO_MAXIMO")]
    pub preco_maximo: String,
    /// Factory price, decimal-comma text (`"12,99"`).
    #[serde(rename = "VL_PRECO_FABRICA")]
    pub preco_fabrica: String,
}

/// The medication vertical declaration.
#[must_use]
pub fn medication_vertical() -> Vertical {
    Vertical::new(
        "medicamentos",
        "Medicamentos & Farmácia",
        "Comparação de preços entre medicamentos de referência e genéricos",
        vec![Capability::PriceComparison, Capability::ActiveIngredientBadge],
    )
}

/// Mock fetcher standing in for the ANVISA open-data CSV.
#[must_use]
pub fn fetch_medications() -> Vec<MedicationRecord> {
    tracing::info!("fetching ANVISA records (mock source)");
    vec![
        MedicationRecord {
            razao_social: "EMS S/A".to_owned(),
            registro: "1023500290021".to_owned(),
            produto: "DIPIRONA SÓDICA".to_owned(),
            substancia: "DIPIRONA MONOIDRATADA".to_owned(),
            apresentacao: "500 MG COMP CX 4 BL X 5".to_owned(),
            classe_terapeutica: "Analgésico e Antipirético".to_owned(),
            tipo_produto: "5 - Genérico".to_owned(),
            tarja: "livre".to_owned(),
            preco_maximo: "12,90".to_owned(),
            preco_fabrica: "8,50".to_owned(),
        },
        MedicationRecord {
            razao_social: "SANOFI MEDLEY".to_owned(),
            registro: "1130000580041".to_owned(),
            produto: "NOVALGINA".to_owned(),
            substancia: "DIPIRONA MONOIDRATADA".to_owned(),
            apresentacao: "1 G COMP EFERV CX 10".to_owned(),
            classe_terapeutica: "Analgésico e Antipirético".to_owned(),
            tipo_produto: "1 - Medicamento Novo".to_owned(),
            tarja: "livre".to_owned(),
            preco_maximo: "35,40".to_owned(),
            preco_fabrica: "22,10".to_owned(),
        },
        MedicationRecord {
            razao_social: "ACHÉ LABORATÓRIOS".to_owned(),
            registro: "1057303100015".to_owned(),
            produto: "TORSILAX".to_owned(),
            substancia: "CAFEÍNA;CARISOPRODOL;DICLOFENACO SÓDICO;PARACETAMOL".to_owned(),
            apresentacao: "COMP CX 3 BL X 10".to_owned(),
            classe_terapeutica: "Anti-inflamatório".to_owned(),
            tipo_produto: "4 - Similar".to_owned(),
            tarja: "vermelha".to_owned(),
            preco_maximo: "28,50".to_owned(),
            preco_fabrica: "18,90".to_owned(),
        },
    ]
}

/// Normalize a raw ANVISA row into a portal item.
///
/// Maps `VL_PRECO_MAXIMO` to the reference price and `VL_PRECO_FABRICA` to
/// the average generic price; savings fields are always recomputed. A
/// malformed price or unknown tarja fails this record only.
pub fn normalize_medication(raw: &MedicationRecord) -> Result<PortalItem, CoreError> {
    let reference = parse_decimal("VL_PRECO_MAXIMO", &raw.preco_maximo)?;
    let generic_avg = parse_decimal("VL_PRECO_FABRICA", &raw.preco_fabrica)?;
    let tarja: Tarja = raw.tarja.parse()?;
    let prices = MedicationPrices::from_reference_and_generic(reference, generic_avg);

    let is_generic = raw.tipo_produto.contains("Genérico");
    let title = if is_generic {
        format!("{} ({})", raw.substancia, raw.razao_social)
    } else {
        raw.produto.clone()
    };
    let first_dose = raw.apresentacao.split_whitespace().next().unwrap_or_default();
    let slug = slugify(&format!("{title} {first_dose}"));

    Ok(PortalItem {
        id: item_id("medicamentos", &slug),
        slug,
        title: title.clone(),
        description: format!("{} - Registro: {}", raw.apresentacao, raw.registro),
        source: "ANVISA - Agência Nacional de Vigilância Sanitária".to_owned(),
        updated_at: Utc::now(),
        accent_color: tarja.accent_color().to_owned(),
        summary: format!(
            "Economize {} optando pelo genérico de {}.",
            format_currency(prices.savings),
            raw.substancia
        ),
        highlights: vec![
            format!("Princípio Ativo: {}", raw.substancia),
            format!("Classe: {}", raw.classe_terapeutica),
            format!("Registro ANVISA: {}", raw.registro),
            format!("Economia média de {}%", prices.savings_percentage),
        ],
        affiliate: Some(AffiliateOffer {
            category: "medicamentos".to_owned(),
            cta: "Ver ofertas em farmácias".to_owned(),
            url: "https://exemplo.com/medicamentos".to_owned(),
        }),
        payload: ItemPayload::Medication(MedicationData {
            active_ingredient: raw.substancia.clone(),
            manufacturer: raw.razao_social.clone(),
            registration_code: raw.registro.clone(),
            therapeutic_class: raw.classe_terapeutica.clone(),
            presentation: raw.apresentacao.clone(),
            tarja,
            prices,
        }),
    })
}
