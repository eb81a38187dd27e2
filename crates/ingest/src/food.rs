//! TACO food nutrition vertical.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use portal_core::{
    Capability, CoreError, FoodData, ItemPayload, Macros, Micronutrient, PortalItem, Vertical,
    daily_values, slugify,
};

use crate::item_id;

/// Raw TACO table row. Nutrient values are per serving (`unidade`),
/// micronutrients in milligrams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    pub id: u32,
    pub descricao: String,
    pub categoria: String,
    pub calorias: f64,
    pub proteina: f64,
    pub carboidrato: f64,
    pub lipideos: f64,
    pub fibra: f64,
    pub unidade: String,
    pub calcio_mg: f64,
    pub magnesio_mg: f64,
    pub ferro_mg: f64,
    pub sodio_mg: f64,
    pub potassio_mg: f64,
    pub zinco_mg: f64,
    pub vitamina_c_mg: f64,
}

/// The TACO vertical declaration.
#[must_use]
pub fn food_vertical() -> Vertical {
    Vertical::new(
        "nutricao",
        "Tabela TACO",
        "Dados nutricionais da Tabela Brasileira de Composição de Alimentos",
        vec![Capability::NutritionFacts, Capability::ComparisonRadar],
    )
}

/// Mock fetcher standing in for the TACO spreadsheet.
#[must_use]
pub fn fetch_foods() -> Vec<FoodRecord> {
    tracing::info!("fetching TACO records (mock source)");
    vec![
        FoodRecord {
            id: 1,
            descricao: "Arroz, integral, cozido".to_owned(),
            categoria: "Cereais e derivados".to_owned(),
            calorias: 112.0,
            proteina: 2.6,
            carboidrato: 25.8,
            lipideos: 1.0,
            fibra: 2.7,
            unidade: "100g".to_owned(),
            calcio_mg: 5.0,
            magnesio_mg: 59.0,
            ferro_mg: 0.3,
            sodio_mg: 1.0,
            potassio_mg: 75.0,
            zinco_mg: 0.7,
            vitamina_c_mg: 0.0,
        },
        FoodRecord {
            id: 2,
            descricao: "Feijão, carioca, cozido".to_owned(),
            categoria: "Leguminosas e derivados".to_owned(),
            calorias: 76.0,
            proteina: 4.8,
            carboidrato: 13.6,
            lipideos: 0.5,
            fibra: 8.5,
            unidade: "100g".to_owned(),
            calcio_mg: 27.0,
            magnesio_mg: 42.0,
            ferro_mg: 1.3,
            sodio_mg: 2.0,
            potassio_mg: 255.0,
            zinco_mg: 0.7,
            vitamina_c_mg: 0.0,
        },
        FoodRecord {
            id: 3,
            descricao: "Frango, peito, sem pele, grelhado".to_owned(),
            categoria: "Carnes e derivados".to_owned(),
            calorias: 163.0,
            proteina: 31.5,
            carboidrato: 0.0,
            lipideos: 3.2,
            fibra: 0.0,
            unidade: "100g".to_owned(),
            calcio_mg: 4.0,
            magnesio_mg: 28.0,
            ferro_mg: 0.3,
            sodio_mg: 50.0,
            potassio_mg: 310.0,
            zinco_mg: 0.9,
            vitamina_c_mg: 0.0,
        },
        FoodRecord {
            id: 4,
            descricao: "Ovo, de galinha, inteiro, cozido".to_owned(),
            categoria: "Ovos e derivados".to_owned(),
            calorias: 146.0,
            proteina: 13.3,
            carboidrato: 0.6,
            lipideos: 9.5,
            fibra: 0.0,
            unidade: "100g".to_owned(),
            calcio_mg: 49.0,
            magnesio_mg: 11.0,
            ferro_mg: 1.5,
            sodio_mg: 146.0,
            potassio_mg: 139.0,
            zinco_mg: 1.1,
            vitamina_c_mg: 0.0,
        },
    ]
}

/// Accent selection by dominant macro.
fn accent_color(protein: f64, carbs: f64, fat: f64) -> &'static str {
    if protein > 15.0 {
        "#10b981"
    } else if carbs > 30.0 {
        "#f59e0b"
    } else if fat > 10.0 {
        "#ef4444"
    } else {
        "#3b82f6"
    }
}

fn insight_highlights(raw: &FoodRecord) -> Vec<String> {
    let mut highlights = Vec::new();
    if raw.proteina > 20.0 {
        highlights.push("Excelente fonte de proteínas".to_owned());
    } else if raw.proteina > 10.0 {
        highlights.push("Boa fonte de proteínas".to_owned());
    }
    if raw.carboidrato < 5.0 {
        highlights.push("Baixo em carboidratos (Low Carb)".to_owned());
    } else if raw.carboidrato > 30.0 {
        highlights.push("Alto em carboidratos (energia rápida)".to_owned());
    }
    if raw.fibra > 5.0 {
        highlights.push("Rico em fibras".to_owned());
    }
    if raw.potassio_mg > 400.0 {
        highlights.push("Excelente fonte de potássio".to_owned());
    }
    highlights.push(format!("Categoria: {}", raw.categoria));
    highlights
}

/// Ordered micronutrient entries with daily-value percentages recomputed
/// against the ANVISA reference table.
fn micronutrients(raw: &FoodRecord) -> Vec<Micronutrient> {
    vec![
        Micronutrient::new("Cálcio", raw.calcio_mg, "mg", daily_values::CALCIUM_MG),
        Micronutrient::new("Magnésio", raw.magnesio_mg, "mg", daily_values::MAGNESIUM_MG),
        Micronutrient::new("Ferro", raw.ferro_mg, "mg", daily_values::IRON_MG),
        Micronutrient::new("Sódio", raw.sodio_mg, "mg", daily_values::SODIUM_MG),
        Micronutrient::new("Potássio", raw.potassio_mg, "mg", daily_values::POTASSIUM_MG),
        Micronutrient::new("Zinco", raw.zinco_mg, "mg", daily_values::ZINC_MG),
        Micronutrient::new("Vitamina C", raw.vitamina_c_mg, "mg", daily_values::VITAMIN_C_MG),
    ]
}

/// Normalize a raw TACO row into a portal item.
///
/// TACO values are already numeric, so this cannot hit a malformed-field
/// error; the `Result` keeps the normalizer contract uniform across
/// verticals.
pub fn normalize_food(raw: &FoodRecord) -> Result<PortalItem, CoreError> {
    let title = raw.descricao.clone();
    let slug = slugify(&raw.descricao);

    Ok(PortalItem {
        id: item_id("nutricao", &slug),
        slug,
        title: title.clone(),
        description: format!("{} (Porção: {})", raw.categoria, raw.unidade),
        source: "UNICAMP/TACO".to_owned(),
        updated_at: Utc::now(),
        accent_color: accent_color(raw.proteina, raw.carboidrato, raw.lipideos).to_owned(),
        summary: format!(
            "{} fornece {:.0} kcal e {:.1} g de proteína por porção de {}.",
            title, raw.calorias, raw.proteina, raw.unidade
        ),
        highlights: insight_highlights(raw),
        affiliate: None,
        payload: ItemPayload::Food(FoodData {
            serving_size: raw.unidade.clone(),
            macros: Macros {
                calories: raw.calorias,
                protein: raw.proteina,
                carbs: raw.carboidrato,
                fat: raw.lipideos,
                fiber: raw.fibra,
            },
            micros: micronutrients(raw),
        }),
    })
}
