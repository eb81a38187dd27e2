//! FIPE vehicle pricing vertical.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use portal_core::{
    Capability, CoreError, Depreciation, ItemPayload, PortalItem, PricePoint, Trend, VehicleData,
    Vertical, DEFAULT_IPVA_STATE, estimate_ipva, format_currency, parse_currency,
    percentage_change, round2, slugify,
};

use crate::item_id;

/// Raw FIPE API record. Prices arrive as locale-formatted text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    #[serde(rename = "CodigoFipe")]
    pub codigo_fipe: String,
    #[serde(rename = "MesReferencia")]
    pub mes_referencia: String,
    #[serde(rename = "TipoVeiculo")]
    pub tipo_veiculo: u8,
    #[serde(rename = "SiglaCombustivel")]
    pub sigla_combustivel: String,
    #[serde(rename = "Marca")]
    pub marca: String,
    #[serde(rename = "Modelo")]
    pub modelo: String,
    #[serde(rename = "AnoModelo")]
    pub ano_modelo: i32,
    #[serde(rename = "Valor")]
    pub valor: String,
}

/// The FIPE vertical declaration.
#[must_use]
pub fn vehicle_vertical() -> Vertical {
    Vertical::new(
        "fipe",
        "Tabela FIPE",
        "Consulta de preços de veículos novos e usados",
        vec![Capability::PriceChart, Capability::DepreciationBadge, Capability::IpvaEstimate],
    )
}

/// Mock fetcher standing in for the FIPE API.
#[must_use]
pub fn fetch_vehicles() -> Vec<VehicleRecord> {
    tracing::info!("fetching FIPE records (mock source)");
    vec![
        VehicleRecord {
            codigo_fipe: "004381-8".to_owned(),
            mes_referencia: "janeiro de 2026".to_owned(),
            tipo_veiculo: 1,
            sigla_combustivel: "G".to_owned(),
            marca: "Chevrolet".to_owned(),
            modelo: "Onix Hatch LT 1.0 12V Flex 5p Mec.".to_owned(),
            ano_modelo: 2024,
            valor: "R$ 78.500,00".to_owned(),
        },
        VehicleRecord {
            codigo_fipe: "003444-4".to_owned(),
            mes_referencia: "janeiro de 2026".to_owned(),
            tipo_veiculo: 1,
            sigla_combustivel: "G".to_owned(),
            marca: "Honda".to_owned(),
            modelo: "Civic Sedan EX 2.0 Flex 16V Aut.".to_owned(),
            ano_modelo: 2025,
            valor: "R$ 145.200,00".to_owned(),
        },
        VehicleRecord {
            codigo_fipe: "005399-6".to_owned(),
            mes_referencia: "janeiro de 2026".to_owned(),
            tipo_veiculo: 1,
            sigla_combustivel: "G".to_owned(),
            marca: "Volkswagen".to_owned(),
            modelo: "Polo Highline 1.0 TSI Total Flex Aut.".to_owned(),
            ano_modelo: 2024,
            valor: "R$ 112.900,00".to_owned(),
        },
    ]
}

const MONTH_ABBR: [&str; 12] =
    ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// The source has no real series, so prior months are derived from the
/// current price with fixed multipliers (each month back was slightly
/// more expensive).
const HISTORY_MULTIPLIERS: [f64; 3] = [1.0, 1.01, 1.02];

/// `"janeiro de 2026"` -> zero-based month index and year.
fn parse_reference_month(reference: &str) -> Option<(usize, i32)> {
    let mut parts = reference.split(" de ");
    let month = parts.next()?.trim().to_lowercase();
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let index = MONTH_NAMES.iter().position(|m| *m == month)?;
    Some((index, year))
}

/// `"Jan/26"`-style label for `months_back` months before the reference.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::indexing_slicing,
    reason = "rem_euclid(12) is in 0..12"
)]
fn month_label(month_index: usize, year: i32, months_back: usize) -> String {
    let total = month_index as i64 + i64::from(year) * 12 - months_back as i64;
    let (y, m) = (total.div_euclid(12), total.rem_euclid(12));
    format!("{}/{:02}", MONTH_ABBR[m as usize], y.rem_euclid(100))
}

fn synthetic_history(price: f64, reference: &str) -> Vec<PricePoint> {
    let now = Utc::now();
    let (month_index, year) = parse_reference_month(reference)
        .unwrap_or_else(|| (now.month0() as usize, now.year()));
    HISTORY_MULTIPLIERS
        .iter()
        .enumerate()
        .map(|(back, mult)| PricePoint {
            month: month_label(month_index, year, back),
            value: round2(price * mult),
        })
        .collect()
}

/// Normalize a raw FIPE record into a portal item.
///
/// Pure apart from the embedded `updated_at` timestamp. A malformed `Valor`
/// fails this record only.
pub fn normalize_vehicle(raw: &VehicleRecord) -> Result<PortalItem, CoreError> {
    let price = parse_currency("Valor", &raw.valor)?;

    let title = format!("{} {} {}", raw.marca, raw.modelo, raw.ano_modelo);
    let slug = slugify(&title);

    let price_history = synthetic_history(price, &raw.mes_referencia);
    let previous = price_history.get(1).map_or(price, |p| p.value);
    let depreciation = Depreciation::from_percentage(percentage_change(previous, price));
    let ipva_estimated = estimate_ipva(price, DEFAULT_IPVA_STATE);

    let trend_text = match depreciation.trend {
        Trend::Up => "valorização",
        Trend::Down => "depreciação",
        Trend::Stable => "estabilidade",
    };

    Ok(PortalItem {
        id: item_id("fipe", &slug),
        slug,
        title: title.clone(),
        description: format!(
            "Preço Tabela FIPE {} - Código: {}",
            raw.mes_referencia, raw.codigo_fipe
        ),
        source: "Tabela FIPE".to_owned(),
        updated_at: Utc::now(),
        accent_color: "#3b82f6".to_owned(),
        summary: format!(
            "{} está avaliado em {} pela Tabela FIPE, com {} no período recente.",
            title,
            format_currency(price),
            trend_text
        ),
        highlights: vec![
            format!("Código FIPE: {}", raw.codigo_fipe),
            format!("Combustível: {}", raw.sigla_combustivel),
            format!("IPVA estimado ({}): {}", DEFAULT_IPVA_STATE, format_currency(ipva_estimated)),
            format!("Variação recente: {:.2}%", depreciation.percentage),
        ],
        affiliate: None,
        payload: ItemPayload::Vehicle(VehicleData {
            current_price: price,
            price_history,
            ipva_estimated,
            depreciation,
        }),
    })
}
