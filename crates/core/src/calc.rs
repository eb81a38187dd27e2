//! Shared derived-field formulas.
//!
//! Every analytics field on an item (trend, IPVA estimate, savings,
//! daily-value percentage) is recomputed from source values with the
//! functions here; raw datasets are never trusted for derived numbers.

use crate::constants::TREND_DEADBAND_PCT;
use crate::item::Trend;

/// ANVISA daily reference values (VD) used for micronutrient percentages.
pub mod daily_values {
    pub const CALCIUM_MG: f64 = 1000.0;
    pub const MAGNESIUM_MG: f64 = 260.0;
    pub const IRON_MG: f64 = 14.0;
    pub const SODIUM_MG: f64 = 2400.0;
    pub const POTASSIUM_MG: f64 = 3500.0;
    pub const ZINC_MG: f64 = 7.0;
    pub const VITAMIN_C_MG: f64 = 45.0;
    pub const VITAMIN_B6_MG: f64 = 1.3;
    pub const VITAMIN_A_MCG: f64 = 600.0;
    pub const FIBER_G: f64 = 25.0;
}

/// IPVA rates by state. Missing states fall back to the SP rate.
const IPVA_RATES: &[(&str, f64)] =
    &[("SP", 0.04), ("RJ", 0.04), ("MG", 0.04), ("RS", 0.03), ("PR", 0.035)];

/// Round to two decimal places (cents).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify a signed percentage change against the deadband.
#[must_use]
pub fn classify_trend(percentage: f64) -> Trend {
    if percentage > TREND_DEADBAND_PCT {
        Trend::Up
    } else if percentage < -TREND_DEADBAND_PCT {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Percentage change from `previous` to `current`, rounded to two decimals.
/// A zero or negative `previous` has no meaningful change; reported as 0.
#[must_use]
pub fn percentage_change(previous: f64, current: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    round2((current - previous) / previous * 100.0)
}

/// Estimated annual IPVA for a vehicle value, rounded to whole reais.
#[must_use]
pub fn estimate_ipva(vehicle_value: f64, state: &str) -> f64 {
    let rate = IPVA_RATES
        .iter()
        .find(|(s, _)| *s == state)
        .map_or(0.04, |(_, r)| *r);
    (vehicle_value * rate).round()
}

/// A nutrient amount as a percentage of its daily reference value.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "percentages are far below i32::MAX")]
pub fn daily_value_percentage(value: f64, reference: f64) -> i32 {
    if reference <= 0.0 {
        return 0;
    }
    (value / reference * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_respects_deadband() {
        assert_eq!(classify_trend(2.5), Trend::Up);
        assert_eq!(classify_trend(-3.0), Trend::Down);
        assert_eq!(classify_trend(1.9), Trend::Stable);
        assert_eq!(classify_trend(-2.0), Trend::Stable);
        assert_eq!(classify_trend(0.0), Trend::Stable);
    }

    #[test]
    fn percentage_change_is_signed_and_rounded() {
        assert_eq!(percentage_change(100.0, 110.0), 10.0);
        assert_eq!(percentage_change(100.0, 95.0), -5.0);
        assert_eq!(percentage_change(78_500.0 * 1.01, 78_500.0), -0.99);
        assert_eq!(percentage_change(0.0, 50.0), 0.0);
    }

    #[test]
    fn ipva_uses_state_rates() {
        assert_eq!(estimate_ipva(100_000.0, "SP"), 4000.0);
        assert_eq!(estimate_ipva(100_000.0, "RS"), 3000.0);
        assert_eq!(estimate_ipva(100_000.0, "PR"), 3500.0);
        // Unknown state falls back to 4%
        assert_eq!(estimate_ipva(100_000.0, "AM"), 4000.0);
    }

    #[test]
    fn daily_value_rounds_to_nearest_percent() {
        assert_eq!(daily_value_percentage(31.5, daily_values::POTASSIUM_MG), 1);
        assert_eq!(daily_value_percentage(8.5, daily_values::FIBER_G), 34);
        assert_eq!(daily_value_percentage(7.0, daily_values::ZINC_MG), 100);
        assert_eq!(daily_value_percentage(1.0, 0.0), 0);
    }
}
