//! Parsing for Brazilian-locale numeric strings.
//!
//! Government datasets ship prices as text: FIPE uses the full currency form
//! (`"R$ 145.200,00"`, thousands `.` and decimal `,`), ANVISA CSV columns use
//! the bare decimal-comma form (`"12,99"`). Both parse here; anything else is
//! a [`CoreError::MalformedNumericField`] for that single record.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

#[allow(clippy::unwrap_used, reason = "pattern is a compile-time constant")]
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^R\$\s?\d{1,3}(\.\d{3})*(,\d{2})?$").unwrap());

#[allow(clippy::unwrap_used, reason = "pattern is a compile-time constant")]
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(,\d{1,2})?$").unwrap());

/// Parse a full BRL currency string: `"R$ 78.500,00"` -> `78500.0`.
pub fn parse_currency(field: &'static str, value: &str) -> Result<f64, CoreError> {
    let trimmed = value.trim();
    if !CURRENCY_RE.is_match(trimmed) {
        return Err(CoreError::MalformedNumericField { field, value: value.to_owned() });
    }
    let digits = trimmed
        .trim_start_matches("R$")
        .trim_start()
        .replace('.', "")
        .replace(',', ".");
    digits
        .parse::<f64>()
        .map_err(|_| CoreError::MalformedNumericField { field, value: value.to_owned() })
}

/// Format a value as BRL currency text: `78500.0` -> `"R$ 78.500,00"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "prices are far below i64::MAX cents")]
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let (int, frac) = (cents / 100, cents % 100);
    let digits = int.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {sign}{grouped},{frac:02}")
}

/// Parse a bare decimal-comma string: `"12,99"` -> `12.99`.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, CoreError> {
    let trimmed = value.trim();
    if !DECIMAL_RE.is_match(trimmed) {
        return Err(CoreError::MalformedNumericField { field, value: value.to_owned() });
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CoreError::MalformedNumericField { field, value: value.to_owned() })
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;

    #[test]
    fn parses_currency_with_thousands_separator() {
        assert_eq!(parse_currency("Valor", "R$ 145.200,00").unwrap(), 145_200.0);
        assert_eq!(parse_currency("Valor", "R$ 78.500,00").unwrap(), 78_500.0);
        assert_eq!(parse_currency("Valor", "R$ 1.234.567,89").unwrap(), 1_234_567.89);
    }

    #[test]
    fn parses_currency_without_cents() {
        assert_eq!(parse_currency("Valor", "R$ 500").unwrap(), 500.0);
    }

    #[test]
    fn rejects_malformed_currency() {
        for bad in ["145200.00", "R$ abc", "R$ 1.23,45", "", "R$"] {
            let err = parse_currency("Valor", bad).unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedNumericField { field: "Valor", .. }),
                "expected malformed error for {bad:?}"
            );
        }
    }

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(145_200.0), "R$ 145.200,00");
        assert_eq!(format_currency(7.51), "R$ 7,51");
        assert_eq!(format_currency(1_234_567.89), "R$ 1.234.567,89");
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn currency_round_trips_through_formatter() {
        for v in [78_500.0, 112_900.0, 145_200.0] {
            assert_eq!(parse_currency("Valor", &format_currency(v)).unwrap(), v);
        }
    }

    #[test]
    fn parses_decimal_comma() {
        assert_eq!(parse_decimal("VL_PRECO_MAXIMO", "20,50").unwrap(), 20.50);
        assert_eq!(parse_decimal("VL_PRECO_FABRICA", "12,99").unwrap(), 12.99);
        assert_eq!(parse_decimal("VL_PRECO_FABRICA", "8").unwrap(), 8.0);
    }

    #[test]
    fn rejects_malformed_decimal() {
        for bad in ["12.99", "12,999", "abc", ""] {
            assert!(parse_decimal("VL_PRECO_MAXIMO", bad).is_err(), "accepted {bad:?}");
        }
    }
}
