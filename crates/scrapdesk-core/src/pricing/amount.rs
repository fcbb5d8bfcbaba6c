//! Price string normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalize a raw price string to a decimal.
///
/// Strips `$`, commas, and whitespace, then any remaining character
/// that is neither a digit nor a dot. If more than one dot survives,
/// the first one is kept as the decimal point and the rest are dropped
/// (OCR'd thousands separators). Returns `None` when nothing numeric
/// remains.
pub fn normalize_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let parts: Vec<&str> = cleaned.split('.').collect();
    let normalized = if parts.len() > 2 {
        format!("{}.{}", parts[0], parts[1..].concat())
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_plain() {
        assert_eq!(normalize_price("0.79"), Some(dec("0.79")));
        assert_eq!(normalize_price("3"), Some(dec("3")));
    }

    #[test]
    fn test_normalize_currency_noise() {
        assert_eq!(normalize_price("$0.79"), Some(dec("0.79")));
        assert_eq!(normalize_price("$ 1,234.56"), Some(dec("1234.56")));
        assert_eq!(normalize_price(" $3.25 /lb"), Some(dec("3.25")));
    }

    #[test]
    fn test_normalize_extra_dots() {
        assert_eq!(normalize_price("1.2.3"), Some(dec("1.23")));
        assert_eq!(normalize_price("1.234.56"), Some(dec("1.23456")));
    }

    #[test]
    fn test_normalize_non_numeric() {
        assert_eq!(normalize_price(""), None);
        assert_eq!(normalize_price("n/a"), None);
        assert_eq!(normalize_price("$"), None);
        assert_eq!(normalize_price("."), None);
    }
}
