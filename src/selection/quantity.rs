use serde::{Serialize, Serializer};
use std::fmt;

/// Quantity typed into the dialog, kept exactly as parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Count(i64),
    /// The field held no leading integer.
    NotANumber,
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Count(1)
    }
}

impl Quantity {
    /// Parse a leading integer the way form fields are usually read.
    /// Leading whitespace and one sign are allowed and a `0x`/`0X` prefix
    /// switches to hexadecimal. Anything after the digits is ignored and
    /// out-of-range values saturate.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let hex = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"));
        let (radix, digits) = match hex {
            Some(hex) => (16, hex),
            None => (10, rest),
        };

        let end = digits
            .find(|ch: char| !ch.is_digit(radix))
            .unwrap_or(digits.len());
        if end == 0 {
            return Quantity::NotANumber;
        }

        let base = i64::from(radix);
        let value = digits[..end]
            .chars()
            .filter_map(|ch| ch.to_digit(radix))
            .fold(0i64, |acc, digit| {
                let digit = i64::from(digit);
                if negative {
                    acc.saturating_mul(base).saturating_sub(digit)
                } else {
                    acc.saturating_mul(base).saturating_add(digit)
                }
            });
        Quantity::Count(value)
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Quantity::NotANumber)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::NotANumber => write!(f, "NaN"),
        }
    }
}

// JSON has no NaN, so the marker goes out as null.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Count(n) => serializer.serialize_i64(*n),
            Quantity::NotANumber => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_integers() {
        assert_eq!(Quantity::parse("3"), Quantity::Count(3));
        assert_eq!(Quantity::parse("42"), Quantity::Count(42));
        assert_eq!(Quantity::parse("0"), Quantity::Count(0));
    }

    #[test]
    fn accepts_whitespace_sign_and_trailing_text() {
        assert_eq!(Quantity::parse("  12"), Quantity::Count(12));
        assert_eq!(Quantity::parse("+7"), Quantity::Count(7));
        assert_eq!(Quantity::parse("-4"), Quantity::Count(-4));
        assert_eq!(Quantity::parse("3abc"), Quantity::Count(3));
        assert_eq!(Quantity::parse("1.5"), Quantity::Count(1));
        assert_eq!(Quantity::parse("0x10"), Quantity::Count(16));
        assert_eq!(Quantity::parse("0X1f"), Quantity::Count(31));
        assert_eq!(Quantity::parse("-0x1F"), Quantity::Count(-31));
        assert_eq!(Quantity::parse(" 0x1g"), Quantity::Count(1));
        assert_eq!(Quantity::parse("0"), Quantity::Count(0));
        assert_eq!(Quantity::parse("010"), Quantity::Count(10));
    }

    #[test]
    fn non_numeric_input_is_nan() {
        for raw in ["", "abc", "-", "+", " ", ".5", "- 3", "0x", "-0X", "0xg"] {
            assert!(Quantity::parse(raw).is_nan(), "expected NaN for {raw:?}");
        }
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(
            Quantity::parse("99999999999999999999999"),
            Quantity::Count(i64::MAX)
        );
        assert_eq!(
            Quantity::parse("-99999999999999999999999"),
            Quantity::Count(i64::MIN)
        );
        assert_eq!(
            Quantity::parse("0xffffffffffffffffffff"),
            Quantity::Count(i64::MAX)
        );
    }

    #[test]
    fn serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Quantity::Count(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Quantity::NotANumber).unwrap(), "null");
        assert_eq!(Quantity::NotANumber.to_string(), "NaN");
    }
}
