//! Conversion of Brazilian-notation numeric text (`350.000,00`, `8,5`).

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::FormatError;

/// Most fractional digits a [`Decimal`] holds without rounding.
pub const MAX_DECIMAL_PLACES: usize = 28;

/// Parses a number written with `.` as thousands separator and `,` as decimal separator.
///
/// Every `.` is removed, then every `,` becomes `.`, and the result is parsed as a decimal.
/// Surrounding whitespace is ignored. Currency symbols are not stripped.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] when the normalized text is not a number,
/// e.g. an empty string, several commas or stray characters, or when it carries more
/// than [`MAX_DECIMAL_PLACES`] fractional digits.
pub fn parse_localized_number(raw: &str) -> Result<Decimal, FormatError> {
    let trimmed = raw.trim();
    let normalized = trimmed.replace('.', "").replace(',', ".");

    if normalized.is_empty() {
        return Err(FormatError::InvalidNumber {
            input: raw.to_string(),
            reason: "empty value".to_string(),
        });
    }

    if let Some((_, fraction)) = normalized.split_once('.') {
        if fraction.len() > MAX_DECIMAL_PLACES {
            return Err(FormatError::InvalidNumber {
                input: raw.to_string(),
                reason: format!("more than {MAX_DECIMAL_PLACES} decimal places"),
            });
        }
    }

    Decimal::from_str(&normalized).map_err(|e| FormatError::InvalidNumber {
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parses the contract duration, a plain base-10 integer.
pub fn parse_contract_years(raw: &str) -> Result<i64, FormatError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| FormatError::InvalidInteger {
            input: raw.to_string(),
            reason: e.to_string(),
        })
}

/// A value that can feed a numeric field: localized text is parsed, numbers pass through.
pub trait LocalizedValue {
    fn to_decimal(&self) -> Result<Decimal, FormatError>;
}

impl LocalizedValue for str {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        parse_localized_number(self)
    }
}

impl LocalizedValue for String {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        parse_localized_number(self)
    }
}

impl LocalizedValue for Decimal {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        Ok(*self)
    }
}

impl LocalizedValue for i64 {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        Ok(Decimal::from(*self))
    }
}

impl LocalizedValue for u32 {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        Ok(Decimal::from(*self))
    }
}

impl LocalizedValue for f64 {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        Decimal::try_from(*self).map_err(|_| FormatError::NonFinite {
            value: self.to_string(),
        })
    }
}

impl<T: LocalizedValue + ?Sized> LocalizedValue for &T {
    fn to_decimal(&self) -> Result<Decimal, FormatError> {
        (**self).to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("350.000,00", dec!(350000.00))]
    #[case("8,5", dec!(8.5))]
    #[case("0,00", dec!(0))]
    #[case("1.234.567,89", dec!(1234567.89))]
    #[case("12", dec!(12))]
    #[case(" 8,5 ", dec!(8.5))]
    #[case("-1", dec!(-1))]
    #[case("0,0000000000000000000000000001", dec!(0.0000000000000000000000000001))]
    fn test_parse_localized_number(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_localized_number(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("1,2,3")]
    #[case("abc")]
    #[case("R$ 10,00")]
    #[case("10%")]
    #[case("0,00000000000000000000000000000001")]
    fn test_parse_localized_number_rejects_malformed(#[case] raw: &str) {
        let err = parse_localized_number(raw).unwrap_err();
        assert!(matches!(err, FormatError::InvalidNumber { .. }));
    }

    #[test]
    fn test_error_keeps_raw_input() {
        match parse_localized_number("1,2,3") {
            Err(FormatError::InvalidNumber { input, .. }) => assert_eq!(input, "1,2,3"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case("3", 3)]
    #[case(" 30 ", 30)]
    #[case("0", 0)]
    #[case("-2", -2)]
    fn test_parse_contract_years(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_contract_years(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("3,5")]
    #[case("")]
    #[case("three")]
    fn test_parse_contract_years_rejects_non_integers(#[case] raw: &str) {
        assert!(matches!(
            parse_contract_years(raw),
            Err(FormatError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_numeric_values_pass_through() {
        assert_eq!(dec!(12.5).to_decimal().unwrap(), dec!(12.5));
        assert_eq!(7_i64.to_decimal().unwrap(), dec!(7));
        assert_eq!(30_u32.to_decimal().unwrap(), dec!(30));
        assert_eq!(8.5_f64.to_decimal().unwrap(), dec!(8.5));
        assert_eq!("8,5".to_decimal().unwrap(), dec!(8.5));
        assert_eq!(String::from("350.000,00").to_decimal().unwrap(), dec!(350000));
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        assert!(matches!(
            f64::NAN.to_decimal(),
            Err(FormatError::NonFinite { .. })
        ));
        assert!(f64::INFINITY.to_decimal().is_err());
    }
}
