//! Domain checks applied once, before any calculation.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::SimulationInput;

/// Lowest accepted annual interest rate, inclusive.
pub const MIN_INTEREST_RATE: Decimal = dec!(5);
/// Highest accepted annual interest rate, inclusive.
pub const MAX_INTEREST_RATE: Decimal = dec!(12);

/// Largest accepted property value. At the other maxima every derived amount stays below 10^26.
pub const MAX_PROPERTY_VALUE: Decimal = dec!(1000000000000000000);
/// Largest accepted down-payment percentage; keeps the down payment of the largest property below 10^26.
pub const MAX_DOWN_PAYMENT_PERCENT: Decimal = dec!(1000000000);
/// Longest accepted contract, which caps the growth factor of the schedules at `1.12^99`.
pub const MAX_CONTRACT_YEARS: i64 = 100;

/// A single broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    PropertyValueNotPositive,
    DownPaymentPercentNotPositive,
    InterestRateOutOfRange,
    ContractYearsNotPositive,
    PropertyValueTooLarge,
    DownPaymentPercentTooLarge,
    ContractYearsTooLarge,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::PropertyValueNotPositive => "property value must be positive",
            Violation::DownPaymentPercentNotPositive => "down-payment percentage must be positive",
            Violation::InterestRateOutOfRange => "interest rate must be between 5% and 12%",
            Violation::ContractYearsNotPositive => "contract duration must be positive",
            Violation::PropertyValueTooLarge => "property value exceeds the supported maximum",
            Violation::DownPaymentPercentTooLarge => "down-payment percentage exceeds the supported maximum",
            Violation::ContractYearsTooLarge => "contract duration cannot exceed 100 years",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`validate`]: either usable input or every rule it breaks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(SimulationInput),
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The broken rules, empty when the input is valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations().iter().map(Violation::message).collect()
    }

    pub fn into_result(self) -> Result<SimulationInput, Vec<Violation>> {
        match self {
            ValidationResult::Valid(input) => Ok(input),
            ValidationResult::Invalid(violations) => Err(violations),
        }
    }
}

/// Evaluates every rule independently and returns all that fail, in rule order.
pub fn collect_violations(
    property_value: Decimal,
    down_payment_percent: Decimal,
    annual_interest_rate: Decimal,
    contract_years: i64,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if property_value <= Decimal::ZERO {
        violations.push(Violation::PropertyValueNotPositive);
    }
    if down_payment_percent <= Decimal::ZERO {
        violations.push(Violation::DownPaymentPercentNotPositive);
    }
    if !(MIN_INTEREST_RATE..=MAX_INTEREST_RATE).contains(&annual_interest_rate) {
        violations.push(Violation::InterestRateOutOfRange);
    }
    if contract_years <= 0 {
        violations.push(Violation::ContractYearsNotPositive);
    }

    if property_value > MAX_PROPERTY_VALUE {
        violations.push(Violation::PropertyValueTooLarge);
    }
    if down_payment_percent > MAX_DOWN_PAYMENT_PERCENT {
        violations.push(Violation::DownPaymentPercentTooLarge);
    }
    if contract_years > MAX_CONTRACT_YEARS {
        violations.push(Violation::ContractYearsTooLarge);
    }

    violations
}

/// Checks the four converted inputs and, when they pass, packs them into a [`SimulationInput`].
pub fn validate(
    property_value: Decimal,
    down_payment_percent: Decimal,
    annual_interest_rate: Decimal,
    contract_years: i64,
) -> ValidationResult {
    let violations = collect_violations(
        property_value,
        down_payment_percent,
        annual_interest_rate,
        contract_years,
    );

    match u32::try_from(contract_years) {
        Ok(contract_years) if violations.is_empty() => ValidationResult::Valid(SimulationInput {
            property_value,
            down_payment_percent,
            contract_years,
            annual_interest_rate,
        }),
        _ => ValidationResult::Invalid(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(5))]
    #[case(dec!(12))]
    #[case(dec!(8.5))]
    fn test_interest_rate_bounds_are_inclusive(#[case] rate: Decimal) {
        let result = validate(dec!(500000), dec!(5), rate, 3);
        assert!(result.is_valid());
        assert!(result.violations().is_empty());
    }

    #[rstest]
    #[case(dec!(4.999))]
    #[case(dec!(12.001))]
    #[case(dec!(0))]
    #[case(dec!(-8))]
    fn test_interest_rate_outside_range(#[case] rate: Decimal) {
        let result = validate(dec!(500000), dec!(5), rate, 3);
        assert_eq!(result.violations(), &[Violation::InterestRateOutOfRange]);
    }

    #[test]
    fn test_zero_property_value_reports_only_that_rule() {
        let result = validate(dec!(0), dec!(5), dec!(8), 3);
        assert_eq!(result.messages(), vec!["property value must be positive"]);
    }

    #[test]
    fn test_every_rule_is_reported_together() {
        let result = validate(dec!(-1), dec!(-1), dec!(20), 0);
        assert_eq!(
            result.messages(),
            vec![
                "property value must be positive",
                "down-payment percentage must be positive",
                "interest rate must be between 5% and 12%",
                "contract duration must be positive",
            ]
        );
    }

    #[test]
    fn test_negative_contract_years() {
        let violations = collect_violations(dec!(100000), dec!(10), dec!(6), -3);
        assert_eq!(violations, vec![Violation::ContractYearsNotPositive]);
    }

    #[rstest]
    #[case(dec!(2000000000000000000), dec!(5), 3, Violation::PropertyValueTooLarge)]
    #[case(dec!(500000), dec!(1000000000.5), 3, Violation::DownPaymentPercentTooLarge)]
    #[case(dec!(500000), dec!(5), 101, Violation::ContractYearsTooLarge)]
    fn test_upper_bounds(
        #[case] property_value: Decimal,
        #[case] down_payment_percent: Decimal,
        #[case] contract_years: i64,
        #[case] expected: Violation,
    ) {
        let result = validate(property_value, down_payment_percent, dec!(8), contract_years);
        assert_eq!(result.violations(), &[expected]);
    }

    #[rstest]
    #[case(dec!(150))]
    #[case(dec!(100))]
    #[case(dec!(1000000000))]
    fn test_down_payment_above_property_value_is_accepted(#[case] percent: Decimal) {
        let result = validate(dec!(500000), percent, dec!(8), 3);
        assert!(result.is_valid());
    }

    #[test]
    fn test_valid_input_is_packed() {
        let input = validate(dec!(500000), dec!(5), dec!(8), 3).into_result().unwrap();
        assert_eq!(input.property_value, dec!(500000));
        assert_eq!(input.down_payment_percent, dec!(5));
        assert_eq!(input.contract_years, 3);
        assert_eq!(input.annual_interest_rate, dec!(8));
    }

    #[test]
    fn test_violation_display_matches_message() {
        assert_eq!(
            Violation::InterestRateOutOfRange.to_string(),
            "interest rate must be between 5% and 12%"
        );
    }
}
