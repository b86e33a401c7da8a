//! Savings-plan arithmetic.
//!
//! Every function here assumes its arguments already went through [`crate::validate`]
//! and performs no checks of its own.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::model::{SimulationInput, SimulationResult};

/// Share of the property value the buyer must save, independent of the down payment.
pub const TOTAL_TO_SAVE_RATE: Decimal = dec!(0.15);

/// Fixed annual correction applied by the indexed schedule, as a percentage (IGP-M style).
pub const INDEXATION_RATE_PERCENT: Decimal = dec!(6);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Down payment: `property_value * (down_payment_percent / 100)`.
pub fn compute_down_payment(property_value: Decimal, down_payment_percent: Decimal) -> Decimal {
    property_value * (down_payment_percent / dec!(100))
}

/// Savings target, always 15% of the property value.
pub fn compute_total_to_save(property_value: Decimal) -> Decimal {
    property_value * TOTAL_TO_SAVE_RATE
}

/// Spreads the savings target evenly over every month of the contract.
///
/// A zero-year contract never reaches this point after validation; it yields zero
/// instead of dividing by zero.
pub fn compute_base_monthly_installment(total_to_save: Decimal, contract_years: u32) -> Decimal {
    if contract_years == 0 {
        return Decimal::ZERO;
    }

    total_to_save / (Decimal::from(contract_years) * MONTHS_PER_YEAR)
}

/// Installment per year corrected by the fixed 6% index: year `k` is `base * 1.06^(k-1)`.
pub fn compute_indexed_schedule(base_installment: Decimal, contract_years: u32) -> Vec<Decimal> {
    correction_schedule(base_installment, contract_years, INDEXATION_RATE_PERCENT)
}

/// Installment per year under compound interest: year `k` is `base * (1 + rate/100)^(k-1)`.
pub fn compute_compound_schedule(
    base_installment: Decimal,
    contract_years: u32,
    annual_interest_rate: Decimal,
) -> Vec<Decimal> {
    correction_schedule(base_installment, contract_years, annual_interest_rate)
}

// Position 0 is year 1 and carries the base installment untouched (exponent 0).
fn correction_schedule(
    base_installment: Decimal,
    contract_years: u32,
    annual_rate_percent: Decimal,
) -> Vec<Decimal> {
    let growth = Decimal::ONE + annual_rate_percent / dec!(100);

    (0..u64::from(contract_years))
        .map(|elapsed_years| base_installment * growth.powu(elapsed_years))
        .collect()
}

/// Derives all five outputs of a simulation.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let down_payment = compute_down_payment(input.property_value, input.down_payment_percent);
    let total_to_save = compute_total_to_save(input.property_value);
    let base_monthly_installment =
        compute_base_monthly_installment(total_to_save, input.contract_years);

    SimulationResult {
        down_payment,
        total_to_save,
        base_monthly_installment,
        indexed_schedule: compute_indexed_schedule(base_monthly_installment, input.contract_years),
        compound_schedule: compute_compound_schedule(
            base_monthly_installment,
            input.contract_years,
            input.annual_interest_rate,
        ),
    }
}
