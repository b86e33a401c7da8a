use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four fields exactly as the user typed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSimulationInput {
    /// Property price in localized notation, e.g. `350.000,00`.
    pub property_value: String,
    /// Down-payment percentage in localized notation, e.g. `5,00`.
    pub down_payment_percent: String,
    /// Contract duration in whole years.
    pub contract_years: String,
    /// Annual interest rate percentage in localized notation, e.g. `8,5`.
    pub annual_interest_rate: String,
}

/// Validated simulation parameters.
///
/// Only [`crate::validate`] hands these out, so every instance already satisfies
/// the domain constraints and nothing downstream re-checks them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// The property price.
    pub property_value: Decimal,
    /// The down payment as a percentage of the price (e.g. 5 for 5%).
    pub down_payment_percent: Decimal,
    /// Contract duration in years.
    pub contract_years: u32,
    /// The annual interest rate as a percentage, within 5% and 12%.
    pub annual_interest_rate: Decimal,
}

/// Everything a front end needs to display a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Upfront amount paid toward the property.
    pub down_payment: Decimal,
    /// Savings target, always 15% of the property value.
    pub total_to_save: Decimal,
    /// Savings target spread evenly over every month of the contract.
    pub base_monthly_installment: Decimal,
    /// Monthly installment per year, corrected by the fixed 6% annual index. Position 0 is year 1.
    pub indexed_schedule: Vec<Decimal>,
    /// Monthly installment per year, corrected by compound interest at the contract rate.
    pub compound_schedule: Vec<Decimal>,
}
