//! `br_down_payment` is a Rust library for planning the down payment of a real estate purchase in Brazil.
//!
//! Given a property price, a down-payment percentage, a contract duration and an annual
//! interest rate, it derives:
//! - **Down payment**: the upfront share of the price.
//! - **Total to save**: a fixed 15% of the property value.
//! - **Base monthly installment**: the total to save spread over every month of the contract.
//! - **Indexed schedule**: the installment for each year corrected by a fixed 6% annual index (IGP-M style).
//! - **Compound schedule**: the installment for each year corrected by compound interest at the given rate.
//!
//! Inputs are accepted in Brazilian notation (`350.000,00`, `8,5`).
//!
//! ## Usage
//!
//! Add `br_down_payment` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! br_down_payment = "0.1.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then hand the raw text to `simulate_raw`:
//!
//! ```rust
//! use br_down_payment::{simulate_raw, RawSimulationInput};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let input = RawSimulationInput {
//!         property_value: "500.000,00".to_string(),
//!         down_payment_percent: "5,00".to_string(),
//!         contract_years: "3".to_string(),
//!         annual_interest_rate: "8,00".to_string(),
//!     };
//!
//!     match simulate_raw(&input) {
//!         Ok(result) => {
//!             assert_eq!(result.down_payment, dec!(25000));
//!             println!("Base installment: {:.2}", result.base_monthly_installment);
//!             for (year, installment) in result.compound_schedule.iter().enumerate() {
//!                 println!("Year {}: {:.2}", year + 1, installment);
//!             }
//!         }
//!         Err(e) => {
//!             eprintln!("Error simulating down payment: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod calculator;
pub mod error;
pub mod model;
pub mod parse;
pub mod report;
pub mod validation;

pub use calculator::{
    compute_base_monthly_installment, compute_compound_schedule, compute_down_payment,
    compute_indexed_schedule, compute_total_to_save, simulate,
};
pub use error::{FormatError, SimulationError};
pub use model::{RawSimulationInput, SimulationInput, SimulationResult};
pub use parse::{LocalizedValue, parse_contract_years, parse_localized_number};
pub use report::{CurrencyFormat, render_report};
pub use validation::{ValidationResult, Violation, collect_violations, validate};

/// Parses and validates raw user input, returning the checked parameters.
///
/// Fields are parsed in entry order (property value, percentage, years, rate) and the
/// first malformed one aborts. Validation then reports every broken rule at once.
///
/// # Errors
///
/// Returns [`SimulationError::Format`] for malformed text and
/// [`SimulationError::Validation`] with all violations otherwise.
pub fn prepare_input(raw: &RawSimulationInput) -> Result<SimulationInput, SimulationError> {
    let property_value = raw.property_value.to_decimal()?;
    let down_payment_percent = raw.down_payment_percent.to_decimal()?;
    let contract_years = parse_contract_years(&raw.contract_years)?;
    let annual_interest_rate = raw.annual_interest_rate.to_decimal()?;

    validate(
        property_value,
        down_payment_percent,
        annual_interest_rate,
        contract_years,
    )
    .into_result()
    .map_err(SimulationError::Validation)
}

/// Runs a whole simulation from raw user text: parse, validate, calculate.
pub fn simulate_raw(raw: &RawSimulationInput) -> Result<SimulationResult, SimulationError> {
    let input = prepare_input(raw)?;
    Ok(simulate(&input))
}
