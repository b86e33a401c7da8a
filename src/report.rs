//! Plain-text rendering of a simulation for terminal front ends.
//!
//! Currency formatting is driven by an explicit [`CurrencyFormat`] value rather than
//! process-wide locale settings.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculator::INDEXATION_RATE_PERCENT;
use crate::model::{SimulationInput, SimulationResult};

const RULE_WIDTH: usize = 50;

/// How currency amounts are written for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub decimal_places: u32,
}

impl CurrencyFormat {
    /// Brazilian real: `R$ 1.234,56`.
    pub fn brazilian() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            decimal_places: 2,
        }
    }

    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let mut magnitude = rounded.abs();
        magnitude.rescale(self.decimal_places);
        let digits = magnitude.to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!(
            "{sign}{} {}",
            self.symbol,
            group_thousands(whole, self.thousands_separator)
        );
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brazilian()
    }
}

fn group_thousands(whole: &str, separator: char) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

fn centered(title: &str) -> String {
    format!("{title:^width$}", width = RULE_WIDTH)
}

/// Renders the full results block: headline amounts, then both yearly schedules.
pub fn render_report(
    input: &SimulationInput,
    result: &SimulationResult,
    currency: &CurrencyFormat,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("{}\n", centered("SIMULATION RESULTS")));
    out.push_str(&format!("{rule}\n"));
    out.push('\n');
    out.push_str(&format!("• Down payment: {}\n", currency.format(result.down_payment)));
    out.push_str(&format!("• Total to save: {}\n", currency.format(result.total_to_save)));
    out.push_str(&format!(
        "• Base monthly installment: {}\n",
        currency.format(result.base_monthly_installment)
    ));

    out.push('\n');
    out.push_str(&format!("{thin_rule}\n"));
    out.push_str(&format!(
        "INSTALLMENTS INDEXED AT {}% PER YEAR:\n",
        INDEXATION_RATE_PERCENT.normalize()
    ));
    for (year, installment) in result.indexed_schedule.iter().enumerate() {
        out.push_str(&format!("  Year {}: {}\n", year + 1, currency.format(*installment)));
    }

    let mut rate = input.annual_interest_rate.round_dp(2);
    rate.rescale(2);
    out.push('\n');
    out.push_str(&format!("{thin_rule}\n"));
    out.push_str(&format!("INSTALLMENTS WITH COMPOUND INTEREST ({rate}% PER YEAR):\n"));
    for (year, installment) in result.compound_schedule.iter().enumerate() {
        out.push_str(&format!("  Year {}: {}\n", year + 1, currency.format(*installment)));
    }
    out.push_str(&format!("{rule}\n"));

    out
}
