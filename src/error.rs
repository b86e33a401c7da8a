use thiserror::Error;

use crate::validation::Violation;

/// Raised when localized text cannot be turned into a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid number {input:?} ({reason}); use '.' for thousands and ',' for decimals, e.g. 350.000,00")]
    InvalidNumber { input: String, reason: String },

    #[error("invalid whole number {input:?} ({reason})")]
    InvalidInteger { input: String, reason: String },

    #[error("number is not finite: {value}")]
    NonFinite { value: String },
}

/// Everything that can stop a simulation before the calculator runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{}", join_messages(.0))]
    Validation(Vec<Violation>),
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::message)
        .collect::<Vec<_>>()
        .join("\n")
}
