//! Error kinds surfaced by the calculator.

use thiserror::Error;

/// A failed evaluation. Never fatal; the engine recovers and keeps running.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcFault {
    /// Shown to the user as a blocking notification.
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Overflow or NaN. The display shows the literal error text.
    #[error("Error")]
    NonFinite,
}

/// A presentation event that does not map to a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("not a decimal digit: {0:?}")]
    InvalidDigit(char),
    #[error("unknown command label: {0:?}")]
    UnknownCommand(String),
}
