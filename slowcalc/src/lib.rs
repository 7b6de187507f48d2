//! SlowCalc engine
//!
//! A four-function calculator driven by discrete button commands. The
//! window in `main.rs` is a thin renderer over [`Calculator`].

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;

pub use command::{Command, Digit, Operator};
pub use config::{CalcConfig, DisplayStyle, EngineConfig, Variant};
pub use engine::{reduce, Calculator, EngineOutput, EngineState};
pub use error::{CalcFault, CommandError};
pub use history::{HistoryEntry, HistoryView};
