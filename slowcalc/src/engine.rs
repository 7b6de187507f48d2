//! Calculator engine
//!
//! One pending binary operation at a time. Each button press is a
//! [`Command`] reduced against the current [`EngineState`]:
//!
//! - digits and the decimal point build the operand on the display
//! - an operator captures the display as the accumulator
//! - equals applies the pending operator to accumulator and display
//! - clear resets the arithmetic but keeps the log
//!
//! `awaiting_operand` marks that the next digit starts a fresh number.

use crate::command::{Command, Digit, Operator};
use crate::config::{DisplayStyle, EngineConfig};
use crate::error::CalcFault;
use crate::format::{annotate, format_number, parse_operand, ERROR_TEXT};
use crate::history::{HistoryEntry, HistoryView};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    display: String,
    pending: Option<Operator>,
    accumulator: f64,
    awaiting_operand: bool,
    history: Vec<HistoryEntry>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            accumulator: 0.0,
            awaiting_operand: true,
            history: Vec::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.accumulator = 0.0;
        self.awaiting_operand = true;
    }

    fn append_digit(&mut self, digit: Digit) {
        if self.awaiting_operand {
            self.display = digit.as_char().to_string();
            self.awaiting_operand = false;
        } else {
            self.display.push(digit.as_char());
        }
    }

    fn append_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Operand on the display; unreadable text counts as zero.
    fn read_operand(&self) -> f64 {
        parse_operand(&self.display).unwrap_or_else(|| {
            debug!(display = %self.display, "unreadable operand, using 0");
            0.0
        })
    }

    fn set_operation(&mut self, op: Operator, config: &EngineConfig) {
        self.accumulator = self.read_operand();
        self.pending = Some(op);
        if config.display == DisplayStyle::Annotated {
            self.display = annotate(self.accumulator, op);
        }
        self.awaiting_operand = true;
    }

    fn calculate(&mut self, config: &EngineConfig) -> Result<(), CalcFault> {
        let second = self.read_operand();
        self.awaiting_operand = true;

        let Some(op) = self.pending else {
            self.display = format_number(second);
            return Ok(());
        };

        // operator and accumulator survive so the divisor can be retyped
        if op == Operator::Divide && second == 0.0 {
            warn!(accumulator = self.accumulator, "division by zero");
            return Err(CalcFault::DivisionByZero);
        }

        let result = op.apply(self.accumulator, second);
        self.pending = None;

        if !result.is_finite() {
            warn!(accumulator = self.accumulator, %op, second, "result is not finite");
            self.display = ERROR_TEXT.to_string();
            return Err(CalcFault::NonFinite);
        }

        self.display = format_number(result);
        if config.record_history {
            self.history
                .push(HistoryEntry::new(self.accumulator, op, second, result));
        }
        Ok(())
    }
}

/// What the window renders after a command.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    pub display: String,
    /// Present only in answer to [`Command::ShowHistory`].
    pub history: Option<HistoryView>,
    /// A failed evaluation the user should hear about.
    pub fault: Option<CalcFault>,
}

/// Apply one command to a state, returning the next state and the output.
pub fn reduce(
    mut state: EngineState,
    command: Command,
    config: &EngineConfig,
) -> (EngineState, EngineOutput) {
    let mut history = None;
    let mut fault = None;

    match command {
        Command::Digit(digit) => state.append_digit(digit),
        Command::DecimalPoint => state.append_decimal(),
        Command::Operator(op) => state.set_operation(op, config),
        Command::Equals => fault = state.calculate(config).err(),
        Command::Clear => state.clear(),
        Command::ShowHistory => history = Some(HistoryView::snapshot(&state.history)),
    }

    debug!(?command, display = %state.display, "command applied");

    let output = EngineOutput {
        display: state.display.clone(),
        history,
        fault,
    };
    (state, output)
}

/// A calculator session: one state, one configuration.
///
/// Each window owns its own `Calculator`; nothing is shared between them.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
    config: EngineConfig,
}

impl Calculator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: EngineState::new(),
            config,
        }
    }

    pub fn apply(&mut self, command: Command) -> EngineOutput {
        let state = std::mem::take(&mut self.state);
        let (state, output) = reduce(state, command, &self.config);
        self.state = state;
        output
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }
}
