//! Button commands
//!
//! Every button on the grid normalizes to one [`Command`]. Labels are parsed
//! with [`str::parse`] so the window never branches on raw strings itself.

use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used on the button and in the inline annotation.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Apply to two operands. Division by zero is the caller's concern.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> Result<Self, CommandError> {
        if c.is_ascii_digit() {
            Ok(Self(c))
        } else {
            Err(CommandError::InvalidDigit(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CommandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    ShowHistory,
}

impl Command {
    pub fn digit(c: char) -> Result<Self, CommandError> {
        Digit::new(c).map(Command::Digit)
    }

    /// Label drawn on the button that issues this command.
    pub fn label(self) -> String {
        match self {
            Command::Digit(d) => d.as_char().to_string(),
            Command::DecimalPoint => ".".to_string(),
            Command::Operator(op) => op.symbol().to_string(),
            Command::Equals => "=".to_string(),
            Command::Clear => "C".to_string(),
            Command::ShowHistory => "H".to_string(),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(CommandError::UnknownCommand(label.to_string()));
        };

        match c {
            '0'..='9' => Command::digit(c),
            '.' => Ok(Command::DecimalPoint),
            '=' => Ok(Command::Equals),
            'C' => Ok(Command::Clear),
            'H' => Ok(Command::ShowHistory),
            _ => Operator::from_symbol(c)
                .map(Command::Operator)
                .ok_or_else(|| CommandError::UnknownCommand(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_labels_parse() {
        for label in ["7", "8", "9", "/", "4", "5", "6", "*", "1", "2", "3", "-", "0", ".", "=", "+", "C", "H"] {
            let cmd: Command = label.parse().unwrap();
            assert_eq!(cmd.label(), label);
        }
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!("+".parse::<Command>(), Ok(Command::Operator(Operator::Add)));
        assert_eq!("-".parse::<Command>(), Ok(Command::Operator(Operator::Subtract)));
        assert_eq!("*".parse::<Command>(), Ok(Command::Operator(Operator::Multiply)));
        assert_eq!("/".parse::<Command>(), Ok(Command::Operator(Operator::Divide)));
    }

    #[test]
    fn test_unknown_labels_rejected() {
        for label in ["", "CE", "%", "x", "12"] {
            assert_eq!(
                label.parse::<Command>(),
                Err(CommandError::UnknownCommand(label.to_string()))
            );
        }
    }

    #[test]
    fn test_digit_validation() {
        assert_eq!(Digit::new('5').map(Digit::as_char), Ok('5'));
        assert_eq!(Digit::try_from('a'), Err(CommandError::InvalidDigit('a')));
        assert_eq!(Digit::new('٣'), Err(CommandError::InvalidDigit('٣')));
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), 10.0);
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), 4.0);
        assert_eq!(Operator::Multiply.apply(1.5, 2.0), 3.0);
        assert_eq!(Operator::Divide.apply(5.0, 2.0), 2.5);
    }
}
