//! Number formatting for the display

use crate::command::Operator;

/// Text shown when a result is not a finite number.
pub const ERROR_TEXT: &str = "Error";

/// Fractional digits kept before trailing zeros are stripped.
const FRACTION_DIGITS: usize = 6;

/// Render a value for the display.
///
/// Integers print without a decimal point. Everything else prints with up
/// to six fractional digits, trailing zeros and a dangling `.` removed.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let s = if n.fract() == 0.0 {
        format!("{}", n)
    } else {
        let s = format!("{:.*}", FRACTION_DIGITS, n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    // -0 and tiny negatives that round away
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Parse display text as a number. `None` for anything that isn't a finite
/// decimal numeral, including the error text.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Read the operand currently on the display.
///
/// A pending-operator annotation such as `"12 + "` is stripped first, so the
/// annotated display reads back as its accumulator.
pub fn parse_operand(display: &str) -> Option<f64> {
    let stripped = display
        .trim_end_matches(|c: char| c.is_whitespace() || Operator::from_symbol(c).is_some());
    parse_number(stripped)
}

/// The inline annotation shown after an operator press, e.g. `"12 + "`.
pub fn annotate(accumulator: f64, op: Operator) -> String {
    format!("{} {} ", format_number(accumulator), op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_point() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.000000), "2");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_fractions_trimmed() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-2.75), "-2.75");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_below_precision_rounds_to_zero() {
        assert_eq!(format_number(1e-7), "0");
        assert_eq!(format_number(-1e-7), "0");
    }

    #[test]
    fn test_non_finite_is_error() {
        assert_eq!(format_number(f64::NAN), ERROR_TEXT);
        assert_eq!(format_number(f64::INFINITY), ERROR_TEXT);
        assert_eq!(format_number(f64::NEG_INFINITY), ERROR_TEXT);
    }

    #[test]
    fn test_parse_inverts_format() {
        for x in [0.0, 1.0, -1.0, 2.5, 3.14159, -0.000001, 123456.789, 7e12, 0.125] {
            assert_eq!(parse_number(&format_number(x)), Some(x), "x = {x}");
        }
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number(ERROR_TEXT), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("0."), Some(0.0));
        assert_eq!(parse_number("05"), Some(5.0));
    }

    #[test]
    fn test_operand_strips_annotation() {
        assert_eq!(parse_operand("12 + "), Some(12.0));
        assert_eq!(parse_operand("-3 - "), Some(-3.0));
        assert_eq!(parse_operand("2.5 / "), Some(2.5));
        assert_eq!(parse_operand("-3"), Some(-3.0));
        assert_eq!(parse_operand(" - "), None);
    }

    #[test]
    fn test_annotate() {
        assert_eq!(annotate(12.0, Operator::Add), "12 + ");
        assert_eq!(annotate(0.5, Operator::Divide), "0.5 / ");
    }
}
