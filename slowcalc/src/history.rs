//! Calculation log

use crate::command::Operator;
use crate::format::format_number;
use std::fmt;

/// One completed evaluation. Never mutated after it is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(left: f64, operator: Operator, right: f64, result: f64) -> Self {
        Self { left, operator, right, result }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.left),
            self.operator,
            format_number(self.right),
            format_number(self.result)
        )
    }
}

/// Answer to a history request.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Empty,
    /// Oldest first.
    Entries(Vec<HistoryEntry>),
}

impl HistoryView {
    pub fn snapshot(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Entries(entries.to_vec())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HistoryView::Empty => 0,
            HistoryView::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry::new(7.0, Operator::Add, 3.0, 10.0);
        assert_eq!(entry.to_string(), "7 + 3 = 10");
        let entry = HistoryEntry::new(1.0, Operator::Divide, 3.0, 1.0 / 3.0);
        assert_eq!(entry.to_string(), "1 / 3 = 0.333333");
    }

    #[test]
    fn test_snapshot_empty_signal() {
        assert_eq!(HistoryView::snapshot(&[]), HistoryView::Empty);
        assert!(HistoryView::Empty.is_empty());
    }

    #[test]
    fn test_snapshot_keeps_order() {
        let entries = [
            HistoryEntry::new(1.0, Operator::Add, 1.0, 2.0),
            HistoryEntry::new(2.0, Operator::Multiply, 3.0, 6.0),
        ];
        let view = HistoryView::snapshot(&entries);
        assert_eq!(view.len(), 2);
        assert_eq!(view, HistoryView::Entries(entries.to_vec()));
    }
}
