//! Rendering calculator state for a two-line display.

mod formatter;

pub use formatter::{format_operand, Formatter};

use crate::core::CalculatorState;
use serde::Serialize;
use std::fmt;

/// The two text regions of the calculator display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Display {
    /// Staged operand followed by the pending operation, e.g. `"1,234 +"`.
    pub previous_line: String,
    /// Operand being entered or the last result.
    pub current_line: String,
}

impl Display {
    pub fn from_state(state: &CalculatorState, formatter: &Formatter) -> Self {
        let previous = formatter.format(state.previous_operand.as_deref());
        let operation = state.operation.map(|op| op.symbol().to_string());

        let previous_line = [previous, operation]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            previous_line,
            current_line: formatter
                .format(state.current_operand.as_deref())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous_line)?;
        write!(f, "{}", self.current_line)
    }
}
