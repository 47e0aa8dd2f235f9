//! Calculator state value.
//!
//! A [`CalculatorState`] is an immutable snapshot. Transitions never edit a
//! state in place; they build the next one and the host swaps it in.

use super::action::Operation;
use serde::{Deserialize, Serialize};

/// Snapshot of everything the calculator remembers.
///
/// Operands are kept as strings so in-progress entries such as `"3."` or a
/// lone `"-"` left behind by deleting digits survive until they are parsed
/// during evaluation.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::default();
/// assert_eq!(state.phase(), Phase::Empty);
/// assert!(state.current_operand.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Operand being typed, or the last result.
    #[serde(default)]
    pub current_operand: Option<String>,

    /// Operand staged when an operation was chosen.
    #[serde(default)]
    pub previous_operand: Option<String>,

    /// Pending operation.
    #[serde(default)]
    pub operation: Option<Operation>,

    /// When set, the next digit replaces `current_operand`.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state shown after `AC`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current operand, with `Some("")` folded into `None`.
    pub fn current(&self) -> Option<&str> {
        non_empty(&self.current_operand)
    }

    /// Previous operand, with `Some("")` folded into `None`.
    pub fn previous(&self) -> Option<&str> {
        non_empty(&self.previous_operand)
    }

    /// Classify the state for diagnostics.
    pub fn phase(&self) -> Phase {
        match (self.previous(), self.operation, self.current()) {
            _ if self.current_operand.as_deref() == Some("") => Phase::Invalid,
            (None, None, None) => Phase::Empty,
            (_, Some(_), Some(_)) => Phase::EnteringSecond,
            (_, Some(_), None) => Phase::OperatorChosen,
            (_, None, Some(_)) if self.overwrite => Phase::ShowingResult,
            _ => Phase::EnteringFirst,
        }
    }
}

fn non_empty(operand: &Option<String>) -> Option<&str> {
    operand.as_deref().filter(|s| !s.is_empty())
}

/// Coarse position of a state in the entry cycle.
///
/// Derived on demand from a [`CalculatorState`]; used for logging and the
/// transition log path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered.
    Empty,
    /// Typing the first operand.
    EnteringFirst,
    /// First operand staged, waiting for the second.
    OperatorChosen,
    /// Typing the second operand.
    EnteringSecond,
    /// A result is on screen; the next digit starts over.
    ShowingResult,
    /// The last evaluation could not parse its operands.
    Invalid,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorChosen => "OperatorChosen",
            Self::EnteringSecond => "EnteringSecond",
            Self::ShowingResult => "ShowingResult",
            Self::Invalid => "Invalid",
        }
    }

    /// Whether the display is blank because a result could not be computed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}
