//! Key labels and the button layout.
//!
//! A presentation layer only needs to turn a pressed key into an
//! [`Action`]; this module does that for the labels printed on the keys.

use crate::core::{Action, Digit, Operation};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading key labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("No key given")]
    Empty,
}

/// Button grid, top to bottom.
pub const LAYOUT: [&[&str]; 5] = [
    &["AC", "DEL", "÷"],
    &["1", "2", "3", "×"],
    &["4", "5", "6", "+"],
    &["7", "8", "9", "−"],
    &[".", "0", "="],
];

impl FromStr for Action {
    type Err = KeyError;

    /// Parse a key label.
    ///
    /// ```rust
    /// use keypad_calc::core::{Action, Operation};
    ///
    /// assert_eq!("AC".parse::<Action>(), Ok(Action::Clear));
    /// assert_eq!("*".parse::<Action>(), Ok(Action::ChooseOperation(Operation::Multiply)));
    /// assert!("sqrt".parse::<Action>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.is_empty() {
            return Err(KeyError::Empty);
        }

        if label.eq_ignore_ascii_case("AC") {
            return Ok(Action::Clear);
        }
        if label.eq_ignore_ascii_case("DEL") {
            return Ok(Action::DeleteDigit);
        }

        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(KeyError::UnknownKey(label.to_string()));
        };

        if c == '=' {
            return Ok(Action::Evaluate);
        }
        if let Some(digit) = Digit::new(c) {
            return Ok(Action::AddDigit(digit));
        }
        Operation::from_symbol(c)
            .map(Action::ChooseOperation)
            .ok_or_else(|| KeyError::UnknownKey(label.to_string()))
    }
}

/// Parse whitespace-separated key labels, failing on the first unknown one.
pub fn parse_keys(input: &str) -> Result<Vec<Action>, KeyError> {
    input.split_whitespace().map(str::parse).collect()
}
