//! Actions dispatched into the calculator state machine.
//!
//! Actions are ephemeral values: a presentation layer builds one per key
//! press and hands it straight to [`transition`](super::transition).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key of the digit pad: `'0'..='9'` or the decimal point.
///
/// The character is validated on construction, so a `Digit` can always be
/// appended to an operand.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Digit;
///
/// assert!(Digit::new('7').is_some());
/// assert!(Digit::new('.').is_some());
/// assert!(Digit::new('a').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point key.
    pub const POINT: Digit = Digit('.');
    /// The zero key.
    pub const ZERO: Digit = Digit('0');

    /// Create a digit, returning `None` for anything but `0-9` and `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Digit(c))
    }

    /// The key's character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Whether this is the decimal point key.
    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::new(c).ok_or_else(|| format!("'{c}' is not a digit or decimal point"))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown on the keypad and in the display.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Look up an operation by its display symbol or an ASCII alias
    /// (`-`, `*`, `x`, `/`).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '−' | '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operation with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than failing.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Everything a user can do to the calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "add-digit",
            Self::ChooseOperation(_) => "choose-operation",
            Self::Clear => "clear",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(digit) => write!(f, "{digit}"),
            Self::ChooseOperation(op) => write!(f, "{op}"),
            Self::Clear => f.write_str("AC"),
            Self::DeleteDigit => f.write_str("DEL"),
            Self::Evaluate => f.write_str("="),
        }
    }
}
