//! Pure calculator core.
//!
//! This module contains the functional core of the calculator:
//! - The immutable `CalculatorState` value and its derived `Phase`
//! - `Action`s produced by key presses
//! - The `transition` reducer and the arithmetic helper it uses
//! - An immutable transition log
//!
//! Nothing in here performs I/O or logging. The imperative shell lives in
//! [`crate::calculator`].

mod action;
mod evaluate;
mod history;
mod reducer;
mod state;

pub use action::{Action, Digit, Operation};
pub use evaluate::{evaluate_expression, number_to_string, parse_operand};
pub use history::{TransitionLog, TransitionRecord};
pub use reducer::transition;
pub use state::{CalculatorState, Phase};
