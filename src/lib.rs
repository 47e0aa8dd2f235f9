//! Keypad Calc: a pure functional pocket calculator
//!
//! The calculator follows a "pure core, imperative shell" layout. The core
//! is a reducer: every key press becomes an [`Action`], and
//! [`transition`](core::transition) maps the current
//! [`CalculatorState`](core::CalculatorState) and that action to the next
//! state without side effects. The [`Calculator`] shell owns the live state,
//! logs, and keeps a transition log.
//!
//! # Core Concepts
//!
//! - **State**: immutable snapshot of the operands, pending operation and
//!   overwrite flag
//! - **Actions**: digit entry, operation choice, clear, delete, evaluate
//! - **Display**: two formatted lines built from a state
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::{transition, Action, CalculatorState, Digit, Operation};
//! use keypad_calc::display::format_operand;
//!
//! let state = CalculatorState::new();
//! let state = transition(&state, &Action::AddDigit(Digit::new('6').unwrap()));
//! let state = transition(&state, &Action::ChooseOperation(Operation::Divide));
//! let state = transition(&state, &Action::AddDigit(Digit::new('3').unwrap()));
//! let state = transition(&state, &Action::Evaluate);
//!
//! assert_eq!(format_operand(state.current_operand.as_deref()).as_deref(), Some("2"));
//! ```

pub mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod keypad;

// Re-export commonly used types
pub use calculator::Calculator;
pub use config::{ConfigError, FormatConfig};
pub use crate::core::{Action, CalculatorState, Operation};
pub use keypad::KeyError;
