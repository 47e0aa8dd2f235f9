//! Calculator session: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns the single live state, applies actions in the order
//! they are dispatched, keeps the transition log, and is the only place
//! that logs.

use crate::core::{transition, Action, CalculatorState, TransitionLog, TransitionRecord};
use crate::display::{Display, Formatter};
use crate::keypad::KeyError;
use tracing::{debug, trace, warn};

/// A running calculator.
///
/// # Example
///
/// ```rust
/// use keypad_calc::Calculator;
///
/// let mut calc = Calculator::new();
/// for key in ["1", "2", "0", "0", "×", "3", "="] {
///     calc.dispatch_key(key).unwrap();
/// }
/// assert_eq!(calc.display().current_line, "3,600");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    formatter: Formatter,
    history: TransitionLog,
    record_history: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            state: CalculatorState::new(),
            formatter: Formatter::default(),
            history: TransitionLog::new(),
            record_history: true,
        }
    }
}

impl Calculator {
    /// Create a calculator with an empty display and default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop recording transitions; [`history`](Self::history) stays empty.
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self.history = TransitionLog::new();
        self
    }

    /// Create a calculator that renders with `formatter`.
    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            formatter,
            ..Self::default()
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Transition log for this session (pure)
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    /// Render the current state (pure)
    pub fn display(&self) -> Display {
        Display::from_state(&self.state, &self.formatter)
    }

    /// Apply one action and record it.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let from = self.state.clone();
        let to = transition(&from, &action);
        let record = TransitionRecord::now(action, from, to);

        if record.changed() {
            let (before, after) = (record.from.phase(), record.to.phase());
            debug!(
                action = action.kind(),
                key = %action,
                from = before.name(),
                to = after.name(),
                "applied action"
            );
            if after.is_error() {
                warn!(key = %action, "result could not be computed");
            }
        } else {
            trace!(action = action.kind(), key = %action, "action had no effect");
        }

        if self.record_history {
            self.state = record.to.clone();
            self.history.push(record);
        } else {
            self.state = record.to;
        }
        &self.state
    }

    /// Apply actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Parse a key label and apply it.
    ///
    /// An unknown label leaves the state untouched and is not recorded.
    pub fn dispatch_key(&mut self, label: &str) -> Result<&CalculatorState, KeyError> {
        let action = label.parse::<Action>().map_err(|e| {
            debug!(key = label, error = %e, "rejected key");
            e
        })?;
        Ok(self.dispatch(action))
    }

    /// Clear the display and forget the session log.
    pub fn reset(&mut self) {
        debug!(transitions = self.history.len(), "resetting calculator");
        self.state = CalculatorState::new();
        self.history = TransitionLog::new();
    }
}
