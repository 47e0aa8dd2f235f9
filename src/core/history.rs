//! In-memory log of dispatched actions.
//!
//! The log is diagnostic: it records what happened in a session so a host
//! can show or inspect it. It is never persisted and never replayed
//! backwards.

use super::action::Action;
use super::state::{CalculatorState, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One dispatched action together with the states around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The action that was applied
    pub action: Action,
    /// State before the action
    pub from: CalculatorState,
    /// State after the action
    pub to: CalculatorState,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Build a record stamped with the current time.
    pub fn now(action: Action, from: CalculatorState, to: CalculatorState) -> Self {
        Self {
            action,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// Whether the action produced a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered log of transitions.
///
/// [`record`](Self::record) returns a new log with the entry appended and
/// leaves the original untouched. An owner that appends on every key press
/// uses [`push`](Self::push) instead, which does not copy the log.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{
///     transition, Action, CalculatorState, Digit, Phase, TransitionLog, TransitionRecord,
/// };
///
/// let from = CalculatorState::new();
/// let action = Action::AddDigit(Digit::new('4').unwrap());
/// let to = transition(&from, &action);
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord::now(action, from, to));
///
/// assert_eq!(log.get_path(), vec![Phase::Empty, Phase::EnteringFirst]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    transitions: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(record);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, record: TransitionRecord) {
        self.transitions.push(record);
    }

    /// Phases traversed: the starting phase, then the phase after each
    /// transition. No-op transitions repeat the previous phase.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.phase());
        }
        for record in &self.transitions {
            path.push(record.to.phase());
        }
        path
    }

    /// Time between the first and last transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of transitions that changed the state.
    pub fn changed_count(&self) -> usize {
        self.transitions.iter().filter(|r| r.changed()).count()
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
