//! The calculator transition function.

use super::action::{Action, Digit, Operation};
use super::evaluate::evaluate_expression;
use super::state::CalculatorState;

/// Apply `action` to `state`, returning the next state.
///
/// This is a pure function: it never mutates its input, never fails, and
/// returns an equal state for actions that make no sense in the current
/// state (evaluating without a pending operation, deleting from an empty
/// display, and so on).
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{transition, Action, CalculatorState, Digit, Operation};
///
/// let digit = |c| Action::AddDigit(Digit::new(c).unwrap());
///
/// let state = CalculatorState::new();
/// let state = transition(&state, &digit('5'));
/// let state = transition(&state, &Action::ChooseOperation(Operation::Add));
/// let state = transition(&state, &digit('3'));
/// let state = transition(&state, &Action::Evaluate);
///
/// assert_eq!(state.current_operand.as_deref(), Some("8"));
/// assert!(state.overwrite);
/// ```
pub fn transition(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::new(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");

    if digit == Digit::ZERO && current == "0" {
        return state.clone();
    }

    if digit.is_point() && current.contains('.') {
        return state.clone();
    }

    // "0" followed by 1-9 drops the redundant zero
    let unsigned = current.strip_prefix('-').unwrap_or(current);
    let next = if unsigned == "0" && !digit.is_point() {
        format!("{}{}", &current[..current.len() - 1], digit)
    } else {
        format!("{current}{digit}")
    };

    CalculatorState {
        current_operand: Some(next),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (state.previous(), state.current()) {
        (None, None) => state.clone(),
        (Some(_), None) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },
        (None, Some(current)) => CalculatorState {
            previous_operand: Some(current.to_string()),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },
        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(evaluate_expression(state)),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },
    }
}

fn evaluate(state: &CalculatorState) -> CalculatorState {
    if state.current().is_none() || state.previous().is_none() || state.operation.is_none() {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate_expression(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Action {
        Action::AddDigit(Digit::new(c).unwrap())
    }

    fn run(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::new(), |state, action| {
                transition(&state, action)
            })
    }

    fn with_current(current: &str) -> CalculatorState {
        CalculatorState {
            current_operand: Some(current.to_string()),
            ..CalculatorState::new()
        }
    }

    #[test]
    fn digits_append() {
        let state = run(&[digit('1'), digit('2'), digit('.'), digit('5')]);
        assert_eq!(state.current_operand.as_deref(), Some("12.5"));
    }

    #[test]
    fn repeated_zero_is_ignored() {
        let state = with_current("0");
        assert_eq!(transition(&state, &digit('0')), state);
    }

    #[test]
    fn leading_zero_is_replaced() {
        let state = transition(&with_current("0"), &digit('7'));
        assert_eq!(state.current_operand.as_deref(), Some("7"));

        let state = transition(&with_current("-0"), &digit('7'));
        assert_eq!(state.current_operand.as_deref(), Some("-7"));

        let state = transition(&with_current("0"), &digit('.'));
        assert_eq!(state.current_operand.as_deref(), Some("0."));
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let state = with_current("3.1");
        assert_eq!(transition(&state, &digit('.')), state);
    }

    #[test]
    fn decimal_point_on_empty_display_starts_entry() {
        let state = run(&[digit('.'), digit('5')]);
        assert_eq!(state.current_operand.as_deref(), Some(".5"));
    }

    #[test]
    fn overwrite_replaces_result() {
        let result = run(&[
            digit('5'),
            Action::ChooseOperation(Operation::Add),
            digit('3'),
            Action::Evaluate,
        ]);
        assert!(result.overwrite);

        let next = transition(&result, &digit('9'));
        assert_eq!(next.current_operand.as_deref(), Some("9"));
        assert!(!next.overwrite);
    }

    #[test]
    fn choose_operation_on_empty_state_is_noop() {
        let state = CalculatorState::new();
        assert_eq!(
            transition(&state, &Action::ChooseOperation(Operation::Add)),
            state
        );
    }

    #[test]
    fn choose_operation_stages_current_operand() {
        let state = run(&[digit('5'), Action::ChooseOperation(Operation::Add)]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Add));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn choose_operation_again_replaces_operator() {
        let state = run(&[
            digit('5'),
            Action::ChooseOperation(Operation::Add),
            Action::ChooseOperation(Operation::Multiply),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Multiply));
    }

    #[test]
    fn chained_operations_evaluate_left_to_right() {
        // 2 + 3 × 4 = 20 without precedence
        let state = run(&[
            digit('2'),
            Action::ChooseOperation(Operation::Add),
            digit('3'),
            Action::ChooseOperation(Operation::Multiply),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current_operand, None);

        let state = run(&[
            digit('2'),
            Action::ChooseOperation(Operation::Add),
            digit('3'),
            Action::ChooseOperation(Operation::Multiply),
            digit('4'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("20"));
    }

    #[test]
    fn clear_resets_everything() {
        let state = run(&[
            digit('5'),
            Action::ChooseOperation(Operation::Add),
            digit('3'),
            Action::Clear,
        ]);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn evaluate_without_operands_is_noop() {
        let state = run(&[digit('5'), Action::ChooseOperation(Operation::Add)]);
        assert_eq!(transition(&state, &Action::Evaluate), state);

        let state = with_current("5");
        assert_eq!(transition(&state, &Action::Evaluate), state);
    }

    #[test]
    fn evaluate_twice_is_noop() {
        let once = run(&[
            digit('6'),
            Action::ChooseOperation(Operation::Divide),
            digit('3'),
            Action::Evaluate,
        ]);
        assert_eq!(once.current_operand.as_deref(), Some("2"));
        assert_eq!(transition(&once, &Action::Evaluate), once);
    }

    #[test]
    fn invalid_operand_evaluates_to_blank() {
        let state = CalculatorState {
            previous_operand: Some("abc".to_string()),
            operation: Some(Operation::Add),
            current_operand: Some("3".to_string()),
            overwrite: false,
        };
        let next = transition(&state, &Action::Evaluate);
        assert_eq!(next.current_operand.as_deref(), Some(""));
        assert_eq!(next.previous_operand, None);
        assert_eq!(next.operation, None);
        assert!(next.overwrite);
    }

    #[test]
    fn blank_result_cannot_be_staged() {
        let state = CalculatorState {
            current_operand: Some(String::new()),
            ..CalculatorState::new()
        };
        assert_eq!(
            transition(&state, &Action::ChooseOperation(Operation::Add)),
            state
        );
    }

    #[test]
    fn delete_after_result_clears_display() {
        let result = run(&[
            digit('5'),
            Action::ChooseOperation(Operation::Add),
            digit('3'),
            Action::Evaluate,
        ]);
        let next = transition(&result, &Action::DeleteDigit);
        assert_eq!(next.current_operand, None);
        assert!(!next.overwrite);
    }

    #[test]
    fn delete_drops_last_character() {
        let state = transition(&with_current("123"), &Action::DeleteDigit);
        assert_eq!(state.current_operand.as_deref(), Some("12"));

        let state = transition(&with_current("7"), &Action::DeleteDigit);
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn delete_on_empty_display_is_noop() {
        let state = CalculatorState::new();
        assert_eq!(transition(&state, &Action::DeleteDigit), state);
    }

    #[test]
    fn delete_keeps_staged_operation() {
        let state = run(&[
            digit('5'),
            Action::ChooseOperation(Operation::Subtract),
            digit('4'),
            digit('2'),
            Action::DeleteDigit,
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Subtract));
        assert_eq!(state.current_operand.as_deref(), Some("4"));
    }

    #[test]
    fn input_state_is_untouched() {
        let before = with_current("12");
        let snapshot = before.clone();
        let _ = transition(&before, &digit('3'));
        let _ = transition(&before, &Action::Clear);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn end_to_end_addition() {
        let s0 = CalculatorState::new();
        let s1 = transition(&s0, &digit('5'));
        assert_eq!(s1, with_current("5"));

        let s2 = transition(&s1, &Action::ChooseOperation(Operation::Add));
        assert_eq!(
            s2,
            CalculatorState {
                previous_operand: Some("5".to_string()),
                operation: Some(Operation::Add),
                current_operand: None,
                overwrite: false,
            }
        );

        let s3 = transition(&s2, &digit('3'));
        assert_eq!(s3.current_operand.as_deref(), Some("3"));

        let s4 = transition(&s3, &Action::Evaluate);
        assert_eq!(
            s4,
            CalculatorState {
                current_operand: Some("8".to_string()),
                previous_operand: None,
                operation: None,
                overwrite: true,
            }
        );
    }
}
