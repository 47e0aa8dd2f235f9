//! Arithmetic on the staged operands.

use super::state::CalculatorState;

/// Evaluate `previous <operation> current`.
///
/// Returns an empty string when either operand does not parse as a number
/// or no operation is pending. Division by zero is not an error: it yields
/// `"Infinity"`, `"-Infinity"` or `"NaN"`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{evaluate_expression, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     previous_operand: Some("6".into()),
///     current_operand: Some("3".into()),
///     operation: Some(Operation::Divide),
///     overwrite: false,
/// };
/// assert_eq!(evaluate_expression(&state), "2");
/// ```
pub fn evaluate_expression(state: &CalculatorState) -> String {
    let (Some(previous), Some(current), Some(operation)) = (
        state.previous_operand.as_deref().and_then(parse_operand),
        state.current_operand.as_deref().and_then(parse_operand),
        state.operation,
    ) else {
        return String::new();
    };

    number_to_string(operation.apply(previous, current))
}

/// Parse an operand the way a pocket calculator reads its display.
///
/// Accepts a trailing decimal point (`"3."`), a bare fraction (`".5"`) and
/// the non-finite renderings produced by [`number_to_string`].
pub fn parse_operand(operand: &str) -> Option<f64> {
    let trimmed = operand.trim();
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }

    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.chars().any(|c| c.is_ascii_digit())
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }

    trimmed.parse().ok()
}

/// Canonical decimal rendering of a result.
///
/// Finite values use the shortest representation that round-trips, never
/// exponent notation.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0 displays as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
