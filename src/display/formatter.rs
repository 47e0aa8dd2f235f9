//! Operand formatting for the display.

use crate::config::FormatConfig;

/// Format an operand with US English grouping.
///
/// Returns `None` when there is nothing to show.
///
/// # Example
///
/// ```rust
/// use keypad_calc::display::format_operand;
///
/// assert_eq!(format_operand(None), None);
/// assert_eq!(format_operand(Some("1234")).as_deref(), Some("1,234"));
/// assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    Formatter::default().format(operand)
}

/// Operand formatter with configurable separators.
///
/// The integer part is grouped; the fractional part is shown exactly as
/// entered, so `"0.10"` stays `"0.10"`. A trailing point with no fraction
/// digits yet is not shown.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format an operand for display. Pure; stored operands are unaffected.
    pub fn format(&self, operand: Option<&str>) -> Option<String> {
        let operand = operand.filter(|s| !s.is_empty())?;

        let (integer, fraction) = match operand.split_once('.') {
            Some((integer, fraction)) if !fraction.is_empty() => (integer, Some(fraction)),
            Some((integer, _)) => (integer, None),
            None => (operand, None),
        };

        let integer = self.group_integer(integer);
        Some(match fraction {
            Some(fraction) => format!("{integer}{}{fraction}", self.config.decimal_separator),
            None => integer,
        })
    }

    fn group_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };

        // "Infinity", "NaN" and anything else non-numeric pass through
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return integer.to_string();
        }

        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        let size = self.config.group_size.max(1);
        let head = match digits.len() % size {
            0 => size,
            n => n,
        };

        let mut grouped = String::with_capacity(sign.len() + digits.len() * 2);
        grouped.push_str(sign);
        grouped.push_str(&digits[..head.min(digits.len())]);
        let mut rest = &digits[head.min(digits.len())..];
        while !rest.is_empty() {
            grouped.push_str(&self.config.group_separator);
            grouped.push_str(&rest[..size]);
            rest = &rest[size..];
        }
        grouped
    }
}
