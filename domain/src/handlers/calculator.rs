//! Calculator handler

use super::expression::evaluate;
use crate::util::strip_keyword;

/// Returned for anything the evaluator rejects
pub const CALCULATION_FAILED: &str = "⚠️ Could not calculate that.";

/// Strip the word "calculate", evaluate what is left and format the result.
pub fn calculate(text: &str) -> String {
    let expression = strip_keyword(text, "calculate", usize::MAX);
    match evaluate(expression.trim()) {
        Ok(value) => format!("🧮 Result: {}", format_number(value)),
        Err(_) => CALCULATION_FAILED.to_string(),
    }
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
