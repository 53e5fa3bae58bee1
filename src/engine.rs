//! Core arithmetic engine and keypress gating.
//!
//! Operands are scaled to integers before the operator is applied so that
//! short decimals combine exactly (`0.1 + 0.2` is `0.3`, not
//! `0.30000000000000004`). Division is the exception: the common scale
//! cancels, so the plain float quotient is returned and its rounding
//! artifacts show through on purpose.

use crate::operand::Operand;
use crate::operator::Operator;

/// Default display cap for operand and result text, in characters.
///
/// Callers with a different display width pass their own `max_input_length`;
/// the engine itself holds no global state.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 15;

/// How many characters of headroom the precision cut leaves below the
/// length cap. A trimmed result keeps `max_input_length - 5` significant
/// digits.
const PRECISION_HEADROOM: usize = 5;

/// Computes `value1 <action> value2` and formats the result for display.
///
/// Never panics and never errors: division by zero and invalid operations
/// propagate as `Infinity` / `NaN` text per IEEE-754 semantics. Results
/// longer than `max_input_length` characters are re-rendered with reduced
/// precision.
///
/// # Examples
///
/// ```
/// use calc_engine::{calculate_result, Operand, Operator};
///
/// let a: Operand = "0.1".parse().unwrap();
/// let b: Operand = "0.2".parse().unwrap();
/// assert_eq!(calculate_result(&a, &b, Operator::Add, 15), "0.3");
/// ```
pub fn calculate_result(
    value1: &Operand,
    value2: &Operand,
    action: Operator,
    max_input_length: usize,
) -> String {
    let value = apply_scaled(value1, value2, action);
    format_result(value, max_input_length)
}

/// Evaluates raw operand and operator text, the shape keypad input arrives in.
///
/// Returns `None` when either operand is missing or unparseable (absent
/// upstream input). An unknown or empty `action` yields `"0"`.
pub fn evaluate(
    value1: &str,
    value2: &str,
    action: &str,
    max_input_length: usize,
) -> Option<String> {
    let value1: Operand = value1.parse().ok()?;
    let value2: Operand = value2.parse().ok()?;

    match action.parse::<Operator>() {
        Ok(op) => Some(calculate_result(&value1, &value2, op, max_input_length)),
        Err(_) => Some("0".to_string()),
    }
}

/// Applies the operator over integer-scaled operands.
fn apply_scaled(value1: &Operand, value2: &Operand, action: Operator) -> f64 {
    let a = value1.value();
    let b = value2.value();
    let scale = 10f64.powi(value1.fraction_digits().max(value2.fraction_digits()) as i32);

    match action {
        Operator::Add => ((a * scale).floor() + (b * scale).floor()) / scale,
        Operator::Sub => ((a * scale).floor() - (b * scale).floor()) / scale,
        Operator::Mul => ((a * scale).floor() * (b * scale).floor()) / (scale * scale),
        // The common scale cancels in the quotient, so no rescale.
        Operator::Div => (a * scale).floor() / (b * scale).floor(),
        // Only the base is scaled; the exponent is applied as typed.
        Operator::Pow => {
            let base_scale = 10f64.powi(value1.fraction_digits() as i32);
            (a * base_scale).floor().powf(b) / base_scale.powf(b)
        }
    }
}

/// Renders a computed value as display text, trimming precision when the
/// plain decimal form exceeds `max_input_length` characters.
fn format_result(value: f64, max_input_length: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let plain = format!("{}", value);
    if plain.len() <= max_input_length {
        return plain;
    }

    let digits = max_input_length.saturating_sub(PRECISION_HEADROOM).max(1);
    to_precision(value, digits)
}

/// Formats `value` with the given number of significant digits: fixed
/// notation with trailing zeros kept, or exponent notation when the
/// magnitude outruns the requested digits.
fn to_precision(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent >= digits as i32 || exponent < -7 {
        return format!("{:.*e}", digits - 1, value);
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

/// Returns `true` if a keypress on the active operand should be discarded.
///
/// The four conditions are independent; any one of them vetoes the key:
/// a redundant leading zero, a second decimal point, `=` on an already
/// finished calculation, or any entry key once the operand is at the
/// length cap. The first two only apply while no result is pending,
/// because accepting the key then starts a fresh operand instead.
pub fn should_ignore_button_input(
    key: &str,
    current_value: &str,
    result: &str,
    max_input_length: usize,
) -> bool {
    let no_pending_result = result.is_empty();

    if key == "0" && current_value == "0" && no_pending_result {
        return true;
    }
    if key == "." && current_value.contains('.') && no_pending_result {
        return true;
    }
    if key == "=" && !no_pending_result {
        return true;
    }
    if is_entry_key(key) && current_value.len() >= max_input_length {
        return true;
    }

    false
}

/// Keys that extend the operand text: a single digit or the decimal point.
fn is_entry_key(key: &str) -> bool {
    key == "." || (key.len() == 1 && key.as_bytes()[0].is_ascii_digit())
}
