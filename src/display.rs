//! Display helpers: input-width estimation and button metadata.
//!
//! Layout support only; nothing here affects calculation results.

/// Width of one rendered character, in layout units.
pub const CHAR_WIDTH: f64 = 14.0;

/// How much narrower a `.` glyph renders than a digit.
pub const DOT_WIDTH_DISCOUNT: f64 = 8.0;

/// Extra width reserved for the minus sign on negative values.
pub const SIGN_EXTRA_WIDTH: f64 = 6.0;

/// Tooltip metadata for one calculator button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    /// Human-readable tooltip; empty for unmapped keys.
    pub title: String,

    /// The key itself, echoed back for the button label.
    pub value: String,
}

/// Estimates the rendered width of an input value.
///
/// One base unit per character, a discount for the narrower `.` glyph, and
/// a fixed addend for the minus sign on negative values.
pub fn input_width(value: &str) -> f64 {
    let chars = value.chars().count() as f64;
    let dots = value.matches('.').count() as f64;

    let mut width = chars * CHAR_WIDTH - dots * DOT_WIDTH_DISCOUNT;
    if value.starts_with('-') {
        width += SIGN_EXTRA_WIDTH;
    }
    width
}

/// Maps a button key to its tooltip metadata.
///
/// Unmapped keys come back with an empty title and the key echoed as the
/// value.
pub fn button_info(key: &str) -> ButtonInfo {
    let title = match key {
        "=" => "Calculate result".to_string(),
        "C" => "Clear input".to_string(),
        "\u{21b9}" => "Switch active value".to_string(),
        "+" => "Add".to_string(),
        "-" => "Subtract".to_string(),
        "x" => "Multiply".to_string(),
        "/" => "Divide".to_string(),
        "^" => "Raise to a power".to_string(),
        "." => "Decimal separator".to_string(),
        digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
            format!("Number {}", digit)
        }
        _ => String::new(),
    };

    ButtonInfo {
        title,
        value: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_tooltip() {
        let button = button_info("=");
        assert_eq!(button.title, "Calculate result");
        assert_eq!(button.value, "=");
    }

    #[test]
    fn test_digit_tooltips() {
        assert_eq!(button_info("0").title, "Number 0");
        assert_eq!(button_info("7").title, "Number 7");
    }

    #[test]
    fn test_operator_and_control_tooltips() {
        assert_eq!(button_info("x").title, "Multiply");
        assert_eq!(button_info("C").title, "Clear input");
        assert_eq!(button_info("↹").title, "Switch active value");
    }

    #[test]
    fn test_unmapped_key_has_empty_title() {
        let button = button_info("%");
        assert_eq!(button.title, "");
        assert_eq!(button.value, "%");
    }

    #[test]
    fn test_input_width_scales_with_length() {
        assert_eq!(input_width("1"), CHAR_WIDTH);
        assert_eq!(input_width("12"), 2.0 * CHAR_WIDTH);
    }

    #[test]
    fn test_input_width_discounts_decimal_point() {
        assert_eq!(input_width("1.5"), 3.0 * CHAR_WIDTH - DOT_WIDTH_DISCOUNT);
    }

    #[test]
    fn test_input_width_pads_negative_values() {
        assert_eq!(input_width("-12"), 3.0 * CHAR_WIDTH + SIGN_EXTRA_WIDTH);
    }
}
