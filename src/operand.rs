//! Validated decimal operand text.
//!
//! Operands are kept as the text the user typed so that in-progress entry
//! states like `0.50` or `1.` survive round trips through the display and
//! the history file. Validation happens once at construction.

use crate::error::CalcError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A decimal number held as validated text.
///
/// Construction guarantees the text is decimal notation (optional leading
/// sign, at most one `.`, optional exponent suffix) and parses to a finite
/// `f64`. The source text is preserved verbatim, so `"0.50"` stays
/// `"0.50"`. Exponent notation is accepted because the engine emits it for
/// precision-trimmed large results and those must re-enter the history.
///
/// # Examples
///
/// ```
/// use calc_engine::Operand;
///
/// let operand: Operand = "0.50".parse().unwrap();
/// assert_eq!(operand.as_str(), "0.50");
/// assert_eq!(operand.value(), 0.5);
/// assert_eq!(operand.fraction_digits(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    text: String,
    value: f64,
}

impl Operand {
    /// Returns the operand's source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the operand's numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the number of digits after the decimal point in the
    /// mantissa, or 0 if there is no decimal point.
    pub fn fraction_digits(&self) -> u32 {
        let mantissa_end = self
            .text
            .find(|c| c == 'e' || c == 'E')
            .unwrap_or(self.text.len());
        match self.text[..mantissa_end].find('.') {
            Some(idx) => (mantissa_end - idx - 1) as u32,
            None => 0,
        }
    }

    /// Returns `true` if the operand is written with a leading minus sign.
    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }
}

impl FromStr for Operand {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CalcError::InvalidOperand {
            input: s.to_string(),
        };

        let (mantissa, exponent) = match trimmed.find(|c| c == 'e' || c == 'E') {
            Some(idx) => (&trimmed[..idx], Some(&trimmed[idx + 1..])),
            None => (trimmed, None),
        };

        let body = mantissa
            .strip_prefix('-')
            .or_else(|| mantissa.strip_prefix('+'))
            .unwrap_or(mantissa);

        let mut digits = 0usize;
        let mut dots = 0usize;
        for c in body.chars() {
            match c {
                '.' => dots += 1,
                d if d.is_ascii_digit() => digits += 1,
                _ => return Err(invalid()),
            }
        }
        if digits == 0 || dots > 1 {
            return Err(invalid());
        }

        if let Some(exp) = exponent {
            let exp_body = exp
                .strip_prefix('-')
                .or_else(|| exp.strip_prefix('+'))
                .unwrap_or(exp);
            if exp_body.is_empty() || !exp_body.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
        }

        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        // A long enough digit string still overflows to infinity.
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(Operand {
            text: trimmed.to_string(),
            value,
        })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Operand::from_str(&s).map_err(serde::de::Error::custom)
    }
}
