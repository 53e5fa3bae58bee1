//! The five calculator operators and their button symbols.

use crate::error::CalcError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operator.
///
/// Parsing accepts the button symbols `^ / x - +`, plus `X` as an alias for
/// multiplication (history files written by hand tend to contain it).
/// Display always emits the canonical lowercase symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exponentiation (`^`).
    Pow,

    /// Division (`/`).
    Div,

    /// Multiplication (`x`).
    Mul,

    /// Subtraction (`-`).
    Sub,

    /// Addition (`+`).
    Add,
}

impl Operator {
    /// All operators, in button-pad order.
    pub const ALL: [Operator; 5] = [
        Operator::Pow,
        Operator::Div,
        Operator::Mul,
        Operator::Sub,
        Operator::Add,
    ];

    /// Returns the canonical button symbol.
    pub fn symbol(self) -> char {
        match self {
            Operator::Pow => '^',
            Operator::Div => '/',
            Operator::Mul => 'x',
            Operator::Sub => '-',
            Operator::Add => '+',
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "^" => Ok(Operator::Pow),
            "/" => Ok(Operator::Div),
            "x" | "X" => Ok(Operator::Mul),
            "-" => Ok(Operator::Sub),
            "+" => Ok(Operator::Add),
            _ => Err(CalcError::UnknownOperator {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!(Operator::from_str("^").unwrap(), Operator::Pow);
        assert_eq!(Operator::from_str("/").unwrap(), Operator::Div);
        assert_eq!(Operator::from_str("x").unwrap(), Operator::Mul);
        assert_eq!(Operator::from_str("-").unwrap(), Operator::Sub);
        assert_eq!(Operator::from_str("+").unwrap(), Operator::Add);
    }

    #[test]
    fn test_every_operator_round_trips_through_its_symbol() {
        for op in Operator::ALL {
            let text = op.symbol().to_string();
            assert_eq!(text.parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_uppercase_multiplication_alias() {
        assert_eq!(Operator::from_str("X").unwrap(), Operator::Mul);
        // But display stays canonical.
        assert_eq!(Operator::Mul.to_string(), "x");
    }

    #[test]
    fn test_parse_handles_whitespace() {
        assert_eq!(Operator::from_str(" + ").unwrap(), Operator::Add);
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        assert!(Operator::from_str("*").is_err());
        assert!(Operator::from_str("").is_err());
        assert!(Operator::from_str("add").is_err());
    }
}
