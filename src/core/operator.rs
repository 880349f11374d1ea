//! Binary operators and the equals key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{EvaluationError, KeyError};

/// An operator button: one of the four arithmetic operators or equals.
///
/// Equals shares this type because it is pressed through the same
/// entry point as the arithmetic operators and can end up recorded as
/// the pending operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// All operator buttons in keypad order.
    pub const ALL: [Operator; 5] = [
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Equals,
    ];

    /// Symbol printed on the button.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Equals => '=',
        }
    }

    pub const fn is_equals(self) -> bool {
        matches!(self, Self::Equals)
    }

    /// Combine two operands with IEEE-754 double arithmetic.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    /// Equals is not a binary operator and fails to evaluate.
    ///
    /// ```rust
    /// use pocketcalc::core::Operator;
    ///
    /// assert_eq!(Operator::Multiply.apply(6.0, 7.0).unwrap(), 42.0);
    /// assert!(Operator::Divide.apply(1.0, 0.0).unwrap().is_infinite());
    /// assert!(Operator::Equals.apply(1.0, 2.0).is_err());
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvaluationError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => Ok(lhs / rhs),
            Self::Equals => Err(EvaluationError::NotBinary(self)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            '=' => Ok(Self::Equals),
            other => Err(KeyError::UnknownCharacter(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(KeyError::UnknownLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_follows_ieee() {
        assert_eq!(Operator::Add.apply(3.0, 4.0).unwrap(), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0).unwrap(), -1.0);
        assert_eq!(Operator::Multiply.apply(7.0, 2.0).unwrap(), 14.0);
        assert_eq!(Operator::Divide.apply(1.0, 4.0).unwrap(), 0.25);
        assert_eq!(Operator::Add.apply(0.1, 0.2).unwrap(), 0.1 + 0.2);
    }

    #[test]
    fn division_by_zero_is_a_value() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0).unwrap(), f64::INFINITY);
        assert_eq!(
            Operator::Divide.apply(-5.0, 0.0).unwrap(),
            f64::NEG_INFINITY
        );
        assert!(Operator::Divide.apply(0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn equals_does_not_evaluate() {
        let err = Operator::Equals.apply(1.0, 2.0).unwrap_err();
        assert!(matches!(err, EvaluationError::NotBinary(Operator::Equals)));
    }

    #[test]
    fn symbols_round_trip_through_char() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.symbol()).unwrap(), op);
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(matches!(
            Operator::try_from('%'),
            Err(KeyError::UnknownCharacter('%'))
        ));
        assert!(matches!(
            "++".parse::<Operator>(),
            Err(KeyError::UnknownLabel(_))
        ));
        assert!("".parse::<Operator>().is_err());
    }
}
