//! Digit-entry keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::KeyError;

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, KeyError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(KeyError::DigitOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// What a digit-entry button appends to the display: a digit or the point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Point,
}

impl Input {
    pub const POINT: char = '.';

    /// Shorthand for `Input::Digit` that validates the range.
    ///
    /// ```rust
    /// use pocketcalc::core::Input;
    ///
    /// assert_eq!(Input::digit(7).unwrap().as_char(), '7');
    /// assert!(Input::digit(12).is_err());
    /// ```
    pub fn digit(value: u8) -> Result<Self, KeyError> {
        Digit::new(value).map(Self::Digit)
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Point => Self::POINT,
        }
    }

    pub fn is_point(self) -> bool {
        matches!(self, Self::Point)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Input {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            Self::POINT => Ok(Self::Point),
            '0'..='9' => Self::digit(c as u8 - b'0'),
            other => Err(KeyError::UnknownCharacter(other)),
        }
    }
}
