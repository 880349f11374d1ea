//! What a button does when pressed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{Input, KeyError, Operator};

/// Label of the all-clear button.
pub const CLEAR_LABEL: &str = "AC";
/// Character standing for all-clear in key scripts.
pub const CLEAR_CHAR: char = 'C';

/// The action bound to a keypad button.
///
/// Keys serialize as their label (`"7"`, `"."`, `"+"`, `"AC"`), which is
/// also how they are written in keypad layout files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Input(Input),
    Operator(Operator),
    Clear,
}

impl Key {
    /// Every key a complete keypad must offer.
    pub fn all() -> Vec<Key> {
        let mut keys: Vec<Key> = (0..=9u8)
            .filter_map(|n| Input::digit(n).ok())
            .map(Key::Input)
            .collect();
        keys.push(Key::Input(Input::Point));
        keys.extend(Operator::ALL.into_iter().map(Key::Operator));
        keys.push(Key::Clear);
        keys
    }

    pub fn label(&self) -> String {
        match self {
            Self::Input(input) => input.to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Clear => CLEAR_LABEL.to_string(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Input> for Key {
    fn from(input: Input) -> Self {
        Self::Input(input)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Single-character key script notation: digits, `.`, operators and `C`.
impl TryFrom<char> for Key {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.eq_ignore_ascii_case(&CLEAR_CHAR) {
            return Ok(Self::Clear);
        }
        Input::try_from(c)
            .map(Self::Input)
            .or_else(|_| Operator::try_from(c).map(Self::Operator))
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label == CLEAR_LABEL {
            return Ok(Self::Clear);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != CLEAR_CHAR && c != 'c' => Self::try_from(c),
            _ => Err(KeyError::UnknownLabel(label.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = KeyError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.label()
    }
}
