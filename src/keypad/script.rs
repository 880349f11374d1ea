//! Compact text form of a key sequence, e.g. `"12.5*4="` or `"9/0=C"`.
//!
//! Whitespace is ignored. Every bad character is reported, not just the first.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use super::error::ScriptError;
use super::key::{Key, CLEAR_CHAR};

/// Parse a key script, accumulating an error for each unusable character.
///
/// ```rust
/// use pocketcalc::keypad::{parse_keys, Key};
/// use pocketcalc::core::Operator;
/// use stillwater::validation::Validation;
///
/// match parse_keys("3 + 4 =") {
///     Validation::Success(keys) => {
///         assert_eq!(keys.len(), 4);
///         assert_eq!(keys[1], Key::Operator(Operator::Add));
///     }
///     Validation::Failure(_) => panic!("script should parse"),
/// }
/// ```
pub fn parse_keys(script: &str) -> Validation<Vec<Key>, NonEmptyVec<ScriptError>> {
    let keys: Vec<Validation<Key, NonEmptyVec<ScriptError>>> = script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| match Key::try_from(c) {
            Ok(key) => Validation::success(key),
            Err(source) => Validation::fail(ScriptError { position, source }),
        })
        .collect();

    Validation::all_vec(keys)
}

/// Render keys back into script form.
pub fn to_script(keys: &[Key]) -> String {
    keys.iter()
        .map(|key| match key {
            Key::Clear => CLEAR_CHAR.to_string(),
            other => other.label(),
        })
        .collect()
}
