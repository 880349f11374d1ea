//! Session errors.

use thiserror::Error;

use crate::core::KeyError;
use crate::keypad::ScriptError;

/// Errors feeding input into a session. No key is applied when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("Key script has {} invalid characters", .0.len())]
    Script(Vec<ScriptError>),
}
