//! Build errors for the session builder.

use thiserror::Error;

use crate::keypad::LayoutError;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Keypad layout rejected: {0}")]
    Layout(#[from] LayoutError),

    #[error("Initial state has {found} decimal points in its display. Enter at most one")]
    MalformedDisplay { found: usize },
}
