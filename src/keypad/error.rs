//! Keypad layout and key script errors.

use thiserror::Error;

use crate::core::KeyError;

/// A single problem found while validating a keypad layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutViolation {
    #[error("Layout must have at least one column")]
    NoColumns,

    #[error("Label '{0}' is used by more than one button")]
    DuplicateLabel(String),

    #[error("Button '{label}' has no key and its label is not a key: {source}")]
    UnresolvedLabel { label: String, source: KeyError },

    #[error("Button '{label}' names key '{label}' but is bound to '{key}'")]
    LabelMismatch { label: String, key: String },

    #[error("Button '{label}' spans {span} columns but the layout has {columns}")]
    TooWide {
        label: String,
        span: usize,
        columns: usize,
    },

    #[error("No button is bound to key '{0}'")]
    MissingKey(String),
}

/// Errors loading a keypad layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read keypad layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid keypad layout ({} problems): {}", .0.len(), join(.0))]
    Invalid(Vec<LayoutViolation>),
}

/// An unusable character in a key script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Key script position {position}: {source}")]
pub struct ScriptError {
    pub position: usize,
    pub source: KeyError,
}

fn join(violations: &[LayoutViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
