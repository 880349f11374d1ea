//! Keypad layout: the grid of buttons handed to the presentation layer.
//!
//! Buttons flow left to right and wrap onto a new row when the next one does
//! not fit, so a layout is just a column count and an ordered button list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use super::error::{LayoutError, LayoutViolation};
use super::key::Key;
use crate::core::{Input, KeyError, Operator};

/// Horizontal span of a button, in grid columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonWidth {
    #[default]
    Single,
    Double,
    Triple,
}

impl ButtonWidth {
    pub fn span(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// One button: what it shows, how it is styled and what it does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub label: String,
    #[serde(default)]
    pub width: ButtonWidth,
    /// Styled as an operator button.
    #[serde(default)]
    pub operator: bool,
    /// Bound key; when absent the label itself names the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
}

impl ButtonSpec {
    pub fn new(key: Key) -> Self {
        Self {
            label: key.label(),
            width: ButtonWidth::Single,
            operator: key.is_operator(),
            key: None,
        }
    }

    pub fn width(mut self, width: ButtonWidth) -> Self {
        self.width = width;
        self
    }

    /// Show `label` instead of the key's own label.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        let key = self.key();
        self.label = label.into();
        self.key = key.ok();
        self
    }

    /// The key this button triggers.
    pub fn key(&self) -> Result<Key, KeyError> {
        match self.key {
            Some(key) => Ok(key),
            None => self.label.parse(),
        }
    }
}

/// Column count plus buttons in reading order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeypadLayout {
    pub columns: usize,
    pub buttons: Vec<ButtonSpec>,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeypadLayout {
    /// The classic four-column pocket calculator grid.
    ///
    /// ```text
    /// [    AC     ] [/]
    /// [7] [8] [9]   [*]
    /// [4] [5] [6]   [-]
    /// [1] [2] [3]   [+]
    /// [  0  ] [.]   [=]
    /// ```
    pub fn standard() -> Self {
        let digit = |n: u8| Input::digit(n).map(Key::Input);
        let mut buttons = vec![
            ButtonSpec::new(Key::Clear).width(ButtonWidth::Triple),
            ButtonSpec::new(Key::Operator(Operator::Divide)),
        ];

        let rows = [
            ([7, 8, 9], Operator::Multiply),
            ([4, 5, 6], Operator::Subtract),
            ([1, 2, 3], Operator::Add),
        ];
        for (digits, op) in rows {
            buttons.extend(
                digits
                    .into_iter()
                    .filter_map(|n| digit(n).ok())
                    .map(ButtonSpec::new),
            );
            buttons.push(ButtonSpec::new(Key::Operator(op)));
        }

        if let Ok(zero) = digit(0) {
            buttons.push(ButtonSpec::new(zero).width(ButtonWidth::Double));
        }
        buttons.push(ButtonSpec::new(Key::Input(Input::Point)));
        buttons.push(ButtonSpec::new(Key::Operator(Operator::Equals)));

        Self {
            columns: 4,
            buttons,
        }
    }

    /// Read a layout from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.check()?;
        Ok(layout)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find the key behind a button label.
    pub fn resolve(&self, label: &str) -> Result<Key, KeyError> {
        self.buttons
            .iter()
            .find(|b| b.label == label)
            .ok_or_else(|| KeyError::UnknownLabel(label.to_string()))?
            .key()
    }

    /// Buttons grouped into rows by wrapping at the column count.
    pub fn rows(&self) -> Vec<Vec<&ButtonSpec>> {
        let mut rows: Vec<Vec<&ButtonSpec>> = Vec::new();
        let mut used = 0;
        for button in &self.buttons {
            let span = button.width.span();
            if rows.is_empty() || used + span > self.columns {
                rows.push(Vec::new());
                used = 0;
            }
            if let Some(row) = rows.last_mut() {
                row.push(button);
            }
            used += span;
        }
        rows
    }

    /// Check the layout, collecting every problem rather than the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<LayoutViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LayoutViolation>>> = Vec::new();

        if self.columns == 0 {
            checks.push(Validation::fail(LayoutViolation::NoColumns));
        }

        let mut labels = HashSet::new();
        let mut bound = HashSet::new();
        for button in &self.buttons {
            if !labels.insert(button.label.as_str()) {
                checks.push(Validation::fail(LayoutViolation::DuplicateLabel(
                    button.label.clone(),
                )));
            }

            match button.key() {
                Ok(key) => {
                    bound.insert(key);
                }
                Err(source) => checks.push(Validation::fail(LayoutViolation::UnresolvedLabel {
                    label: button.label.clone(),
                    source,
                })),
            }

            if let (Some(key), Ok(named)) = (button.key, button.label.parse::<Key>()) {
                if named != key {
                    checks.push(Validation::fail(LayoutViolation::LabelMismatch {
                        label: button.label.clone(),
                        key: key.label(),
                    }));
                }
            }

            let span = button.width.span();
            if self.columns > 0 && span > self.columns {
                checks.push(Validation::fail(LayoutViolation::TooWide {
                    label: button.label.clone(),
                    span,
                    columns: self.columns,
                }));
            }
        }

        for key in Key::all() {
            if !bound.contains(&key) {
                checks.push(Validation::fail(LayoutViolation::MissingKey(key.label())));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), LayoutError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(LayoutError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Label of the clear button, if the layout has one.
    pub fn clear_label(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| matches!(b.key(), Ok(Key::Clear)))
            .map(|b| b.label.as_str())
    }
}
