//! Phase change history.
//!
//! Each record notes which key press moved the calculator from one phase to
//! another and when. Records are appended in press order.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One phase change.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::EnteringFirstOperand,
///     to: Phase::EnteringSecondOperand,
///     timestamp: Utc::now(),
///     press: 2,
/// };
/// assert_eq!(transition.press, 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Phase before the key press
    pub from: S,
    /// Phase after the key press
    pub to: S,
    /// When the key was pressed
    pub timestamp: DateTime<Utc>,
    /// 1-based number of the key press within the session
    pub press: usize,
}

/// Ordered record of phase changes.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::EnteringFirstOperand,
///         to: Phase::EnteringSecondOperand,
///         timestamp: Utc::now(),
///         press: 2,
///     })
///     .record(StateTransition {
///         from: Phase::EnteringSecondOperand,
///         to: Phase::EnteringFirstOperand,
///         timestamp: Utc::now(),
///         press: 4,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &Phase::EnteringFirstOperand);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append `transition` and hand the history back.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// States visited, starting with the `from` of the first record.
    ///
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of records that moved into `target`.
    pub fn count_into(&self, target: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == target).count()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
