//! The `State` trait for named machine states.
//!
//! The calculator's phases implement this trait so the session history and
//! log events can name where the machine is without knowing the concrete type.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named, inspectable machine state.
///
/// Implementors are plain values that can be cloned into history records
/// and serialized alongside them.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Entry {
///     Idle,
///     Typing,
/// }
///
/// impl State for Entry {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Typing => "Typing",
///         }
///     }
/// }
///
/// assert_eq!(Entry::Typing.name(), "Typing");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in history records and log events.
    fn name(&self) -> &str;
}
