//! The keypad a presentation layer renders as buttons.
//!
//! A button is a label, style hints (width and operator styling) and the
//! [`Key`] handed back to the session when it is pressed. Layouts can be
//! built in code or loaded from JSON, and are validated as a whole.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::keypad::{Key, KeypadLayout};
//!
//! let layout = KeypadLayout::standard();
//! assert!(layout.check().is_ok());
//! assert_eq!(layout.resolve("AC").unwrap(), Key::Clear);
//! ```

pub mod error;
pub mod key;
pub mod layout;
pub mod script;

pub use error::{LayoutError, LayoutViolation, ScriptError};
pub use key::Key;
pub use layout::{ButtonSpec, ButtonWidth, KeypadLayout};
pub use script::{parse_keys, to_script};
