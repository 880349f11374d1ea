//! The display capability.

use std::sync::{Arc, Mutex, PoisonError};

/// Something that can show the calculator's display text.
pub trait Display {
    fn render(&mut self, text: &str);
}

impl<F> Display for F
where
    F: FnMut(&str),
{
    fn render(&mut self, text: &str) {
        self(text)
    }
}

/// In-memory display that keeps every frame it was asked to render.
///
/// Clones share the same frames, so one handle can be given to a session
/// while another is kept for reading.
#[derive(Clone, Debug, Default)]
pub struct TextDisplay {
    frames: Arc<Mutex<Vec<String>>>,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, oldest first.
    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent frame.
    pub fn text(&self) -> Option<String> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Display for TextDisplay {
    fn render(&mut self, text: &str) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}
