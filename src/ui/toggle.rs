// toggle.rs - Boolean flags bound to a button caption

use serde::Serialize;

/// New text (or select value) for one DOM element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub target: &'static str,
    pub text: String,
}

impl Label {
    pub fn new(target: &'static str, text: impl Into<String>) -> Self {
        Self { target, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toggle {
    pub on: bool,
    target: &'static str,
    on_text: &'static str,
    off_text: &'static str,
}

impl Toggle {
    pub const fn new(target: &'static str, on_text: &'static str, off_text: &'static str) -> Self {
        Self { on: true, target, on_text, off_text }
    }

    pub fn label(&self) -> Label {
        Label::new(self.target, if self.on { self.on_text } else { self.off_text })
    }

    pub fn flip(&mut self) -> Label {
        self.on = !self.on;
        self.label()
    }
}
