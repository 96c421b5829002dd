//! Input and display resources for the dispatcher.
//!
//! The upstream client located its input field and output region through
//! global id lookup at invocation time. Here both are explicit dependencies:
//! the dispatcher reads from a [`TextSource`] and writes to a
//! [`DisplaySink`], so any host environment (CLI, TUI, test harness) can
//! supply its own resources and dispatch behavior stays testable in
//! isolation.

use std::sync::RwLock;

/// A readable input resource exposing its current text value.
///
/// The value is read once, at invocation time; later edits to the source do
/// not affect an already in-flight request.
pub trait TextSource: Send + Sync {
    /// Current text held by the input resource.
    fn current_text(&self) -> String;
}

/// A writable display resource accepting verbatim content assignment.
///
/// Content is assigned exactly as received from the transport; the sink must
/// not escape or transform it. Overlapping dispatches may write the same
/// sink in completion order, so implementations must be safe to call from
/// multiple coroutines.
pub trait DisplaySink: Send + Sync {
    /// Overwrite the displayed content.
    fn set_content(&self, content: String);

    /// Current displayed content.
    fn content(&self) -> String;
}

/// In-memory input field, shared behind an `RwLock`.
///
/// Mirrors a UI text field: the held value can be edited between dispatches
/// and is sampled when the dispatcher is triggered.
#[derive(Debug, Default)]
pub struct InMemoryField {
    value: RwLock<String>,
}

impl InMemoryField {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    /// Replace the field's value, as a user typing would.
    pub fn set_text(&self, value: impl Into<String>) {
        *self
            .value
            .write()
            .expect("input field RwLock poisoned - critical error") = value.into();
    }
}

impl TextSource for InMemoryField {
    fn current_text(&self) -> String {
        self.value
            .read()
            .expect("input field RwLock poisoned - critical error")
            .clone()
    }
}

/// Fixed input text. Used by the one-shot CLI command where the "field"
/// content arrives as an argument.
#[derive(Debug, Clone)]
pub struct StaticText(pub String);

impl TextSource for StaticText {
    fn current_text(&self) -> String {
        self.0.clone()
    }
}

/// In-memory display panel, shared behind an `RwLock`.
///
/// This is the test harness's display element; assertions read back the last
/// content written. "Last write wins" falls out of the lock, not from any
/// sequencing in the dispatcher.
#[derive(Debug, Default)]
pub struct InMemoryPanel {
    content: RwLock<String>,
}

impl InMemoryPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for InMemoryPanel {
    fn set_content(&self, content: String) {
        *self
            .content
            .write()
            .expect("display panel RwLock poisoned - critical error") = content;
    }

    fn content(&self) -> String {
        self.content
            .read()
            .expect("display panel RwLock poisoned - critical error")
            .clone()
    }
}

/// Display panel that prints each assignment to stdout.
///
/// The CLI's display element. Keeps a copy of the last content so `content()`
/// remains inspectable.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    last: RwLock<String>,
}

impl ConsolePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for ConsolePanel {
    fn set_content(&self, content: String) {
        println!("{content}");
        *self
            .last
            .write()
            .expect("console panel RwLock poisoned - critical error") = content;
    }

    fn content(&self) -> String {
        self.last
            .read()
            .expect("console panel RwLock poisoned - critical error")
            .clone()
    }
}
