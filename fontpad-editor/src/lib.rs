//! Editor controller for fontpad.
//!
//! This crate wires the catalog, the settings store, the matcher, and the
//! codec together without depending on any UI toolkit. The controller owns
//! the editor state, dispatches UI events to handlers, applies the resolved
//! style to the text surface, and persists the settings record on every
//! mutating action. The UI layer renders whatever the controller exposes and
//! feeds user actions back as [`EditorEvent`] values, which keeps every
//! handler unit-testable with synthetic inputs.

pub mod controller;
pub mod events;
pub mod style;

// Re-export main types for convenience
pub use controller::{EXPORT_FILE_NAME, EditorController, EditorState};
pub use events::EditorEvent;
pub use style::TextStyle;
