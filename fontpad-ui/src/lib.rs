//! egui editor surface for fontpad.
//!
//! This crate renders the editor controls (family and variant selectors,
//! italic checkbox, reset and save buttons), the text surface itself, and a
//! one-line status. It is decoupled from the window harness: the host calls
//! [`EditorUi::show`] once per frame with the egui context. All state
//! changes flow through the controller's event handlers; this layer only
//! translates widget interactions into events.

mod editor_panel;

pub use editor_panel::EditorUi;
