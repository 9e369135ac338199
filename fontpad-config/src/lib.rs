//! Persisted settings for fontpad.
//!
//! This crate provides settings loading, saving, and default values for the
//! editor. It includes:
//!
//! - The `Settings` record (selected family, variant, editor content)
//! - The `SettingsStore` trait the controller is built against
//! - A file-backed store (XDG path, atomic writes)
//! - An in-memory store for tests
//!
//! Loading never fails: every missing or malformed entry falls back to its
//! default. Saving reports errors but callers degrade to "changes not
//! persisted" rather than aborting.

pub mod settings;
pub mod store;

// Re-export main types for convenience
pub use settings::{DEFAULT_FAMILY, Settings};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsError, SettingsStore};
