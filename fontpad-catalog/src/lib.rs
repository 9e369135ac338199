//! Font catalog model and variant resolution for fontpad.
//!
//! This crate provides:
//! - The `Variant` value type (weight + italic) and its string token codec
//! - Closest-weight matching against a family's available variants
//! - The `FontCatalog` data model, parsed from a `fonts.json` resource with
//!   source key order preserved
//! - A best-effort catalog loader (local file or HTTPS) that degrades to an
//!   empty catalog on any failure
//!
//! # Architecture
//!
//! Everything except the loader is pure data and pure functions. The loader
//! is the single I/O point: one fetch at startup, no retry, failures are
//! logged and mapped to [`FontCatalog::default`].

pub mod catalog;
pub mod loader;
pub mod matcher;
pub mod variant;

// Re-export main types for convenience
pub use catalog::{FamilyVariants, FontCatalog};
pub use loader::{CatalogSource, DEFAULT_CATALOG_PATH, load_catalog};
pub use matcher::closest_variant;
pub use variant::{Variant, label_for};
