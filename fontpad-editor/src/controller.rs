//! The editor controller.
//!
//! Covers:
//! - startup resolution (saved settings + catalog → initial family/variant)
//! - event handlers for family, variant, italic, content, and reset
//! - style application to the text surface
//! - persistence of the whole settings record on every mutating action
//! - plain-text export of the current content
//!
//! The controller has two operative states: Empty (catalog empty, or the
//! selected family is unknown to it: no style applied, no variant options)
//! and Ready (a family and variant are resolved and applied). The transition
//! happens once at startup or whenever family resolution succeeds.

use std::path::Path;

use fontpad_catalog::{FontCatalog, Variant, closest_variant};
use fontpad_config::{Settings, SettingsStore};

use crate::events::EditorEvent;
use crate::style::TextStyle;

/// Fixed file name for exported content.
pub const EXPORT_FILE_NAME: &str = "text-editor-content.txt";

/// Transient editor state, owned solely by the controller and mutated only
/// by its event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub family: String,
    pub variant: Variant,
    pub content: String,
}

impl From<Settings> for EditorState {
    fn from(settings: Settings) -> Self {
        Self {
            family: settings.font,
            variant: settings.variant,
            content: settings.content,
        }
    }
}

/// Orchestrates catalog, store, matcher, and codec behind the UI surface.
pub struct EditorController<S: SettingsStore> {
    store: S,
    catalog: FontCatalog,
    state: EditorState,
    /// Style currently applied to the text surface; `None` in the Empty state.
    style: Option<TextStyle>,
    /// Italic checkbox state. Set from the resolved variant when a family is
    /// loaded, and by the toggle itself. NOT recomputed when the variant
    /// selector changes.
    italic_toggle: bool,
    /// Variant tokens offered for the current family, in catalog order.
    variant_tokens: Vec<String>,
}

impl<S: SettingsStore> EditorController<S> {
    /// Load settings from the store and resolve the initial family/variant
    /// against the catalog. An empty catalog, or a saved family the catalog
    /// does not know, leaves the controller in the Empty state with the
    /// saved settings intact.
    pub fn new(store: S, catalog: FontCatalog) -> Self {
        let settings = store.load();
        let target = settings.variant;
        let mut controller = Self {
            store,
            catalog,
            state: EditorState::from(settings),
            style: None,
            italic_toggle: false,
            variant_tokens: Vec::new(),
        };

        if !controller.catalog.is_empty() && !controller.resolve_family(target) {
            log::warn!(
                "Saved family {:?} could not be resolved against the catalog, editor stays unstyled",
                controller.state.family
            );
        }
        controller
    }

    /// Dispatch one UI event to its handler.
    pub fn handle(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::FamilySelected(family) => self.on_family_selected(family),
            EditorEvent::VariantSelected(token) => self.on_variant_selected(&token),
            EditorEvent::ItalicToggled(checked) => self.on_italic_toggled(checked),
            EditorEvent::ContentEdited(text) => self.on_content_edited(text),
            EditorEvent::ResetPressed => self.on_reset(),
        }
    }

    /// Family picked: restart variant resolution from the default target,
    /// repopulate the variant options, reapply style, persist.
    fn on_family_selected(&mut self, family: String) {
        self.state.family = family;
        if !self.resolve_family(Variant::default()) {
            self.clear_resolution();
        }
        self.persist();
    }

    /// Variant token picked: decode and apply. The italic toggle keeps its
    /// current state rather than following the token.
    fn on_variant_selected(&mut self, token: &str) {
        let Some(variant) = Variant::from_token(token) else {
            log::debug!("Ignoring unparseable variant selection: {token:?}");
            return;
        };
        self.state.variant = variant;
        self.apply_style();
        self.persist();
    }

    /// Italic checkbox toggled: flip the resolved variant's slant.
    fn on_italic_toggled(&mut self, checked: bool) {
        self.state.variant.italic = checked;
        self.italic_toggle = checked;
        self.apply_style();
        self.persist();
    }

    /// Content edited: persist only, the style is unaffected.
    fn on_content_edited(&mut self, text: String) {
        self.state.content = text;
        self.persist();
    }

    /// Reset: defaults for family, variant, content, and toggle, then
    /// persist unconditionally over whatever was saved before.
    fn on_reset(&mut self) {
        self.state = EditorState::from(Settings::default());
        self.italic_toggle = false;
        if !self.resolve_family(Variant::default()) {
            self.clear_resolution();
        }
        self.persist();
    }

    /// Write the current content to `path` verbatim.
    ///
    /// Export has no persistence side effect; content edits were already
    /// saved as they happened.
    pub fn export_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.state.content)?;
        log::info!("Exported {} bytes to {}", self.state.content.len(), path.display());
        Ok(())
    }

    /// Resolve the closest variant for the current family against `target`.
    ///
    /// On success: repopulates the variant options, adopts the resolved
    /// variant, aligns the italic toggle with it, and applies the style.
    /// Returns false when the family is unknown or offers no usable weight.
    fn resolve_family(&mut self, target: Variant) -> bool {
        let Some(tokens) = self.catalog.variants(&self.state.family) else {
            return false;
        };
        let Some(resolved) = closest_variant(tokens.iter().map(String::as_str), target) else {
            return false;
        };

        self.variant_tokens = tokens.to_vec();
        self.state.variant = resolved;
        self.italic_toggle = resolved.italic;
        self.apply_style();
        true
    }

    /// Drop back to the Empty state: no options, no style, default variant.
    fn clear_resolution(&mut self) {
        self.variant_tokens.clear();
        self.style = None;
        self.state.variant = Variant::default();
        self.italic_toggle = false;
    }

    fn apply_style(&mut self) {
        self.style = Some(TextStyle::new(self.state.family.clone(), self.state.variant));
    }

    /// Persist the whole settings record. A failing store degrades to
    /// "changes not saved across restart", never an abort.
    fn persist(&mut self) {
        let settings = Settings {
            font: self.state.family.clone(),
            variant: self.state.variant,
            content: self.state.content.clone(),
        };
        if let Err(e) = self.store.save(&settings) {
            log::warn!("Failed to persist editor settings: {e}");
        }
    }

    // --- accessors for the UI layer ---

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Style currently applied to the text surface, if any.
    pub fn style(&self) -> Option<&TextStyle> {
        self.style.as_ref()
    }

    /// Whether a family and variant are resolved and applied.
    pub fn is_ready(&self) -> bool {
        self.style.is_some()
    }

    /// Family names offered by the catalog, in catalog order.
    pub fn family_options(&self) -> impl Iterator<Item = &str> {
        self.catalog.family_names()
    }

    /// Variant tokens for the current family, in catalog order.
    pub fn variant_tokens(&self) -> &[String] {
        &self.variant_tokens
    }

    /// Current italic checkbox state.
    pub fn italic_toggle(&self) -> bool {
        self.italic_toggle
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    /// The injected settings store (tests inspect what was persisted).
    pub fn store(&self) -> &S {
        &self.store
    }
}
