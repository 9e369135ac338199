//! Controller flow tests: startup resolution, event handling, reset, and
//! persistence across sessions.

use fontpad::catalog::{FontCatalog, Variant};
use fontpad::config::{MemorySettingsStore, Settings, SettingsStore};
use fontpad::editor::{EditorController, EditorEvent};

fn sample_catalog() -> FontCatalog {
    FontCatalog::from_json(
        r#"{
            "ABeeZee": {"400": {}, "400italic": {}},
            "Roboto": {"300": {}, "400": {}, "500": {}, "700": {}, "700italic": {}}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_select_family_then_variant_applies_and_persists() {
    let mut controller = EditorController::new(MemorySettingsStore::new(), sample_catalog());

    controller.handle(EditorEvent::ContentEdited("preview me".to_string()));
    controller.handle(EditorEvent::FamilySelected("Roboto".to_string()));
    controller.handle(EditorEvent::VariantSelected("700italic".to_string()));

    let style = controller.style().expect("style should be applied");
    assert_eq!(style.family, "Roboto");
    assert_eq!(style.weight, 700);
    assert_eq!(style.slant_keyword(), "italic");

    let saved = controller.store().load();
    assert_eq!(saved.font, "Roboto");
    assert_eq!(saved.variant, Variant::new(700, true));
    assert_eq!(saved.content, "preview me");
}

#[test]
fn test_empty_catalog_leaves_editor_unstyled() {
    let controller = EditorController::new(MemorySettingsStore::new(), FontCatalog::default());

    assert!(!controller.is_ready());
    assert!(controller.style().is_none());
    assert_eq!(controller.family_options().count(), 0);
    assert!(controller.variant_tokens().is_empty());
}

#[test]
fn test_reset_overwrites_any_prior_state() {
    let store = MemorySettingsStore::with_raw(
        r#"{"font": "Roboto", "variant": "{\"weight\":700,\"italic\":true}", "content": "old"}"#,
    );
    let mut controller = EditorController::new(store, sample_catalog());
    controller.handle(EditorEvent::ContentEdited("even newer".to_string()));

    controller.handle(EditorEvent::ResetPressed);

    assert_eq!(controller.state().family, "ABeeZee");
    assert_eq!(controller.state().variant, Variant::new(400, false));
    assert_eq!(controller.state().content, "");
    assert!(!controller.italic_toggle());
    assert_eq!(controller.store().load(), Settings::default());
}

#[test]
fn test_corrupt_stored_variant_starts_from_default() {
    let store = MemorySettingsStore::with_raw(
        r#"{"font": "Roboto", "variant": "not json at all", "content": "kept"}"#,
    );
    let controller = EditorController::new(store, sample_catalog());

    assert_eq!(controller.state().variant, Variant::new(400, false));
    assert_eq!(controller.state().content, "kept");
    assert!(controller.is_ready());
}

#[test]
fn test_session_roundtrip_through_shared_store() {
    let store = MemorySettingsStore::new();
    {
        let mut controller = EditorController::new(&store, sample_catalog());
        controller.handle(EditorEvent::FamilySelected("Roboto".to_string()));
        controller.handle(EditorEvent::VariantSelected("500".to_string()));
        controller.handle(EditorEvent::ContentEdited("draft text".to_string()));
    }

    // A fresh session over the same store resumes where the last left off.
    let controller = EditorController::new(&store, sample_catalog());
    assert_eq!(controller.state().family, "Roboto");
    assert_eq!(controller.state().variant, Variant::new(500, false));
    assert_eq!(controller.state().content, "draft text");
}
