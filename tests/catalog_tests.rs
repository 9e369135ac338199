//! Catalog parsing and loader degradation tests.

use std::io::Write;

use fontpad::catalog::{CatalogSource, FontCatalog, Variant, closest_variant, load_catalog};

#[test]
fn test_family_order_matches_source_key_order() {
    let body = r#"{
        "Ubuntu": {"400": {}},
        "ABeeZee": {"400": {}},
        "Merriweather": {"300": {}, "700": {}}
    }"#;
    let catalog = FontCatalog::from_json(body).unwrap();
    let names: Vec<&str> = catalog.family_names().collect();
    assert_eq!(names, ["Ubuntu", "ABeeZee", "Merriweather"]);
}

#[test]
fn test_variant_tokens_keep_source_order_and_shape() {
    let body = r#"{"Merriweather": {"300": {}, "300italic": {}, "700": {}, "700italic": {}}}"#;
    let catalog = FontCatalog::from_json(body).unwrap();
    let tokens = catalog.variants("Merriweather").unwrap();
    assert_eq!(tokens, &["300", "300italic", "700", "700italic"]);

    // Every token decodes to the weight/slant its shape implies.
    assert_eq!(Variant::from_token(&tokens[1]), Some(Variant::new(300, true)));
    assert_eq!(Variant::from_token(&tokens[2]), Some(Variant::new(700, false)));
}

#[test]
fn test_matcher_resolves_nearest_weight_over_catalog_tokens() {
    let body = r#"{"Merriweather": {"300": {}, "400": {}, "700": {}}}"#;
    let catalog = FontCatalog::from_json(body).unwrap();
    let tokens = catalog.variants("Merriweather").unwrap();

    let resolved = closest_variant(
        tokens.iter().map(String::as_str),
        Variant::new(650, false),
    )
    .unwrap();
    assert_eq!(resolved.weight, 700);

    let resolved = closest_variant(
        tokens.iter().map(String::as_str),
        Variant::new(450, true),
    )
    .unwrap();
    assert_eq!(resolved, Variant::new(400, true));
}

#[test]
fn test_loader_missing_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load_catalog(&CatalogSource::File(dir.path().join("fonts.json")));
    assert!(catalog.is_empty());
}

#[test]
fn test_loader_malformed_body_degrades_to_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Roboto": ["this", "is", "wrong"]}}"#).unwrap();

    let catalog = load_catalog(&CatalogSource::File(file.path().to_path_buf()));
    assert!(catalog.is_empty());
}

#[test]
fn test_loader_reads_valid_resource() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"ABeeZee": {{"400": {{"url": "abeezee.woff2"}}, "400italic": {{}}}}}}"#
    )
    .unwrap();

    let catalog = load_catalog(&CatalogSource::File(file.path().to_path_buf()));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.variants("ABeeZee").unwrap(), &["400", "400italic"]);
}
