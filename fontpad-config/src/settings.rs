//! The `Settings` record and its three-entry wire form.
//!
//! On disk the record is a JSON object with three independent string-valued
//! entries: `font` (plain family name), `variant` (a JSON-serialized
//! `{weight, italic}` pair), and `content` (raw editor text). The variant
//! value is itself a JSON document in a string; each entry decodes
//! independently of the others.

use fontpad_catalog::Variant;
use serde::{Deserialize, Serialize};

/// Default font family selected when nothing is persisted.
pub const DEFAULT_FAMILY: &str = "ABeeZee";

/// The persisted editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Selected font family name.
    pub font: String,
    /// Selected variant.
    pub variant: Variant,
    /// Editor text content, verbatim.
    pub content: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: DEFAULT_FAMILY.to_string(),
            variant: Variant::default(),
            content: String::new(),
        }
    }
}

/// The raw on-disk shape: three optional string entries.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredEntries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Decode a settings record from its JSON body.
///
/// Never fails: an unreadable body yields the defaults wholesale, and each
/// entry falls back independently. A corrupted `variant` string decays to
/// the default variant without touching `font` or `content`.
pub(crate) fn decode(body: &str) -> Settings {
    let entries: StoredEntries = match serde_json::from_str(body) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Settings record is unreadable, using defaults: {e}");
            return Settings::default();
        }
    };

    let variant = entries
        .variant
        .as_deref()
        .map(|raw| match serde_json::from_str::<Variant>(raw) {
            Ok(variant) => variant,
            Err(e) => {
                log::warn!("Stored variant {raw:?} is corrupt, using default: {e}");
                Variant::default()
            }
        })
        .unwrap_or_default();

    Settings {
        font: entries.font.unwrap_or_else(|| DEFAULT_FAMILY.to_string()),
        variant,
        content: entries.content.unwrap_or_default(),
    }
}

/// Encode a settings record to its JSON body.
pub(crate) fn encode(settings: &Settings) -> Result<String, serde_json::Error> {
    let entries = StoredEntries {
        font: Some(settings.font.clone()),
        variant: Some(serde_json::to_string(&settings.variant)?),
        content: Some(settings.content.clone()),
    };
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font, "ABeeZee");
        assert_eq!(settings.variant, Variant::new(400, false));
        assert_eq!(settings.content, "");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let settings = Settings {
            font: "Roboto".to_string(),
            variant: Variant::new(700, true),
            content: "hello\nworld".to_string(),
        };
        let body = encode(&settings).unwrap();
        assert_eq!(decode(&body), settings);
    }

    #[test]
    fn test_decode_unreadable_body_yields_defaults() {
        assert_eq!(decode("not json"), Settings::default());
        assert_eq!(decode(""), Settings::default());
    }

    #[test]
    fn test_decode_missing_entries_fall_back() {
        let settings = decode(r#"{"font": "Lato"}"#);
        assert_eq!(settings.font, "Lato");
        assert_eq!(settings.variant, Variant::default());
        assert_eq!(settings.content, "");
    }

    #[test]
    fn test_corrupt_variant_falls_back_alone() {
        let body = r#"{"font": "Lato", "variant": "definitely not json", "content": "kept"}"#;
        let settings = decode(body);
        assert_eq!(settings.font, "Lato");
        assert_eq!(settings.variant, Variant::default());
        assert_eq!(settings.content, "kept");
    }

    #[test]
    fn test_variant_entry_is_string_encoded() {
        let body = encode(&Settings::default()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
        // The variant entry is itself a JSON string, not a nested object.
        let variant_entry = raw.get("variant").and_then(|v| v.as_str()).unwrap();
        let variant: Variant = serde_json::from_str(variant_entry).unwrap();
        assert_eq!(variant, Variant::default());
    }
}
