//! The `Variant` value type and its string token codec.
//!
//! A variant token is the wire form used both as a selector option value and
//! inside the catalog resource: leading digits are the weight, an optional
//! literal `italic` or `regular` suffix carries the slant (no suffix means
//! regular). `decode(encode(v)) == v` holds for every variant.

use serde::{Deserialize, Serialize};

/// Default variant weight (CSS "normal").
pub const DEFAULT_WEIGHT: u16 = 400;

/// One instance of a font family's style: numeric weight plus italic flag.
///
/// Value type with no identity; weights are conventionally 100–900 in steps
/// of 100, but any positive integer parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub weight: u16,
    pub italic: bool,
}

impl Default for Variant {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            italic: false,
        }
    }
}

impl Variant {
    pub fn new(weight: u16, italic: bool) -> Self {
        Self { weight, italic }
    }

    /// Encode as a token, e.g. `700italic` or `400regular`.
    ///
    /// The regular suffix is always written on encode, even though decoding
    /// accepts its absence.
    pub fn token(&self) -> String {
        format!(
            "{}{}",
            self.weight,
            if self.italic { "italic" } else { "regular" }
        )
    }

    /// Decode a token: leading digits are the weight, a trailing `italic`
    /// marks the slant. A `regular` suffix or no suffix at all decodes as
    /// non-italic. Returns `None` when the token has no leading digits or
    /// trailing garbage after the suffix.
    pub fn from_token(token: &str) -> Option<Self> {
        let digits_end = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        if digits_end == 0 {
            return None;
        }
        let weight = token[..digits_end].parse::<u16>().ok()?;
        let italic = match &token[digits_end..] {
            "italic" => true,
            "" | "regular" => false,
            _ => return None,
        };
        Some(Self { weight, italic })
    }

    /// Human-readable label for this variant, e.g. `"700 Italic"`.
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            self.weight,
            if self.italic { "Italic" } else { "Regular" }
        )
    }
}

/// Human-readable label for a variant token: `400italic` → `"400 Italic"`,
/// `400` → `"400 Regular"`. Tokens that do not decode are shown verbatim.
pub fn label_for(token: &str) -> String {
    match Variant::from_token(token) {
        Some(variant) => variant.label(),
        None => token.to_string(),
    }
}
