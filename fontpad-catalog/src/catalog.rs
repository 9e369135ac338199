//! The font catalog data model.
//!
//! A catalog maps font-family names to their available variant tokens. It is
//! parsed once at startup from a JSON object whose top-level keys are family
//! names and whose values are objects keyed by variant token; the innermost
//! values are opaque metadata (a file URL in the usual resource) and are not
//! consumed here. Family and token order both follow the source resource.

/// One family and its variant tokens, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyVariants {
    pub name: String,
    pub tokens: Vec<String>,
}

/// Read-only mapping from family name to available variants.
///
/// Created once at startup and never mutated; an empty catalog is the valid
/// degraded state after a failed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCatalog {
    families: Vec<FamilyVariants>,
}

impl FontCatalog {
    /// Parse a catalog from the JSON resource body.
    ///
    /// Any shape violation (non-object root, non-object family value) fails
    /// the whole parse; the loader maps that to the empty catalog.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(body).map_err(|e| format!("invalid catalog JSON: {e}"))?;

        let mut families = Vec::with_capacity(root.len());
        for (name, value) in root {
            let variants = value.as_object().ok_or_else(|| {
                format!("family {name:?} is not an object of variant tokens")
            })?;
            families.push(FamilyVariants {
                name,
                tokens: variants.keys().cloned().collect(),
            });
        }

        Ok(Self { families })
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Family names in source order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.iter().any(|f| f.name == family)
    }

    /// Variant tokens for a family, in source order.
    pub fn variants(&self, family: &str) -> Option<&[String]> {
        self.families
            .iter()
            .find(|f| f.name == family)
            .map(|f| f.tokens.as_slice())
    }
}
