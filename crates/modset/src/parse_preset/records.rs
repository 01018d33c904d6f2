//! Mod record and preset types
//!
//! These are the values that flow between the parser, the set operations
//! and the renderer.

use serde::{Deserialize, Serialize};

/// A single mod row from a preset
///
/// Identity is the `name` alone. `source` and `link` are payload and are
/// never compared by the set operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    /// Display name, the identity key (non-empty)
    pub name: String,
    /// Provenance label such as "Steam" or "Local" (may be empty)
    pub source: String,
    /// Workshop or download URL (may be empty)
    pub link: String,
}

impl ModRecord {
    /// Create a record with only a name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            source: String::new(),
            link: String::new(),
        }
    }

    /// Set the provenance label and return self for chaining
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = source.into();
        self
    }

    /// Set the link and return self for chaining
    pub fn with_link<S: Into<String>>(mut self, link: S) -> Self {
        self.link = link.into();
        self
    }

    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// A parsed preset document
///
/// `mods` is in document order. Raw extraction does not collapse duplicate
/// names; that happens in [`crate::set_ops::unique_by_name`] when a preset
/// takes part in an operation. `original_html` is kept verbatim so the
/// document can later serve as a render template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name from the preset-name meta tag
    pub preset_name: String,
    /// Mod rows in document order
    pub mods: Vec<ModRecord>,
    /// Verbatim source document
    #[serde(skip_serializing)]
    #[serde(default)]
    pub original_html: String,
}

impl Preset {
    pub fn mod_count(&self) -> usize {
        self.mods.len()
    }

    /// Names of all mods, in document order
    pub fn mod_names(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().map(|m| m.name.as_str())
    }
}
