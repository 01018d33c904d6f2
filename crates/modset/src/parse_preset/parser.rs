//! Preset document parser
//!
//! Extracts the preset name and the mod rows from a launcher preset. The
//! launcher marks everything it cares about with attributes:
//!
//! - `<meta name="arma:PresetName" content="...">` carries the preset name
//! - `<tr data-type="ModContainer">` is one mod row
//! - `<td data-type="DisplayName">` inside a row is the mod name
//! - the first `<span>` inside a row is the provenance label
//! - `<a data-type="Link" href="...">` inside a row is the mod link
//!
//! Parsing is tolerant. Text that is not HTML at all still produces a preset,
//! just one named [`UNNAMED_PRESET`] with no mods.

use crate::error::{PresetError, Result};
use crate::parse_preset::records::{ModRecord, Preset};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Name used when a document has no preset-name meta tag
pub const UNNAMED_PRESET: &str = "Unnamed";

static PRESET_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| css(r#"meta[name="arma:PresetName"]"#));
static MOD_ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| css(r#"tr[data-type="ModContainer"]"#));
static DISPLAY_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| css(r#"td[data-type="DisplayName"]"#));
static SOURCE_SELECTOR: Lazy<Selector> = Lazy::new(|| css("span"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| css(r#"a[data-type="Link"]"#));

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("static preset selector is valid CSS")
}

/// Parser for launcher preset documents
#[derive(Debug, Default, Clone)]
pub struct PresetParser;

impl PresetParser {
    /// Create a new preset parser
    pub fn new() -> Self {
        Self
    }

    /// Parse preset text into a structured preset
    ///
    /// Never fails: missing elements become empty values, and rows without a
    /// display name are dropped. Duplicate names are kept as they appear.
    pub fn parse(&self, text: &str) -> Preset {
        let document = Html::parse_document(text.strip_prefix('\u{feff}').unwrap_or(text));
        if !document.errors.is_empty() {
            trace!("HTML parser recovered from {} errors", document.errors.len());
        }

        let preset_name = document
            .select(&PRESET_NAME_SELECTOR)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .unwrap_or(UNNAMED_PRESET)
            .to_string();

        let mut dropped = 0usize;
        let mods: Vec<ModRecord> = document
            .select(&MOD_ROW_SELECTOR)
            .filter_map(|row| {
                let record = self.parse_row(row);
                if record.is_none() {
                    dropped += 1;
                }
                record
            })
            .collect();

        debug!(
            "Parsed preset '{}': {} mods ({} rows without a display name dropped)",
            preset_name,
            mods.len(),
            dropped
        );

        Preset {
            preset_name,
            mods,
            original_html: text.to_string(),
        }
    }

    /// Parse raw file bytes, failing only when they are not UTF-8 text
    pub fn parse_bytes(&self, source_name: &str, bytes: &[u8]) -> Result<Preset> {
        let text = std::str::from_utf8(bytes).map_err(|e| PresetError::Unparseable {
            source_name: source_name.to_string(),
            reason: format!("not UTF-8 text ({})", e),
        })?;
        Ok(self.parse(text))
    }

    /// Extract one mod row, or `None` when the display name is missing or blank
    fn parse_row(&self, row: ElementRef<'_>) -> Option<ModRecord> {
        let name = row
            .select(&DISPLAY_NAME_SELECTOR)
            .next()
            .map(text_content)
            .unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        let source = row
            .select(&SOURCE_SELECTOR)
            .next()
            .map(text_content)
            .unwrap_or_default();

        let link = row
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .unwrap_or_default()
            .to_string();

        Some(ModRecord { name, source, link })
    }
}

/// Trimmed concatenation of all descendant text nodes
fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Convenience function to parse preset text
pub fn parse_preset(text: &str) -> Preset {
    PresetParser::new().parse(text)
}

/// Convenience function to parse preset bytes read from a file
pub fn parse_preset_bytes(source_name: &str, bytes: &[u8]) -> Result<Preset> {
    PresetParser::new().parse_bytes(source_name, bytes)
}
