//! Template substitution for preset documents
//!
//! The anchors below are a contract with the launcher's export format:
//!
//! - mod table: the first `<table>` after a `<div>` whose class list contains
//!   `mod-list`, matched lazily up to the next `</table>`
//! - preset name: the `content` attribute of `<meta name="arma:PresetName">`,
//!   always rewritten double-quoted
//! - title: the text of the first `<strong>` inside the first `<h1>`
//!
//! Matching is case-insensitive and first-match only. A missing anchor is
//! skipped silently and that region of the template is left as it was.

use crate::parse_preset::ModRecord;
use crate::render::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::{debug, warn};

static MOD_TABLE_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(<div[^>]*class=(?:"|')?[^>"']*mod-list[^>"']*(?:"|')?[^>]*>[\s\S]*?<table[^>]*>)([\s\S]*?)(</table>)"#,
    )
    .expect("mod table pattern is valid")
});

static PRESET_NAME_META: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(<meta\s+name=(?:"|')arma:PresetName(?:"|')\s+)(content=(?:"[^"]*"|'[^']*'))"#,
    )
    .expect("preset name meta pattern is valid")
});

static HEADING_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(<h1[\s\S]*?<strong>)([\s\S]*?)(</strong>[\s\S]*?</h1>)"#)
        .expect("heading title pattern is valid")
});

/// Indent written before the closing `</table>` tag
const TABLE_CLOSE_INDENT: &str = "      ";

/// Rendered document plus which anchors were found in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub html: String,
    pub table_replaced: bool,
    pub name_meta_replaced: bool,
    pub title_replaced: bool,
}

/// Renders mod lists into preset templates
#[derive(Debug, Default, Clone)]
pub struct PresetRenderer;

impl PresetRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `mods` into `template`, renaming the preset when `preset_name` is non-empty
    pub fn render(&self, template: &str, mods: &[ModRecord], preset_name: &str) -> RenderOutcome {
        let rows: String = mods.iter().map(render_row).collect();
        let table_body = format!("\n{}{}", rows, TABLE_CLOSE_INDENT);

        let (mut html, table_replaced) = splice_group(template, &MOD_TABLE_REGION, &table_body);
        if !table_replaced {
            warn!("No mod-list table found in template; mod rows left unchanged");
        }

        let mut name_meta_replaced = false;
        let mut title_replaced = false;
        if !preset_name.is_empty() {
            let escaped_name = escape_html(preset_name);
            let content_attr = format!("content=\"{}\"", escaped_name);
            (html, name_meta_replaced) = splice_group(&html, &PRESET_NAME_META, &content_attr);
            (html, title_replaced) = splice_group(&html, &HEADING_TITLE, &escaped_name);
        }

        debug!(
            "Rendered {} mods (table: {}, meta: {}, title: {})",
            mods.len(),
            table_replaced,
            name_meta_replaced,
            title_replaced
        );

        RenderOutcome {
            html,
            table_replaced,
            name_meta_replaced,
            title_replaced,
        }
    }
}

/// Replace the byte range of capture group 2 of the first match
///
/// Returns the input unchanged and `false` when the pattern does not match.
fn splice_group(text: &str, pattern: &Regex, replacement: &str) -> (String, bool) {
    let range: Option<Range<usize>> = pattern
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|group| group.range());

    match range {
        Some(range) => {
            let mut out = String::with_capacity(text.len() - range.len() + replacement.len());
            out.push_str(&text[..range.start]);
            out.push_str(replacement);
            out.push_str(&text[range.end..]);
            (out, true)
        }
        None => (text.to_string(), false),
    }
}

/// CSS class for a provenance label
///
/// Launcher exports tag workshop mods `from-steam` and locally added mods
/// `from-local` (see `fixtures/training.html`).
fn source_class(source: &str) -> &'static str {
    if source.eq_ignore_ascii_case("local") {
        "from-local"
    } else {
        "from-steam"
    }
}

/// One `ModContainer` row in the launcher's layout
fn render_row(record: &ModRecord) -> String {
    let source_label = if record.has_source() {
        format!(
            r#"<span class="{}">{}</span>"#,
            source_class(&record.source),
            escape_html(&record.source)
        )
    } else {
        String::new()
    };

    let link_anchor = if record.has_link() {
        let link = escape_html(&record.link);
        format!(r#"<a href="{link}" data-type="Link">{link}</a>"#)
    } else {
        String::new()
    };

    format!(
        concat!(
            "        <tr data-type=\"ModContainer\">\n",
            "          <td data-type=\"DisplayName\">{}</td>\n",
            "          <td>\n",
            "            {}\n",
            "          </td>\n",
            "          <td>\n",
            "            {}\n",
            "          </td>\n",
            "        </tr>\n",
        ),
        escape_html(&record.name),
        source_label,
        link_anchor
    )
}

/// Convenience function to render a preset document
pub fn render_preset(template: &str, mods: &[ModRecord], preset_name: &str) -> String {
    PresetRenderer::new().render(template, mods, preset_name).html
}
