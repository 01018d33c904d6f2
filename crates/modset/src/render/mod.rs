//! Preset document rendering
//!
//! Rendering reuses an existing preset document as a template. Only three
//! regions are rewritten: the mod table body, the preset-name meta value and
//! the `<strong>` title inside the first `<h1>`. Every other byte of the
//! template is copied through untouched.

pub mod escape;
pub mod template;

pub use escape::escape_html;
pub use template::{render_preset, PresetRenderer, RenderOutcome};
