//! Arma 3 launcher preset parsing
//!
//! This module turns a launcher-exported preset document into a structured
//! [`Preset`]: the preset name plus the ordered list of mod rows. The data
//! model is plain owned data and does not expose any HTML parser types.

pub mod parser;
pub mod records;

// Re-export main types
pub use parser::{parse_preset, parse_preset_bytes, PresetParser, UNNAMED_PRESET};
pub use records::{ModRecord, Preset};
