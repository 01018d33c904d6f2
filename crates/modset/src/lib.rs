//! Modset Library
//!
//! This library reads Arma 3 launcher preset documents, combines their mod
//! lists with set operations and writes the result back out as a preset the
//! launcher can import again.
//!
//! # Quick Start
//!
//! ```rust
//! use modset::{Session, SessionConfig, SetOperation};
//!
//! # fn example() -> modset::Result<()> {
//! let a = r#"<html><head><meta name="arma:PresetName" content="A" /></head><body>
//!   <h1>Arma 3 - Preset <strong>A</strong></h1>
//!   <div class="mod-list"><table>
//!     <tr data-type="ModContainer"><td data-type="DisplayName">CBA_A3</td></tr>
//!     <tr data-type="ModContainer"><td data-type="DisplayName">ACE</td></tr>
//!   </table></div></body></html>"#;
//! let b = r#"<html><body><table>
//!     <tr data-type="ModContainer"><td data-type="DisplayName">ACE</td></tr>
//!   </table></body></html>"#;
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.load_all(vec![("a.html", a), ("b.html", b)]);
//!
//! // Mods in A that are not in B
//! let result = session.run(SetOperation::Difference, &[0, 1])?;
//! assert_eq!(result.summary(), "1 mods in result (preset: CombinedPreset)");
//!
//! // Rendered into A's document, ready to save as CombinedPreset.html
//! let exported = session.export()?;
//! assert!(exported.html.contains("CBA_A3"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - **Tolerant parsing**: malformed documents degrade to empty fields instead of failing
//! - **Name-keyed set algebra**: union, intersection and difference that keep document order
//! - **Faithful rendering**: only the mod table and title regions of the template change
//! - **Escaping**: every interpolated value is HTML-escaped
//! - **Async file boundary**: presets are read and exports written with Tokio

pub mod config;
pub mod error;
pub mod events;
pub mod parse_preset;
pub mod render;
pub mod session;
pub mod set_ops;

// Re-export commonly used types for convenience
pub use config::{SessionConfig, SessionConfigBuilder};
pub use error::{ErrorSeverity, FileOperation, PresetError, Result};
pub use events::{
    ConsoleEventReporter, EventCallback, EventReporter, IntoEventCallback, NullEventReporter,
    SessionEvent,
};
pub use parse_preset::{
    parse_preset, parse_preset_bytes, ModRecord, Preset, PresetParser, UNNAMED_PRESET,
};
pub use render::{escape_html, render_preset, PresetRenderer, RenderOutcome};
pub use session::{ExportedPreset, LoadedPreset, ResultSet, Session};
pub use set_ops::{difference, intersect, union, unique_by_name, SetOperation};
