//! Error types for preset loading, set operations and export

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the preset session and its file boundary
///
/// The pure stages (extraction, set algebra, rendering) never produce these
/// for malformed-but-readable input. Only undecodable input, caller-side
/// precondition violations and I/O end up here.
#[derive(Error, Debug)]
pub enum PresetError {
    /// Input could not be treated as a document at all
    #[error("Unparseable input '{source_name}': {reason}")]
    Unparseable {
        source_name: String,
        reason: String,
    },

    /// Nothing was selected
    #[error("Select at least one preset.")]
    EmptySelection,

    /// Operation needs more presets than were selected
    #[error("{operation} needs at least {required} presets selected (got {selected})")]
    NotEnoughPresets {
        operation: String,
        required: usize,
        selected: usize,
    },

    /// Selection refers to a preset that is not loaded
    #[error("Preset index {index} is out of range ({loaded} presets loaded)")]
    UnknownPreset {
        index: usize,
        loaded: usize,
    },

    /// Export requested before any operation produced a result
    #[error("No result to export: run an operation first")]
    NoResult,

    /// File system I/O errors with file context
    #[error("File operation failed on '{path}': {operation}")]
    FileSystem {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
}

/// Types of file operations for error context
#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    Read,
    Write,
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PresetError>;

impl PresetError {
    /// Whether this is a usage precondition the caller should show as a validation message
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PresetError::EmptySelection
                | PresetError::NotEnoughPresets { .. }
                | PresetError::UnknownPreset { .. }
                | PresetError::NoResult
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            PresetError::Unparseable { .. } => "unparseable",
            PresetError::EmptySelection => "empty_selection",
            PresetError::NotEnoughPresets { .. } => "not_enough_presets",
            PresetError::UnknownPreset { .. } => "unknown_preset",
            PresetError::NoResult => "no_result",
            PresetError::FileSystem { .. } => "file_system",
            PresetError::Configuration { .. } => "configuration",
        }
    }

    /// Get severity level for error prioritization
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PresetError::EmptySelection
            | PresetError::NotEnoughPresets { .. }
            | PresetError::NoResult => ErrorSeverity::Low,
            PresetError::UnknownPreset { .. } | PresetError::Unparseable { .. } => {
                ErrorSeverity::Medium
            }
            PresetError::FileSystem { .. } | PresetError::Configuration { .. } => {
                ErrorSeverity::High
            }
        }
    }

    /// Get user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            PresetError::Unparseable { .. } => {
                Some("Make sure the file is a preset exported from the Arma 3 launcher (UTF-8 HTML)")
            }
            PresetError::EmptySelection => Some("Select at least one loaded preset"),
            PresetError::NotEnoughPresets { .. } => {
                Some("Select two presets: A first, then B")
            }
            PresetError::UnknownPreset { .. } => {
                Some("Use the indices listed by `modset inspect`")
            }
            PresetError::NoResult => Some("Run union, intersection or difference before exporting"),
            PresetError::Configuration { suggestion, .. } => suggestion.as_deref(),
            PresetError::FileSystem { .. } => None,
        }
    }

    /// Create a detailed error report for debugging
    pub fn detailed_report(&self) -> String {
        let mut report = format!("Error: {}\n", self);
        report.push_str(&format!("Category: {}\n", self.category()));
        report.push_str(&format!("Severity: {:?}\n", self.severity()));

        if let Some(suggestion) = self.suggestion() {
            report.push_str(&format!("Suggestion: {}\n", suggestion));
        }

        if let Some(source) = self.source() {
            report.push_str(&format!("Root cause: {}\n", source));
        }

        report
    }
}

/// Error severity levels for prioritization
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
