//! Configuration types for preset sessions

use crate::error::{PresetError, Result};
use std::path::PathBuf;

/// Environment variable overriding [`SessionConfig::result_name`]
pub const ENV_RESULT_NAME: &str = "MODSET_RESULT_NAME";
/// Environment variable overriding [`SessionConfig::default_selection`]
pub const ENV_DEFAULT_SELECTION: &str = "MODSET_DEFAULT_SELECTION";
/// Environment variable overriding [`SessionConfig::output_dir`]
pub const ENV_OUTPUT_DIR: &str = "MODSET_OUTPUT_DIR";

/// Configuration for a preset session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Name given to every result set and its exported document
    pub result_name: String,
    /// How many leading presets are selected when the caller picks none
    pub default_selection: usize,
    /// Directory exported documents are written to
    pub output_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            result_name: "CombinedPreset".to_string(),
            default_selection: 2,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `MODSET_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `MODSET_*` key
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = SessionConfigBuilder::new();

        if let Some(name) = lookup(ENV_RESULT_NAME) {
            builder = builder.result_name(name);
        }

        if let Some(raw) = lookup(ENV_DEFAULT_SELECTION) {
            let count = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| PresetError::Configuration {
                    message: format!(
                        "{} must be a positive integer, got '{}'",
                        ENV_DEFAULT_SELECTION, raw
                    ),
                    field: Some("default_selection".to_string()),
                    suggestion: Some("Use a value such as 2".to_string()),
                })?;
            builder = builder.default_selection(count);
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            builder = builder.output_dir(dir);
        }

        builder.build()
    }
}

/// Builder for [`SessionConfig`]
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl From<SessionConfig> for SessionConfigBuilder {
    fn from(config: SessionConfig) -> Self {
        Self { config }
    }
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }

    pub fn result_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.result_name = name.into();
        self
    }

    pub fn default_selection(mut self, count: usize) -> Self {
        self.config.default_selection = count;
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SessionConfig> {
        if self.config.result_name.trim().is_empty() {
            return Err(PresetError::Configuration {
                message: "result name must not be empty".to_string(),
                field: Some("result_name".to_string()),
                suggestion: Some("Pick a name such as CombinedPreset".to_string()),
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.result_name, "CombinedPreset");
        assert_eq!(config.default_selection, 2);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (ENV_RESULT_NAME, "Merged"),
            (ENV_DEFAULT_SELECTION, " 3 "),
            (ENV_OUTPUT_DIR, "/tmp/presets"),
        ]))
        .unwrap();

        assert_eq!(config.result_name, "Merged");
        assert_eq!(config.default_selection, 3);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/presets"));
    }

    #[test]
    fn test_from_lookup_empty_keeps_defaults() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_selection() {
        for raw in ["zero", "0", "-1"] {
            let result = SessionConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_SELECTION, raw)]));
            match result {
                Err(PresetError::Configuration { field, .. }) => {
                    assert_eq!(field.as_deref(), Some("default_selection"));
                }
                other => panic!("Expected Configuration error for '{}', got: {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_builder_from_existing_config() {
        let base = SessionConfigBuilder::new().default_selection(4).build().unwrap();
        let config = SessionConfigBuilder::from(base).result_name("Merged").build().unwrap();

        assert_eq!(config.result_name, "Merged");
        assert_eq!(config.default_selection, 4);
    }

    #[test]
    fn test_builder_rejects_blank_result_name() {
        let result = SessionConfigBuilder::new().result_name("  ").build();
        assert!(matches!(result, Err(PresetError::Configuration { .. })));
    }
}
