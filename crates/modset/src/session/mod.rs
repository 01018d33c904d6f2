//! Preset session
//!
//! A [`Session`] is the caller-owned context that ties the pipeline
//! together: it holds the loaded presets, runs one set operation at a time
//! over a selection of them, and renders the latest result back into a
//! preset document. The parser, set operations and renderer stay stateless;
//! everything they need is passed in from here.

use crate::config::SessionConfig;
use crate::error::{FileOperation, PresetError, Result};
use crate::events::{EventCallback, SessionEvent};
use crate::parse_preset::{ModRecord, Preset, PresetParser};
use crate::render::PresetRenderer;
use crate::set_ops::SetOperation;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A parsed preset together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedPreset {
    pub file_name: String,
    pub preset: Preset,
}

impl LoadedPreset {
    /// Preset name, or the file name when the document names no preset
    pub fn display_label(&self) -> &str {
        if self.preset.preset_name.is_empty() {
            &self.file_name
        } else {
            &self.preset.preset_name
        }
    }
}

/// Output of the most recent set operation
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub name: String,
    pub operation: SetOperation,
    pub mods: Vec<ModRecord>,
    /// Document of the first selected preset, used as the render template
    pub template: Option<String>,
}

impl ResultSet {
    pub fn mod_count(&self) -> usize {
        self.mods.len()
    }

    /// One-line description, e.g. `3 mods in result (preset: CombinedPreset)`
    pub fn summary(&self) -> String {
        format!("{} mods in result (preset: {})", self.mods.len(), self.name)
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.html", self.name)
    }

    /// Render the result into its template
    ///
    /// A missing template renders against an empty document, which yields
    /// an empty export.
    pub fn render(&self) -> ExportedPreset {
        let template = self.template.as_deref().unwrap_or_default();
        let outcome = PresetRenderer::new().render(template, &self.mods, &self.name);
        ExportedPreset {
            file_name: self.export_file_name(),
            html: outcome.html,
        }
    }
}

/// A rendered preset document ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPreset {
    pub file_name: String,
    pub html: String,
}

impl ExportedPreset {
    /// Write the document into `dir` under its export file name
    pub async fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.write_to(&path).await?;
        Ok(path)
    }

    /// Write the document to `path`, creating parent directories if needed
    pub async fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PresetError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: FileOperation::CreateDir,
                    source,
                })?;
        }

        tokio::fs::write(path, self.html.as_bytes())
            .await
            .map_err(|source| PresetError::FileSystem {
                path: path.to_path_buf(),
                operation: FileOperation::Write,
                source,
            })?;

        info!("Wrote {} ({} bytes)", path.display(), self.html.len());
        Ok(())
    }
}

/// Caller-owned preset session
pub struct Session {
    config: SessionConfig,
    parser: PresetParser,
    presets: Vec<LoadedPreset>,
    result: Option<ResultSet>,
    callback: Option<EventCallback>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("presets", &self.presets.len())
            .field("result", &self.result.as_ref().map(|r| r.mods.len()))
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            parser: PresetParser::new(),
            presets: Vec::new(),
            result: None,
            callback: None,
        }
    }

    /// Attach an event callback and return self for chaining
    pub fn with_callback(mut self, callback: EventCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn presets(&self) -> &[LoadedPreset] {
        &self.presets
    }

    pub fn result(&self) -> Option<&ResultSet> {
        self.result.as_ref()
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(callback) = &self.callback {
            callback(event);
        }
    }

    /// Parse one document and append it to the loaded presets
    pub fn load<N: Into<String>>(&mut self, file_name: N, text: &str) -> &LoadedPreset {
        let loaded = LoadedPreset {
            file_name: file_name.into(),
            preset: self.parser.parse(text),
        };
        let index = self.presets.len();

        self.emit(SessionEvent::PresetLoaded {
            index,
            file_name: loaded.file_name.clone(),
            preset_name: loaded.preset.preset_name.clone(),
            mod_count: loaded.preset.mod_count(),
        });

        self.presets.push(loaded);
        &self.presets[index]
    }

    /// Replace all loaded presets with a new batch of `(file_name, text)` pairs
    pub fn load_all<I, N, T>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        self.presets.clear();
        for (file_name, text) in files {
            self.load(file_name, text.as_ref());
        }
        debug!("Loaded {} presets", self.presets.len());
        self.presets.len()
    }

    /// Read preset files and replace the loaded presets with them
    ///
    /// All files are read before anything is replaced, so a failed read
    /// leaves the session as it was.
    pub async fn load_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<usize> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| PresetError::FileSystem {
                    path: path.to_path_buf(),
                    operation: FileOperation::Read,
                    source,
                })?;

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let text = String::from_utf8(bytes).map_err(|e| PresetError::Unparseable {
                source_name: file_name.clone(),
                reason: format!("not UTF-8 text ({})", e.utf8_error()),
            })?;
            files.push((file_name, text));
        }

        Ok(self.load_all(files))
    }

    /// Indices selected when the caller does not pick any
    pub fn default_selection(&self) -> Vec<usize> {
        (0..self.presets.len().min(self.config.default_selection)).collect()
    }

    /// Run `operation` over the selected presets, replacing any previous result
    ///
    /// Selection order matters: for difference the first index is A and the
    /// second is B, and the first selected preset supplies the template.
    pub fn run(&mut self, operation: SetOperation, selection: &[usize]) -> Result<&ResultSet> {
        if selection.is_empty() {
            return Err(PresetError::EmptySelection);
        }
        if let Some(&index) = selection.iter().find(|&&i| i >= self.presets.len()) {
            return Err(PresetError::UnknownPreset {
                index,
                loaded: self.presets.len(),
            });
        }

        let operands: Vec<&[ModRecord]> = selection
            .iter()
            .map(|&i| self.presets[i].preset.mods.as_slice())
            .collect();
        let mods = operation.apply(&operands)?;

        let result = ResultSet {
            name: self.config.result_name.clone(),
            operation,
            mods,
            template: Some(self.presets[selection[0]].preset.original_html.clone()),
        };

        self.emit(SessionEvent::OperationCompleted {
            operation,
            selected: selection.to_vec(),
            mod_count: result.mod_count(),
        });
        info!("{}", result.summary());

        let stored = self.result.insert(result);
        Ok(&*stored)
    }

    /// Render the current result into a preset document
    pub fn export(&self) -> Result<ExportedPreset> {
        let result = self.result.as_ref().ok_or(PresetError::NoResult)?;
        let exported = result.render();

        self.emit(SessionEvent::Exported {
            file_name: exported.file_name.clone(),
            bytes: exported.html.len(),
        });
        Ok(exported)
    }
}
