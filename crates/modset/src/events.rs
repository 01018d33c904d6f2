//! Session event reporting

use crate::set_ops::SetOperation;
use std::sync::Arc;

/// Callback receiving session events
pub type EventCallback = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Events emitted while a session loads, combines and exports presets
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PresetLoaded {
        index: usize,
        file_name: String,
        preset_name: String,
        mod_count: usize,
    },
    OperationCompleted {
        operation: SetOperation,
        selected: Vec<usize>,
        mod_count: usize,
    },
    Exported {
        file_name: String,
        bytes: usize,
    },
}

/// Trait for event reporting with per-event hooks
pub trait EventReporter: Send + Sync {
    fn on_preset_loaded(
        &self,
        _index: usize,
        _file_name: &str,
        _preset_name: &str,
        _mod_count: usize,
    ) {
    }

    fn on_operation_completed(
        &self,
        _operation: SetOperation,
        _selected: &[usize],
        _mod_count: usize,
    ) {
    }

    fn on_exported(&self, _file_name: &str, _bytes: usize) {}
}

/// Extension trait to convert an EventReporter to an EventCallback
pub trait IntoEventCallback {
    fn into_callback(self) -> EventCallback;
}

impl<T: EventReporter + 'static> IntoEventCallback for T {
    fn into_callback(self) -> EventCallback {
        Arc::new(move |event| match event {
            SessionEvent::PresetLoaded { index, file_name, preset_name, mod_count } => {
                self.on_preset_loaded(index, &file_name, &preset_name, mod_count);
            }
            SessionEvent::OperationCompleted { operation, selected, mod_count } => {
                self.on_operation_completed(operation, &selected, mod_count);
            }
            SessionEvent::Exported { file_name, bytes } => {
                self.on_exported(&file_name, bytes);
            }
        })
    }
}

/// Console reporter printing one line per event
#[derive(Debug, Default)]
pub struct ConsoleEventReporter {
    pub verbose: bool,
}

impl ConsoleEventReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl EventReporter for ConsoleEventReporter {
    fn on_preset_loaded(
        &self,
        index: usize,
        file_name: &str,
        preset_name: &str,
        mod_count: usize,
    ) {
        if self.verbose {
            println!("📄 [{}] {} ({}): {} mods", index, preset_name, file_name, mod_count);
        }
    }

    fn on_operation_completed(
        &self,
        operation: SetOperation,
        selected: &[usize],
        mod_count: usize,
    ) {
        if self.verbose {
            println!("⚙️ {} of {:?}: {} mods", operation, selected, mod_count);
        }
    }

    fn on_exported(&self, file_name: &str, bytes: usize) {
        println!("✅ Exported {} ({} bytes)", file_name, bytes);
    }
}

/// Reporter that does nothing
#[derive(Debug, Default)]
pub struct NullEventReporter;

impl EventReporter for NullEventReporter {}
