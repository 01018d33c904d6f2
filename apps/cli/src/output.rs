//! Text and JSON rendering of command results

use crate::commands::{display_path, RunOutcome};
use modset::{LoadedPreset, ModRecord, ResultSet, Session};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PresetListing<'a> {
    index: usize,
    file_name: &'a str,
    label: &'a str,
    mod_count: usize,
    mods: &'a [ModRecord],
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    operation: String,
    preset_name: &'a str,
    selection: &'a [usize],
    mod_count: usize,
    mods: &'a [ModRecord],
    written_to: Option<String>,
}

fn mod_line(record: &ModRecord) -> String {
    if record.has_link() {
        format!("    {} — {}\n", record.name, record.link)
    } else {
        format!("    {}\n", record.name)
    }
}

/// `[index] label — N mods` per preset, optionally followed by its mods
pub fn format_presets(presets: &[LoadedPreset], show_mods: bool) -> String {
    let mut out = String::new();
    for (index, loaded) in presets.iter().enumerate() {
        out.push_str(&format!(
            "[{}] {} — {} mods\n",
            index,
            loaded.display_label(),
            loaded.preset.mod_count()
        ));
        if show_mods {
            for record in &loaded.preset.mods {
                out.push_str(&mod_line(record));
            }
        }
    }
    out
}

/// Summary line followed by one line per mod
pub fn format_result(result: &ResultSet) -> String {
    let mut out = format!("{}\n", result.summary());
    for record in &result.mods {
        out.push_str(&mod_line(record));
    }
    out
}

pub fn format_run(outcome: &RunOutcome) -> String {
    let mut out = format_result(&outcome.result);
    if let Some(path) = &outcome.written_to {
        out.push_str(&format!("💾 Saved to {}\n", display_path(path)));
    }
    out
}

pub fn inspect_json(session: &Session) -> serde_json::Result<String> {
    let listings: Vec<PresetListing<'_>> = session
        .presets()
        .iter()
        .enumerate()
        .map(|(index, loaded)| PresetListing {
            index,
            file_name: &loaded.file_name,
            label: loaded.display_label(),
            mod_count: loaded.preset.mod_count(),
            mods: &loaded.preset.mods,
        })
        .collect();
    serde_json::to_string_pretty(&listings)
}

pub fn run_json(outcome: &RunOutcome) -> serde_json::Result<String> {
    let report = RunReport {
        operation: outcome.result.operation.to_string(),
        preset_name: &outcome.result.name,
        selection: &outcome.selection,
        mod_count: outcome.result.mod_count(),
        mods: &outcome.result.mods,
        written_to: outcome.written_to.as_deref().map(display_path),
    };
    serde_json::to_string_pretty(&report)
}
