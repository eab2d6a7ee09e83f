//! Default values that do not belong to a single focused subsystem.

use crate::commands::{CodeLensCommand, StatusBarCommand};
use crate::config::{LensCommandConfig, Toggle};
use crate::types::{BlameHighlightLocation, CodeLensLocation};

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

pub fn toggle_on() -> Toggle {
    Toggle { enabled: true }
}

pub fn toggle_off() -> Toggle {
    Toggle { enabled: false }
}

// ── Blame ──────────────────────────────────────────────────────────────────

pub fn blame_highlight_locations() -> Vec<BlameHighlightLocation> {
    vec![
        BlameHighlightLocation::Gutter,
        BlameHighlightLocation::Line,
        BlameHighlightLocation::OverviewRuler,
    ]
}

// ── Code lens ──────────────────────────────────────────────────────────────

pub fn code_lens_locations() -> Vec<CodeLensLocation> {
    vec![CodeLensLocation::Document, CodeLensLocation::Containers]
}

pub fn recent_change_lens() -> LensCommandConfig {
    LensCommandConfig {
        enabled: true,
        command: CodeLensCommand::ShowQuickCommitFileDetails,
    }
}

pub fn authors_lens() -> LensCommandConfig {
    LensCommandConfig {
        enabled: true,
        command: CodeLensCommand::ToggleFileBlame,
    }
}

// ── Status bar ─────────────────────────────────────────────────────────────

pub fn status_bar_command() -> StatusBarCommand {
    StatusBarCommand::ShowQuickCommitDetails
}

// ── Advanced ───────────────────────────────────────────────────────────────

/// Lines per document before the revision cache gives up on caching it.
pub fn caching_max_lines() -> u32 {
    16384
}

/// Entries shown in quick history pickers.
pub fn max_quick_history() -> u32 {
    200
}

/// Version control executable; resolved against `PATH` by the host layer.
pub fn git_path() -> String {
    "git".to_string()
}
