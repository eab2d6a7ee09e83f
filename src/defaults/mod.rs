//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on the
//! configuration structs and as fallbacks by the settings reader. Everything
//! is re-exported from this module so call-sites use `crate::defaults::*`.

mod format;
mod misc;

// ── Format strings ─────────────────────────────────────────────────────────
pub use format::{date_format, gutter_format, status_bar_format, trailing_format};

// ── Everything else ────────────────────────────────────────────────────────
pub use misc::{
    authors_lens, blame_highlight_locations, bool_false, bool_true, caching_max_lines,
    code_lens_locations, git_path, max_quick_history, recent_change_lens, status_bar_command,
    toggle_off, toggle_on,
};
