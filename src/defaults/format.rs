//! Default format strings for annotation rendering.
//!
//! Tokens are `${field}` with an optional `|width` truncation suffix; the
//! annotation engine expands them against the line's revision metadata.

/// Gutter annotation line format.
pub fn gutter_format() -> String {
    "${message|40} ${ago|14} ${author}".to_string()
}

/// Trailing line marker format.
pub fn trailing_format() -> String {
    "${author}, ${ago} \u{2022} ${message}".to_string()
}

/// Status bar blame entry format.
pub fn status_bar_format() -> String {
    "${author}, ${ago}".to_string()
}

/// Absolute date rendering used when a format requests `${date}`.
pub fn date_format() -> String {
    "MMMM Do, YYYY h:mma".to_string()
}
