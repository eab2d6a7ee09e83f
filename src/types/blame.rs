//! Blame line highlight placement.

use serde::{Deserialize, Serialize};

use crate::options::ConfigOption;

/// Where the current-commit line highlight is drawn while file blame is
/// active. The setting holds a set of these; all three are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum BlameHighlightLocation {
    /// Highlight the gutter annotation
    #[default]
    Gutter,
    /// Highlight the line itself
    Line,
    /// Mark the line in the overview ruler
    OverviewRuler,
}

impl BlameHighlightLocation {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BlameHighlightLocation::Gutter => "Gutter",
            BlameHighlightLocation::Line => "Line",
            BlameHighlightLocation::OverviewRuler => "Overview Ruler",
        }
    }
}

impl ConfigOption for BlameHighlightLocation {
    const DOMAIN: &'static str = "blame.file.lineHighlight.locations";

    fn all() -> &'static [Self] {
        &[
            BlameHighlightLocation::Gutter,
            BlameHighlightLocation::Line,
            BlameHighlightLocation::OverviewRuler,
        ]
    }

    fn tag(self) -> &'static str {
        match self {
            BlameHighlightLocation::Gutter => "gutter",
            BlameHighlightLocation::Line => "line",
            BlameHighlightLocation::OverviewRuler => "overviewRuler",
        }
    }
}
