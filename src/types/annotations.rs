//! Annotation surface types.

use serde::{Deserialize, Serialize};

use crate::options::ConfigOption;

/// How whole-file blame annotations are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FileAnnotationKind {
    /// Revision metadata in the gutter beside each line (default)
    #[default]
    Gutter,
    /// Revision metadata in a hover panel over each line
    Hover,
}

impl FileAnnotationKind {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FileAnnotationKind::Gutter => "Gutter",
            FileAnnotationKind::Hover => "Hover",
        }
    }
}

impl ConfigOption for FileAnnotationKind {
    const DOMAIN: &'static str = "blame.file.annotationType";

    fn all() -> &'static [Self] {
        &[FileAnnotationKind::Gutter, FileAnnotationKind::Hover]
    }

    fn tag(self) -> &'static str {
        match self {
            FileAnnotationKind::Gutter => "gutter",
            FileAnnotationKind::Hover => "hover",
        }
    }
}

/// How the current-line blame annotation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LineAnnotationKind {
    /// Trailing marker at the end of the line (default)
    #[default]
    Trailing,
    /// Hover panel over the line
    Hover,
}

impl LineAnnotationKind {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LineAnnotationKind::Trailing => "Trailing",
            LineAnnotationKind::Hover => "Hover",
        }
    }
}

impl ConfigOption for LineAnnotationKind {
    const DOMAIN: &'static str = "blame.line.annotationType";

    fn all() -> &'static [Self] {
        &[LineAnnotationKind::Trailing, LineAnnotationKind::Hover]
    }

    fn tag(self) -> &'static str {
        match self {
            LineAnnotationKind::Trailing => "trailing",
            LineAnnotationKind::Hover => "hover",
        }
    }
}

/// Which side of the gutter annotation carries the age heatmap stripe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum HeatmapLocation {
    /// Stripe on the left edge of the gutter annotation (default)
    #[default]
    Left,
    /// Stripe on the right edge
    Right,
}

impl HeatmapLocation {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            HeatmapLocation::Left => "Left",
            HeatmapLocation::Right => "Right",
        }
    }
}

impl ConfigOption for HeatmapLocation {
    const DOMAIN: &'static str = "annotations.file.gutter.heatmap.location";

    fn all() -> &'static [Self] {
        &[HeatmapLocation::Left, HeatmapLocation::Right]
    }

    fn tag(self) -> &'static str {
        match self {
            HeatmapLocation::Left => "left",
            HeatmapLocation::Right => "right",
        }
    }
}
