//! The configuration snapshot and its section structs.
//!
//! One `Config` is assembled per settings-change notification and never
//! mutated afterwards; consumers hold an `Arc<Config>` and re-fetch from the
//! store after the next notification rather than keep the reference.

use serde::{Deserialize, Serialize};

use crate::commands::{CodeLensCommand, StatusBarCommand};
use crate::themes::ThemeConfig;
use crate::types::{
    BlameHighlightLocation, CodeLensLanguageScope, CodeLensLocation, FileAnnotationKind,
    HeatmapLocation, LineAnnotationKind, OutputLevel, StatusBarAlignment,
};

/// A bare enable/disable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Toggle {
    pub enabled: bool,
}

// ============================================================================
// Annotations
// ============================================================================

/// Age heatmap stripe on the gutter annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatmapConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    pub location: HeatmapLocation,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            location: HeatmapLocation::Left,
        }
    }
}

/// Hover behavior attached to the gutter annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GutterHoverConfig {
    /// Show full commit details in the hover panel.
    #[serde(default = "crate::defaults::bool_true")]
    pub details: bool,
    /// Trigger the hover anywhere on the line, not only over the gutter.
    pub whole_line: bool,
}

impl Default for GutterHoverConfig {
    fn default() -> Self {
        Self {
            details: true,
            whole_line: false,
        }
    }
}

/// Whole-file gutter annotation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GutterAnnotationConfig {
    /// Annotation line format; see the format token reference.
    #[serde(default = "crate::defaults::gutter_format")]
    pub format: String,
    /// Absolute date rendering for `${date}` tokens.
    #[serde(default = "crate::defaults::date_format")]
    pub date_format: String,
    /// Collapse repeated commits to a single annotated line.
    #[serde(default = "crate::defaults::bool_true")]
    pub compact: bool,
    pub heatmap: HeatmapConfig,
    pub hover: GutterHoverConfig,
}

impl Default for GutterAnnotationConfig {
    fn default() -> Self {
        Self {
            format: crate::defaults::gutter_format(),
            date_format: crate::defaults::date_format(),
            compact: true,
            heatmap: HeatmapConfig::default(),
            hover: GutterHoverConfig::default(),
        }
    }
}

/// Whole-file hover annotation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileHoverAnnotationConfig {
    #[serde(default = "crate::defaults::toggle_on")]
    pub heatmap: Toggle,
    /// Trigger the hover anywhere on the line.
    pub whole_line: bool,
}

impl Default for FileHoverAnnotationConfig {
    fn default() -> Self {
        Self {
            heatmap: Toggle { enabled: true },
            whole_line: false,
        }
    }
}

/// File-level annotation surfaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileAnnotationsConfig {
    pub gutter: GutterAnnotationConfig,
    pub hover: FileHoverAnnotationConfig,
}

/// Hover behavior of the current-line annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineHoverConfig {
    /// Show full commit details in the hover panel.
    #[serde(default = "crate::defaults::bool_true")]
    pub details: bool,
    /// Show the commit's change summary in the hover panel.
    #[serde(default = "crate::defaults::bool_true")]
    pub changes: bool,
}

impl Default for LineHoverConfig {
    fn default() -> Self {
        Self {
            details: true,
            changes: true,
        }
    }
}

/// Hover behavior attached to the trailing line marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailingHoverConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub changes: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub details: bool,
    pub whole_line: bool,
}

impl Default for TrailingHoverConfig {
    fn default() -> Self {
        Self {
            changes: true,
            details: true,
            whole_line: false,
        }
    }
}

/// Trailing line marker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailingAnnotationConfig {
    #[serde(default = "crate::defaults::trailing_format")]
    pub format: String,
    #[serde(default = "crate::defaults::date_format")]
    pub date_format: String,
    pub hover: TrailingHoverConfig,
}

impl Default for TrailingAnnotationConfig {
    fn default() -> Self {
        Self {
            format: crate::defaults::trailing_format(),
            date_format: crate::defaults::date_format(),
            hover: TrailingHoverConfig::default(),
        }
    }
}

/// Line-level annotation surfaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineAnnotationsConfig {
    pub hover: LineHoverConfig,
    pub trailing: TrailingAnnotationConfig,
}

/// The annotations section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationsConfig {
    pub file: FileAnnotationsConfig,
    pub line: LineAnnotationsConfig,
}

// ============================================================================
// Blame
// ============================================================================

/// Current-commit line highlight while file blame is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineHighlightConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    #[serde(default = "crate::defaults::blame_highlight_locations")]
    pub locations: Vec<BlameHighlightLocation>,
}

impl Default for LineHighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locations: crate::defaults::blame_highlight_locations(),
        }
    }
}

/// Whole-file blame settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileBlameConfig {
    pub annotation_type: FileAnnotationKind,
    pub line_highlight: LineHighlightConfig,
}

/// Current-line blame settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineBlameConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    pub annotation_type: LineAnnotationKind,
}

impl Default for LineBlameConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            annotation_type: LineAnnotationKind::Trailing,
        }
    }
}

/// The blame section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlameConfig {
    pub file: FileBlameConfig,
    pub line: LineBlameConfig,
}

// ============================================================================
// Code lens
// ============================================================================

/// One lens kind: whether it renders and what its click invokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensCommandConfig {
    pub enabled: bool,
    pub command: CodeLensCommand,
}

/// The codeLens section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeLensConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    /// The "recent change" lens showing the latest commit for the range.
    #[serde(default = "crate::defaults::recent_change_lens")]
    pub recent_change: LensCommandConfig,
    /// The "authors" lens showing how many authors touched the range.
    #[serde(default = "crate::defaults::authors_lens")]
    pub authors: LensCommandConfig,
    /// Global lens placements, overridable per language.
    #[serde(default = "crate::defaults::code_lens_locations")]
    pub locations: Vec<CodeLensLocation>,
    /// Symbol names lenses attach to when `locations` contains `custom`.
    pub custom_location_symbols: Vec<String>,
    /// Per-language placement overrides, resolved in declared order.
    pub per_language_locations: Vec<CodeLensLanguageScope>,
    /// Render lens ranges in the output channel.
    pub debug: bool,
}

impl Default for CodeLensConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            recent_change: crate::defaults::recent_change_lens(),
            authors: crate::defaults::authors_lens(),
            locations: crate::defaults::code_lens_locations(),
            custom_location_symbols: Vec::new(),
            per_language_locations: Vec::new(),
            debug: false,
        }
    }
}

// ============================================================================
// Status bar
// ============================================================================

/// The statusBar section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusBarConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    pub alignment: StatusBarAlignment,
    #[serde(default = "crate::defaults::status_bar_command")]
    pub command: StatusBarCommand,
    #[serde(default = "crate::defaults::status_bar_format")]
    pub format: String,
    #[serde(default = "crate::defaults::date_format")]
    pub date_format: String,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alignment: StatusBarAlignment::Left,
            command: crate::defaults::status_bar_command(),
            format: crate::defaults::status_bar_format(),
            date_format: crate::defaults::date_format(),
        }
    }
}

// ============================================================================
// Advanced
// ============================================================================

/// Revision cache limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CachingConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    /// Documents longer than this are not cached.
    #[serde(default = "crate::defaults::caching_max_lines")]
    pub max_lines: u32,
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: crate::defaults::caching_max_lines(),
        }
    }
}

/// Explorer context menu visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerContextMenus {
    #[serde(default = "crate::defaults::bool_true")]
    pub file_diff: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub history: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub remote: bool,
}

impl Default for ExplorerContextMenus {
    fn default() -> Self {
        Self {
            file_diff: true,
            history: true,
            remote: true,
        }
    }
}

/// Editor context menu visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorContextMenus {
    #[serde(default = "crate::defaults::bool_true")]
    pub blame: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub copy: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub details: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub file_diff: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub history: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub line_diff: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub remote: bool,
}

impl Default for EditorContextMenus {
    fn default() -> Self {
        Self {
            blame: true,
            copy: true,
            details: true,
            file_diff: true,
            history: true,
            line_diff: true,
            remote: true,
        }
    }
}

/// Editor title menu visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorTitleMenus {
    #[serde(default = "crate::defaults::bool_true")]
    pub blame: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub file_diff: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub history: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub status: bool,
}

impl Default for EditorTitleMenus {
    fn default() -> Self {
        Self {
            blame: true,
            file_diff: true,
            history: true,
            status: true,
        }
    }
}

/// Editor title context menu visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorTitleContextMenus {
    #[serde(default = "crate::defaults::bool_true")]
    pub blame: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub file_diff: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub history: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub remote: bool,
}

impl Default for EditorTitleContextMenus {
    fn default() -> Self {
        Self {
            blame: true,
            file_diff: true,
            history: true,
            remote: true,
        }
    }
}

/// Menu contribution visibility.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenusConfig {
    pub explorer_context: ExplorerContextMenus,
    pub editor_context: EditorContextMenus,
    pub editor_title: EditorTitleMenus,
    pub editor_title_context: EditorTitleContextMenus,
}

/// Quick pick behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickPickConfig {
    #[serde(default = "crate::defaults::bool_true")]
    pub close_on_focus_out: bool,
}

impl Default for QuickPickConfig {
    fn default() -> Self {
        Self {
            close_on_focus_out: true,
        }
    }
}

/// The advanced section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedConfig {
    pub caching: CachingConfig,
    /// Version control executable invoked by the host layer.
    #[serde(default = "crate::defaults::git_path")]
    pub git: String,
    /// Respect ignore files when computing history.
    #[serde(default = "crate::defaults::toggle_on")]
    pub gitignore: Toggle,
    #[serde(default = "crate::defaults::max_quick_history")]
    pub max_quick_history: u32,
    pub menus: MenusConfig,
    pub quick_pick: QuickPickConfig,
    /// Workaround: toggle whitespace rendering while annotating.
    pub toggle_whitespace: Toggle,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            caching: CachingConfig::default(),
            git: crate::defaults::git_path(),
            gitignore: Toggle { enabled: true },
            max_quick_history: crate::defaults::max_quick_history(),
            menus: MenusConfig::default(),
            quick_pick: QuickPickConfig::default(),
            toggle_whitespace: Toggle { enabled: false },
        }
    }
}

// ============================================================================
// The snapshot
// ============================================================================

/// One immutable, fully resolved configuration snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub annotations: AnnotationsConfig,
    pub blame: BlameConfig,
    pub code_lens: CodeLensConfig,
    pub status_bar: StatusBarConfig,
    pub theme: ThemeConfig,
    /// Extra diagnostics in the output channel.
    pub debug: bool,
    /// Opt in to pre-release behavior.
    pub insiders: bool,
    pub output_level: OutputLevel,
    pub advanced: AdvancedConfig,
}
