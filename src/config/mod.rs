//! Configuration tree assembly.
//!
//! # Sub-modules
//!
//! - [`config_struct`] — The `Config` snapshot and its section structs
//! - [`reader`]        — Leaf extraction over the host's raw settings value
//! - [`assemble`]      — `Config::assemble`: raw value in, snapshot + warnings out

pub mod assemble;
pub mod config_struct;
mod reader;

pub use config_struct::{
    AdvancedConfig, AnnotationsConfig, BlameConfig, CachingConfig, CodeLensConfig, Config,
    EditorContextMenus, EditorTitleContextMenus, EditorTitleMenus, ExplorerContextMenus,
    FileAnnotationsConfig, FileBlameConfig, FileHoverAnnotationConfig, GutterAnnotationConfig,
    GutterHoverConfig, HeatmapConfig, LensCommandConfig, LineAnnotationsConfig, LineBlameConfig,
    LineHighlightConfig, LineHoverConfig, MenusConfig, QuickPickConfig, StatusBarConfig, Toggle,
    TrailingAnnotationConfig, TrailingHoverConfig,
};
