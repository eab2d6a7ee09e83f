//! Configuration system for the RevLens revision annotations extension.
//!
//! RevLens annotates source lines with revision-history metadata (author,
//! change summary, timestamps) in gutters, hover panels, the status bar, and
//! inline code lenses. This crate is the extension's configuration
//! subsystem. It includes:
//!
//! - Closed option vocabularies with exact-match validation
//! - A fail-fast command binding table checked against the host's registry
//! - Dark/light theme defaults with field-by-field override merging
//! - Per-language code lens scope resolution
//! - Wholesale snapshot assembly with recover-to-default warnings
//! - Snapshot publication driven by host change notifications
//!
//! The crate performs no I/O of its own: the host delivers raw settings
//! values and change notifications, and consumers read the published
//! immutable snapshot through [`ConfigStore`].

pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod options;
pub mod store;
pub mod themes;
mod types;

// Re-export main types for convenience
pub use commands::{CodeLensCommand, CommandBindings, CommandRegistry, StatusBarCommand};
pub use config::{
    AdvancedConfig, AnnotationsConfig, BlameConfig, CodeLensConfig, Config, StatusBarConfig,
};
pub use error::{ConfigError, InvalidOption, SettingWarning};
pub use options::{ConfigOption, canonicalize};
pub use store::ConfigStore;
pub use themes::{
    ColorValue, GutterAppearance, GutterAppearancePatch, LineHighlightAppearance,
    LineHighlightAppearancePatch, ThemeConfig, ThemeVariant, TrailingAppearance,
    TrailingAppearancePatch, VariantPair,
};

// Re-export option vocabularies
pub use types::{
    BlameHighlightLocation, CodeLensLanguageScope, CodeLensLocation, FileAnnotationKind,
    HeatmapLocation, LineAnnotationKind, OutputLevel, StatusBarAlignment, resolve_language_scope,
};
