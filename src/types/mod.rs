//! Configuration types and enums.
//!
//! This module is split into focused sub-modules by domain:
//! - `annotations` — File/line annotation kinds and heatmap placement
//! - `blame`       — Blame line highlight placement
//! - `code_lens`   — Lens placement, per-language scopes and their resolution
//! - `ui`          — Status bar alignment and output verbosity

pub mod annotations;
pub mod blame;
pub mod code_lens;
pub mod ui;

pub use annotations::{FileAnnotationKind, HeatmapLocation, LineAnnotationKind};
pub use blame::BlameHighlightLocation;
pub use code_lens::{CodeLensLanguageScope, CodeLensLocation, resolve_language_scope};
pub use ui::{OutputLevel, StatusBarAlignment};
