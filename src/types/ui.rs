//! Status bar and logging verbosity types.

use serde::{Deserialize, Serialize};

use crate::options::ConfigOption;

/// Which side of the status bar the blame entry docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum StatusBarAlignment {
    /// Left side of the status bar (default)
    #[default]
    Left,
    /// Right side of the status bar
    Right,
}

impl StatusBarAlignment {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusBarAlignment::Left => "Left",
            StatusBarAlignment::Right => "Right",
        }
    }
}

impl ConfigOption for StatusBarAlignment {
    const DOMAIN: &'static str = "statusBar.alignment";

    fn all() -> &'static [Self] {
        &[StatusBarAlignment::Left, StatusBarAlignment::Right]
    }

    fn tag(self) -> &'static str {
        match self {
            StatusBarAlignment::Left => "left",
            StatusBarAlignment::Right => "right",
        }
    }
}

/// Verbosity of the extension's output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum OutputLevel {
    /// No output
    Silent,
    /// Failures only (default)
    #[default]
    Errors,
    /// Everything, including recovered settings and timings
    Verbose,
}

impl OutputLevel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputLevel::Silent => "Silent",
            OutputLevel::Errors => "Errors",
            OutputLevel::Verbose => "Verbose",
        }
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            OutputLevel::Silent => log::LevelFilter::Off,
            OutputLevel::Errors => log::LevelFilter::Error,
            OutputLevel::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl ConfigOption for OutputLevel {
    const DOMAIN: &'static str = "outputLevel";

    fn all() -> &'static [Self] {
        &[OutputLevel::Silent, OutputLevel::Errors, OutputLevel::Verbose]
    }

    fn tag(self) -> &'static str {
        match self {
            OutputLevel::Silent => "silent",
            OutputLevel::Errors => "errors",
            OutputLevel::Verbose => "verbose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_level_maps_to_level_filter() {
        assert_eq!(OutputLevel::Silent.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(OutputLevel::Errors.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(
            OutputLevel::Verbose.to_level_filter(),
            log::LevelFilter::Debug
        );
    }
}
