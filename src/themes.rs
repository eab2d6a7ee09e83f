//! Theme appearance records, dark/light defaults, and override merging.
//!
//! Each annotation surface (gutter, trailing line marker, blame line
//! highlight) has one appearance record per theme variant. The built-in
//! defaults live here; user overrides arrive as partial patches and are
//! merged field by field.

use serde::{Deserialize, Serialize};

/// A theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark editor themes
    Dark,
    /// Light editor themes
    Light,
}

/// A themable color slot.
///
/// `Fixed` carries a CSS color string handed verbatim to the renderer.
/// `Auto` means "derive the color from annotation data (e.g. the commit
/// author) at render time" — it is a real value, not an unset field, and it
/// survives merging unchanged; this layer never substitutes a concrete color
/// for it. On the wire `Auto` is JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ColorValue {
    /// Fixed CSS color string, e.g. `rgb(190, 190, 190)`.
    Fixed(String),
    /// Derive the color from annotation data at render time.
    Auto,
}

impl ColorValue {
    /// Convenience constructor for a fixed color.
    pub fn fixed(color: &str) -> Self {
        ColorValue::Fixed(color.to_string())
    }

    /// Whether this slot derives its color from annotation data.
    pub fn is_auto(&self) -> bool {
        matches!(self, ColorValue::Auto)
    }
}

impl From<Option<String>> for ColorValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(color) => ColorValue::Fixed(color),
            None => ColorValue::Auto,
        }
    }
}

impl From<ColorValue> for Option<String> {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Fixed(color) => Some(color),
            ColorValue::Auto => None,
        }
    }
}

// ============================================================================
// Gutter surface
// ============================================================================

/// Gutter annotation colors for one theme variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GutterAppearance {
    /// Background behind the gutter annotation text.
    pub background_color: ColorValue,
    /// Annotation text color.
    pub foreground_color: ColorValue,
    /// Text color for lines with uncommitted changes.
    pub uncommitted_foreground_color: ColorValue,
}

impl GutterAppearance {
    /// Built-in defaults for the gutter surface.
    pub fn defaults(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self {
                background_color: ColorValue::Auto,
                foreground_color: ColorValue::fixed("rgb(190, 190, 190)"),
                uncommitted_foreground_color: ColorValue::Auto,
            },
            ThemeVariant::Light => Self {
                background_color: ColorValue::Auto,
                foreground_color: ColorValue::fixed("rgb(116, 116, 116)"),
                uncommitted_foreground_color: ColorValue::Auto,
            },
        }
    }
}

/// Partial user override of [`GutterAppearance`].
///
/// Built by the settings reader, which maps JSON `null` to `Some(Auto)` and
/// an absent key to `None`; a serde derive would collapse the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GutterAppearancePatch {
    pub background_color: Option<ColorValue>,
    pub foreground_color: Option<ColorValue>,
    pub uncommitted_foreground_color: Option<ColorValue>,
}

impl GutterAppearancePatch {
    /// Merge this patch over `defaults`, field by field. Present fields
    /// (including an explicit `Auto`) replace the default; absent fields keep
    /// it. Idempotent and right-biased toward the patch.
    pub fn merge(&self, defaults: &GutterAppearance) -> GutterAppearance {
        GutterAppearance {
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| defaults.background_color.clone()),
            foreground_color: self
                .foreground_color
                .clone()
                .unwrap_or_else(|| defaults.foreground_color.clone()),
            uncommitted_foreground_color: self
                .uncommitted_foreground_color
                .clone()
                .unwrap_or_else(|| defaults.uncommitted_foreground_color.clone()),
        }
    }
}

// ============================================================================
// Trailing line marker surface
// ============================================================================

/// Trailing line annotation colors for one theme variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingAppearance {
    /// Background behind the trailing annotation text.
    pub background_color: ColorValue,
    /// Annotation text color.
    pub foreground_color: ColorValue,
}

impl TrailingAppearance {
    /// Built-in defaults for the trailing line marker surface. Both variants
    /// share the same muted gray.
    pub fn defaults(_variant: ThemeVariant) -> Self {
        Self {
            background_color: ColorValue::Auto,
            foreground_color: ColorValue::fixed("rgba(153, 153, 153, 0.35)"),
        }
    }
}

/// Partial user override of [`TrailingAppearance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailingAppearancePatch {
    pub background_color: Option<ColorValue>,
    pub foreground_color: Option<ColorValue>,
}

impl TrailingAppearancePatch {
    /// Merge this patch over `defaults`, field by field.
    pub fn merge(&self, defaults: &TrailingAppearance) -> TrailingAppearance {
        TrailingAppearance {
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| defaults.background_color.clone()),
            foreground_color: self
                .foreground_color
                .clone()
                .unwrap_or_else(|| defaults.foreground_color.clone()),
        }
    }
}

// ============================================================================
// Blame line highlight surface
// ============================================================================

/// Blame line highlight colors for one theme variant. These are always fixed
/// colors; the highlight never derives from annotation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineHighlightAppearance {
    /// Background wash over the highlighted line.
    pub background_color: String,
    /// Mark color in the overview ruler.
    pub overview_ruler_color: String,
}

impl LineHighlightAppearance {
    /// Built-in defaults for the blame line highlight. Both variants share
    /// the same accent.
    pub fn defaults(_variant: ThemeVariant) -> Self {
        Self {
            background_color: "rgba(0, 188, 242, 0.2)".to_string(),
            overview_ruler_color: "rgba(0, 188, 242, 0.6)".to_string(),
        }
    }
}

/// Partial user override of [`LineHighlightAppearance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineHighlightAppearancePatch {
    pub background_color: Option<String>,
    pub overview_ruler_color: Option<String>,
}

impl LineHighlightAppearancePatch {
    /// Merge this patch over `defaults`, field by field.
    pub fn merge(&self, defaults: &LineHighlightAppearance) -> LineHighlightAppearance {
        LineHighlightAppearance {
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| defaults.background_color.clone()),
            overview_ruler_color: self
                .overview_ruler_color
                .clone()
                .unwrap_or_else(|| defaults.overview_ruler_color.clone()),
        }
    }
}

// ============================================================================
// Theme tree
// ============================================================================

/// Dark and light variants of one appearance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPair<T> {
    pub dark: T,
    pub light: T,
}

impl<T> VariantPair<T> {
    /// Build a pair from the per-variant constructor `f`.
    pub fn from_defaults(f: fn(ThemeVariant) -> T) -> Self {
        Self {
            dark: f(ThemeVariant::Dark),
            light: f(ThemeVariant::Light),
        }
    }
}

/// Gutter annotation theming: layout plus per-variant colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GutterTheme {
    /// Draw a separator between the annotation column and the code.
    pub separate_lines: bool,
    pub dark: GutterAppearance,
    pub light: GutterAppearance,
}

impl Default for GutterTheme {
    fn default() -> Self {
        Self {
            separate_lines: true,
            dark: GutterAppearance::defaults(ThemeVariant::Dark),
            light: GutterAppearance::defaults(ThemeVariant::Light),
        }
    }
}

/// Hover annotation theming.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverTheme {
    /// Render each metadata field on its own line in the hover panel.
    pub separate_lines: bool,
}

/// Theming of the file-level annotation surfaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeFileAnnotations {
    pub gutter: GutterTheme,
    pub hover: HoverTheme,
}

/// Theming of the line-level annotation surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeLineAnnotations {
    pub trailing: VariantPair<TrailingAppearance>,
}

impl Default for ThemeLineAnnotations {
    fn default() -> Self {
        Self {
            trailing: VariantPair::from_defaults(TrailingAppearance::defaults),
        }
    }
}

/// Theming of every annotation surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeAnnotations {
    pub file: ThemeFileAnnotations,
    pub line: ThemeLineAnnotations,
}

/// The resolved theme section of the configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub annotations: ThemeAnnotations,
    pub line_highlight: VariantPair<LineHighlightAppearance>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            annotations: ThemeAnnotations::default(),
            line_highlight: VariantPair::from_defaults(LineHighlightAppearance::defaults),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_value_round_trips_the_null_sentinel() {
        let auto: ColorValue = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(auto, ColorValue::Auto);
        assert_eq!(serde_json::to_value(ColorValue::Auto).unwrap(), serde_json::Value::Null);

        let fixed: ColorValue = serde_json::from_value(serde_json::json!("rgb(1, 2, 3)")).unwrap();
        assert_eq!(fixed, ColorValue::fixed("rgb(1, 2, 3)"));
    }

    #[test]
    fn merge_is_right_biased_on_present_fields() {
        let defaults = GutterAppearance::defaults(ThemeVariant::Dark);
        let patch = GutterAppearancePatch {
            foreground_color: Some(ColorValue::fixed("rgb(255, 0, 0)")),
            ..Default::default()
        };
        let merged = patch.merge(&defaults);
        assert_eq!(merged.foreground_color, ColorValue::fixed("rgb(255, 0, 0)"));
        assert_eq!(merged.background_color, defaults.background_color);
        assert_eq!(
            merged.uncommitted_foreground_color,
            defaults.uncommitted_foreground_color
        );
    }

    #[test]
    fn merge_preserves_the_auto_sentinel_from_both_sides() {
        let defaults = GutterAppearance::defaults(ThemeVariant::Light);
        // Explicit null in the override must stay Auto, not pick up a default
        let patch = GutterAppearancePatch {
            foreground_color: Some(ColorValue::Auto),
            ..Default::default()
        };
        let merged = patch.merge(&defaults);
        assert!(merged.foreground_color.is_auto());
        // Absent override keeps the default Auto
        assert!(merged.background_color.is_auto());
    }

    #[test]
    fn merge_is_idempotent() {
        let defaults = GutterAppearance::defaults(ThemeVariant::Dark);
        let patch = GutterAppearancePatch {
            background_color: Some(ColorValue::fixed("rgb(10, 20, 30)")),
            foreground_color: Some(ColorValue::Auto),
            ..Default::default()
        };
        let merged = patch.merge(&defaults);
        let full_patch = GutterAppearancePatch {
            background_color: Some(merged.background_color.clone()),
            foreground_color: Some(merged.foreground_color.clone()),
            uncommitted_foreground_color: Some(merged.uncommitted_foreground_color.clone()),
        };
        assert_eq!(full_patch.merge(&defaults), merged);
    }

    #[test]
    fn gutter_defaults_differ_per_variant() {
        let dark = GutterAppearance::defaults(ThemeVariant::Dark);
        let light = GutterAppearance::defaults(ThemeVariant::Light);
        assert_ne!(dark.foreground_color, light.foreground_color);
        assert!(dark.background_color.is_auto());
        assert!(light.background_color.is_auto());
    }

    #[test]
    fn line_highlight_merge_overrides_strings() {
        let defaults = LineHighlightAppearance::defaults(ThemeVariant::Dark);
        let patch = LineHighlightAppearancePatch {
            background_color: Some("rgba(255, 255, 0, 0.1)".to_string()),
            overview_ruler_color: None,
        };
        let merged = patch.merge(&defaults);
        assert_eq!(merged.background_color, "rgba(255, 255, 0, 0.1)");
        assert_eq!(merged.overview_ruler_color, defaults.overview_ruler_color);
    }

    #[test]
    fn default_theme_tree_round_trips_through_json() {
        let theme = ThemeConfig::default();
        let json = serde_json::to_value(&theme).unwrap();
        // The Auto sentinel appears as null on the wire
        assert_eq!(
            json["annotations"]["file"]["gutter"]["dark"]["backgroundColor"],
            serde_json::Value::Null
        );
        let parsed: ThemeConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, theme);
    }
}
