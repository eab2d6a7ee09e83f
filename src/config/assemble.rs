//! Wholesale snapshot assembly.
//!
//! `Config::assemble` turns the host's raw settings value into one fully
//! typed, immutable snapshot. The command binding table is validated first
//! and is the only fatal path; every other problem recovers to a declared
//! default and surfaces as a [`SettingWarning`]. The assembler is re-run
//! wholesale on every change notification and never patches a previous tree
//! in place.

use serde_json::Value;

use crate::commands::{CommandBindings, CommandRegistry};
use crate::config::config_struct::{
    AdvancedConfig, AnnotationsConfig, BlameConfig, CachingConfig, CodeLensConfig, Config,
    EditorContextMenus, EditorTitleContextMenus, EditorTitleMenus, ExplorerContextMenus,
    FileAnnotationsConfig, FileBlameConfig, FileHoverAnnotationConfig, GutterAnnotationConfig,
    GutterHoverConfig, HeatmapConfig, LensCommandConfig, LineAnnotationsConfig, LineBlameConfig,
    LineHighlightConfig, LineHoverConfig, MenusConfig, QuickPickConfig, StatusBarConfig, Toggle,
    TrailingAnnotationConfig, TrailingHoverConfig,
};
use crate::config::reader::{SettingsReader, json_type};
use crate::error::{ConfigError, SettingWarning};
use crate::themes::{
    GutterAppearance, GutterAppearancePatch, GutterTheme, HoverTheme, LineHighlightAppearance,
    LineHighlightAppearancePatch, ThemeAnnotations, ThemeConfig, ThemeFileAnnotations,
    ThemeLineAnnotations, ThemeVariant, TrailingAppearance, TrailingAppearancePatch, VariantPair,
};
use crate::types::{
    CodeLensLanguageScope, FileAnnotationKind, HeatmapLocation, LineAnnotationKind, OutputLevel,
    StatusBarAlignment,
};

impl Config {
    /// Assemble a configuration snapshot from the host's raw settings value.
    ///
    /// Returns the snapshot together with the warnings recorded for leaves
    /// that were recovered to defaults. The only fatal path is a command
    /// binding referencing an identifier missing from `registry`; in that
    /// case no tree is produced at all.
    pub fn assemble(
        raw: &Value,
        registry: &CommandRegistry,
    ) -> Result<(Config, Vec<SettingWarning>), ConfigError> {
        // Bindings first: a broken binding aborts before any leaf is read.
        CommandBindings::build(registry)?;

        let mut reader = SettingsReader::new(raw);
        let config = Config {
            annotations: read_annotations(&mut reader),
            blame: read_blame(&mut reader),
            code_lens: read_code_lens(&mut reader),
            status_bar: read_status_bar(&mut reader),
            theme: read_theme(&mut reader),
            debug: reader.bool_or("debug", false),
            insiders: reader.bool_or("insiders", false),
            output_level: reader.enum_or("outputLevel", OutputLevel::Errors),
            advanced: read_advanced(&mut reader),
        };
        Ok((config, reader.into_warnings()))
    }
}

fn read_annotations(r: &mut SettingsReader<'_>) -> AnnotationsConfig {
    AnnotationsConfig {
        file: FileAnnotationsConfig {
            gutter: GutterAnnotationConfig {
                format: r.string_or(
                    "annotations.file.gutter.format",
                    &crate::defaults::gutter_format(),
                ),
                date_format: r.string_or(
                    "annotations.file.gutter.dateFormat",
                    &crate::defaults::date_format(),
                ),
                compact: r.bool_or("annotations.file.gutter.compact", true),
                heatmap: HeatmapConfig {
                    enabled: r.bool_or("annotations.file.gutter.heatmap.enabled", true),
                    location: r.enum_or(
                        "annotations.file.gutter.heatmap.location",
                        HeatmapLocation::Left,
                    ),
                },
                hover: GutterHoverConfig {
                    details: r.bool_or("annotations.file.gutter.hover.details", true),
                    whole_line: r.bool_or("annotations.file.gutter.hover.wholeLine", false),
                },
            },
            hover: FileHoverAnnotationConfig {
                heatmap: Toggle {
                    enabled: r.bool_or("annotations.file.hover.heatmap.enabled", true),
                },
                whole_line: r.bool_or("annotations.file.hover.wholeLine", false),
            },
        },
        line: LineAnnotationsConfig {
            hover: LineHoverConfig {
                details: r.bool_or("annotations.line.hover.details", true),
                changes: r.bool_or("annotations.line.hover.changes", true),
            },
            trailing: TrailingAnnotationConfig {
                format: r.string_or(
                    "annotations.line.trailing.format",
                    &crate::defaults::trailing_format(),
                ),
                date_format: r.string_or(
                    "annotations.line.trailing.dateFormat",
                    &crate::defaults::date_format(),
                ),
                hover: TrailingHoverConfig {
                    changes: r.bool_or("annotations.line.trailing.hover.changes", true),
                    details: r.bool_or("annotations.line.trailing.hover.details", true),
                    whole_line: r.bool_or("annotations.line.trailing.hover.wholeLine", false),
                },
            },
        },
    }
}

fn read_blame(r: &mut SettingsReader<'_>) -> BlameConfig {
    BlameConfig {
        file: FileBlameConfig {
            annotation_type: r.enum_or("blame.file.annotationType", FileAnnotationKind::Gutter),
            line_highlight: LineHighlightConfig {
                enabled: r.bool_or("blame.file.lineHighlight.enabled", true),
                locations: r.enum_list_or(
                    "blame.file.lineHighlight.locations",
                    &crate::defaults::blame_highlight_locations(),
                ),
            },
        },
        line: LineBlameConfig {
            enabled: r.bool_or("blame.line.enabled", true),
            annotation_type: r.enum_or("blame.line.annotationType", LineAnnotationKind::Trailing),
        },
    }
}

fn read_code_lens(r: &mut SettingsReader<'_>) -> CodeLensConfig {
    let recent_change_default = crate::defaults::recent_change_lens();
    let authors_default = crate::defaults::authors_lens();
    CodeLensConfig {
        enabled: r.bool_or("codeLens.enabled", true),
        recent_change: LensCommandConfig {
            enabled: r.bool_or("codeLens.recentChange.enabled", true),
            command: r.enum_or("codeLens.recentChange.command", recent_change_default.command),
        },
        authors: LensCommandConfig {
            enabled: r.bool_or("codeLens.authors.enabled", true),
            command: r.enum_or("codeLens.authors.command", authors_default.command),
        },
        locations: r.enum_list_or("codeLens.locations", &crate::defaults::code_lens_locations()),
        custom_location_symbols: r.string_list_or("codeLens.customLocationSymbols", &[]),
        per_language_locations: read_per_language(r),
        debug: r.bool_or("codeLens.debug", false),
    }
}

/// Parse the per-language lens overrides, preserving declared order.
///
/// Entries with an emptied location set are kept (with a warning): the
/// resolver skips them in favor of the globals, and dropping them here would
/// change which entry wins under last-write-wins.
fn read_per_language(r: &mut SettingsReader<'_>) -> Vec<CodeLensLanguageScope> {
    const PATH: &str = "codeLens.perLanguageLocations";

    let items = match r.raw(PATH) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            r.warn(
                PATH,
                format!("expected an array, found {}; ignoring", json_type(other)),
            );
            return Vec::new();
        }
    };

    let mut scopes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry_path = format!("{PATH}[{index}]");
        let Some(entry) = item.as_object() else {
            r.warn(&entry_path, "expected an object; entry dropped");
            continue;
        };

        let language = match entry.get("language") {
            None | Some(Value::Null) => None,
            Some(Value::String(language)) => Some(language.clone()),
            Some(_) => {
                r.warn(
                    &entry_path,
                    "'language' must be a string or unset; entry dropped",
                );
                continue;
            }
        };

        let locations = match entry.get("locations") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(raw_locations)) => {
                let resolved = r.enum_items(&format!("{entry_path}.locations"), raw_locations);
                if resolved.is_empty() && !raw_locations.is_empty() {
                    r.warn(
                        &format!("{entry_path}.locations"),
                        "no valid entries remain; the global locations apply",
                    );
                }
                resolved
            }
            Some(_) => {
                r.warn(
                    &format!("{entry_path}.locations"),
                    "expected an array; the global locations apply",
                );
                Vec::new()
            }
        };

        let custom_symbols = match entry.get("customSymbols") {
            None | Some(Value::Null) => None,
            Some(Value::Array(raw_symbols)) => {
                let mut symbols = Vec::with_capacity(raw_symbols.len());
                for (symbol_index, symbol) in raw_symbols.iter().enumerate() {
                    match symbol {
                        Value::String(symbol) => symbols.push(symbol.clone()),
                        _ => r.warn(
                            &format!("{entry_path}.customSymbols[{symbol_index}]"),
                            "expected a string; entry dropped",
                        ),
                    }
                }
                Some(symbols)
            }
            Some(_) => {
                r.warn(
                    &format!("{entry_path}.customSymbols"),
                    "expected an array; ignoring",
                );
                None
            }
        };

        scopes.push(CodeLensLanguageScope {
            language,
            locations,
            custom_symbols,
        });
    }
    scopes
}

fn read_status_bar(r: &mut SettingsReader<'_>) -> StatusBarConfig {
    StatusBarConfig {
        enabled: r.bool_or("statusBar.enabled", true),
        alignment: r.enum_or("statusBar.alignment", StatusBarAlignment::Left),
        command: r.enum_or("statusBar.command", crate::defaults::status_bar_command()),
        format: r.string_or("statusBar.format", &crate::defaults::status_bar_format()),
        date_format: r.string_or("statusBar.dateFormat", &crate::defaults::date_format()),
    }
}

fn read_gutter_appearance(
    r: &mut SettingsReader<'_>,
    base: &str,
    variant: ThemeVariant,
) -> GutterAppearance {
    let patch = GutterAppearancePatch {
        background_color: r.color_patch(&format!("{base}.backgroundColor")),
        foreground_color: r.color_patch(&format!("{base}.foregroundColor")),
        uncommitted_foreground_color: r.color_patch(&format!("{base}.uncommittedForegroundColor")),
    };
    patch.merge(&GutterAppearance::defaults(variant))
}

fn read_trailing_appearance(
    r: &mut SettingsReader<'_>,
    base: &str,
    variant: ThemeVariant,
) -> TrailingAppearance {
    let patch = TrailingAppearancePatch {
        background_color: r.color_patch(&format!("{base}.backgroundColor")),
        foreground_color: r.color_patch(&format!("{base}.foregroundColor")),
    };
    patch.merge(&TrailingAppearance::defaults(variant))
}

fn read_line_highlight_appearance(
    r: &mut SettingsReader<'_>,
    base: &str,
    variant: ThemeVariant,
) -> LineHighlightAppearance {
    let patch = LineHighlightAppearancePatch {
        background_color: r.string_patch(&format!("{base}.backgroundColor")),
        overview_ruler_color: r.string_patch(&format!("{base}.overviewRulerColor")),
    };
    patch.merge(&LineHighlightAppearance::defaults(variant))
}

fn read_theme(r: &mut SettingsReader<'_>) -> ThemeConfig {
    ThemeConfig {
        annotations: ThemeAnnotations {
            file: ThemeFileAnnotations {
                gutter: GutterTheme {
                    separate_lines: r
                        .bool_or("theme.annotations.file.gutter.separateLines", true),
                    dark: read_gutter_appearance(
                        r,
                        "theme.annotations.file.gutter.dark",
                        ThemeVariant::Dark,
                    ),
                    light: read_gutter_appearance(
                        r,
                        "theme.annotations.file.gutter.light",
                        ThemeVariant::Light,
                    ),
                },
                hover: HoverTheme {
                    separate_lines: r
                        .bool_or("theme.annotations.file.hover.separateLines", false),
                },
            },
            line: ThemeLineAnnotations {
                trailing: VariantPair {
                    dark: read_trailing_appearance(
                        r,
                        "theme.annotations.line.trailing.dark",
                        ThemeVariant::Dark,
                    ),
                    light: read_trailing_appearance(
                        r,
                        "theme.annotations.line.trailing.light",
                        ThemeVariant::Light,
                    ),
                },
            },
        },
        line_highlight: VariantPair {
            dark: read_line_highlight_appearance(r, "theme.lineHighlight.dark", ThemeVariant::Dark),
            light: read_line_highlight_appearance(
                r,
                "theme.lineHighlight.light",
                ThemeVariant::Light,
            ),
        },
    }
}

fn read_advanced(r: &mut SettingsReader<'_>) -> AdvancedConfig {
    AdvancedConfig {
        caching: CachingConfig {
            enabled: r.bool_or("advanced.caching.enabled", true),
            max_lines: r.u32_or(
                "advanced.caching.maxLines",
                crate::defaults::caching_max_lines(),
            ),
        },
        git: r.string_or("advanced.git", &crate::defaults::git_path()),
        gitignore: Toggle {
            enabled: r.bool_or("advanced.gitignore.enabled", true),
        },
        max_quick_history: r.u32_or(
            "advanced.maxQuickHistory",
            crate::defaults::max_quick_history(),
        ),
        menus: MenusConfig {
            explorer_context: ExplorerContextMenus {
                file_diff: r.bool_or("advanced.menus.explorerContext.fileDiff", true),
                history: r.bool_or("advanced.menus.explorerContext.history", true),
                remote: r.bool_or("advanced.menus.explorerContext.remote", true),
            },
            editor_context: EditorContextMenus {
                blame: r.bool_or("advanced.menus.editorContext.blame", true),
                copy: r.bool_or("advanced.menus.editorContext.copy", true),
                details: r.bool_or("advanced.menus.editorContext.details", true),
                file_diff: r.bool_or("advanced.menus.editorContext.fileDiff", true),
                history: r.bool_or("advanced.menus.editorContext.history", true),
                line_diff: r.bool_or("advanced.menus.editorContext.lineDiff", true),
                remote: r.bool_or("advanced.menus.editorContext.remote", true),
            },
            editor_title: EditorTitleMenus {
                blame: r.bool_or("advanced.menus.editorTitle.blame", true),
                file_diff: r.bool_or("advanced.menus.editorTitle.fileDiff", true),
                history: r.bool_or("advanced.menus.editorTitle.history", true),
                status: r.bool_or("advanced.menus.editorTitle.status", true),
            },
            editor_title_context: EditorTitleContextMenus {
                blame: r.bool_or("advanced.menus.editorTitleContext.blame", true),
                file_diff: r.bool_or("advanced.menus.editorTitleContext.fileDiff", true),
                history: r.bool_or("advanced.menus.editorTitleContext.history", true),
                remote: r.bool_or("advanced.menus.editorTitleContext.remote", true),
            },
        },
        quick_pick: QuickPickConfig {
            close_on_focus_out: r.bool_or("advanced.quickPick.closeOnFocusOut", true),
        },
        toggle_whitespace: Toggle {
            enabled: r.bool_or("advanced.toggleWhitespace.enabled", false),
        },
    }
}
