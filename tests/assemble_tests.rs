use revlens_config::{
    CodeLensCommand, CodeLensLocation, ColorValue, Config, ConfigError, ConfigOption, ConfigStore,
    CommandRegistry, FileAnnotationKind, OutputLevel, StatusBarAlignment, StatusBarCommand,
    resolve_language_scope,
};
use serde_json::json;

fn full_registry() -> CommandRegistry {
    CommandRegistry::new(
        CodeLensCommand::all()
            .iter()
            .map(|c| c.command_id())
            .chain(StatusBarCommand::all().iter().map(|c| c.command_id())),
    )
}

#[test]
fn test_config_defaults() {
    let (config, warnings) = Config::assemble(&json!({}), &full_registry()).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.blame.file.annotation_type, FileAnnotationKind::Gutter);
    assert!(config.blame.line.enabled);
    assert!(config.code_lens.enabled);
    assert_eq!(
        config.code_lens.locations,
        vec![CodeLensLocation::Document, CodeLensLocation::Containers]
    );
    assert!(config.status_bar.enabled);
    assert_eq!(config.status_bar.alignment, StatusBarAlignment::Left);
    assert_eq!(config.status_bar.format, "${author}, ${ago}");
    assert_eq!(config.output_level, OutputLevel::Errors);
    assert!(!config.debug);
    assert!(!config.insiders);
    assert_eq!(config.advanced.git, "git");
    assert_eq!(config.advanced.max_quick_history, 200);
    assert!(config.advanced.quick_pick.close_on_focus_out);
}

#[test]
fn test_partial_settings_keep_defaults_elsewhere() {
    let raw = json!({
        "annotations": { "file": { "gutter": { "compact": false } } },
        "codeLens": { "enabled": false }
    });
    let (config, warnings) = Config::assemble(&raw, &full_registry()).unwrap();
    assert!(warnings.is_empty());
    assert!(!config.annotations.file.gutter.compact);
    assert!(!config.code_lens.enabled);
    // Untouched sections keep their defaults
    assert!(config.annotations.file.gutter.heatmap.enabled);
    assert!(config.status_bar.enabled);
}

#[test]
fn test_bogus_annotation_type_recovers_to_gutter() {
    let raw = json!({ "blame": { "file": { "annotationType": "bogus" } } });
    let (config, warnings) = Config::assemble(&raw, &full_registry()).unwrap();
    assert_eq!(config.blame.file.annotation_type, FileAnnotationKind::Gutter);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].path, "blame.file.annotationType");
    assert!(warnings[0].reason.contains("bogus"));
}

#[test]
fn test_unregistered_command_is_fatal() {
    let registry = CommandRegistry::new(["revlens.toggleFileBlame"]);
    let err = Config::assemble(&json!({}), &registry).unwrap_err();
    match err {
        ConfigError::UnknownCommand { action, command } => {
            assert!(!action.is_empty());
            assert!(command.starts_with("revlens."));
        }
        _ => panic!("expected UnknownCommand, got {err:?}"),
    }
}

#[test]
fn test_per_language_lens_resolution_end_to_end() {
    let raw = json!({
        "codeLens": {
            "perLanguageLocations": [
                { "locations": ["document"] },
                { "language": "python", "locations": ["blocks"] }
            ]
        }
    });
    let (config, _) = Config::assemble(&raw, &full_registry()).unwrap();
    let lens = &config.code_lens;

    let (python, _) = resolve_language_scope(
        "python",
        &lens.per_language_locations,
        &lens.locations,
        &lens.custom_location_symbols,
    );
    assert_eq!(python, &[CodeLensLocation::Blocks]);

    let (go, _) = resolve_language_scope(
        "go",
        &lens.per_language_locations,
        &lens.locations,
        &lens.custom_location_symbols,
    );
    assert_eq!(go, &[CodeLensLocation::Document]);
}

#[test]
fn test_duplicate_language_entries_last_write_wins() {
    let raw = json!({
        "codeLens": {
            "perLanguageLocations": [
                { "language": "rust", "locations": ["document"] },
                { "language": "rust", "locations": ["containers"] }
            ]
        }
    });
    let (config, warnings) = Config::assemble(&raw, &full_registry()).unwrap();
    // Documented, deterministic behavior: duplicates merge without warnings
    assert!(warnings.is_empty());
    let lens = &config.code_lens;
    let (rust, _) = resolve_language_scope(
        "rust",
        &lens.per_language_locations,
        &lens.locations,
        &lens.custom_location_symbols,
    );
    assert_eq!(rust, &[CodeLensLocation::Containers]);
}

#[test]
fn test_theme_null_is_the_derive_sentinel_not_unset() {
    let raw = json!({
        "theme": {
            "annotations": {
                "file": { "gutter": { "dark": { "foregroundColor": null } } }
            }
        }
    });
    let (config, warnings) = Config::assemble(&raw, &full_registry()).unwrap();
    assert!(warnings.is_empty());
    let dark = &config.theme.annotations.file.gutter.dark;
    // The explicit null replaced the fixed default with the derive sentinel
    assert_eq!(dark.foreground_color, ColorValue::Auto);
    // The untouched variant kept its fixed default
    let light = &config.theme.annotations.file.gutter.light;
    assert_eq!(light.foreground_color, ColorValue::fixed("rgb(116, 116, 116)"));
}

#[test]
fn test_store_round_trip_through_change_notifications() {
    let store = ConfigStore::new(&json!({}), full_registry()).unwrap();
    assert_eq!(store.config().status_bar.alignment, StatusBarAlignment::Left);

    store
        .on_settings_changed(&json!({ "statusBar": { "alignment": "right" } }))
        .unwrap();
    assert_eq!(store.config().status_bar.alignment, StatusBarAlignment::Right);

    // Reverting the settings reverts the snapshot on the next notification
    store.on_settings_changed(&json!({})).unwrap();
    assert_eq!(*store.config(), Config::default());
}

#[test]
fn test_assembled_tree_serializes_with_host_key_casing() {
    let (config, _) = Config::assemble(&json!({}), &full_registry()).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["blame"]["file"]["annotationType"], "gutter");
    assert_eq!(value["codeLens"]["customLocationSymbols"], json!([]));
    assert_eq!(value["advanced"]["quickPick"]["closeOnFocusOut"], json!(true));
    assert_eq!(
        value["theme"]["annotations"]["line"]["trailing"]["dark"]["foregroundColor"],
        "rgba(153, 153, 153, 0.35)"
    );
}
