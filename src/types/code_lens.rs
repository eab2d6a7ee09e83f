//! Code lens placement and per-language scope resolution.

use serde::{Deserialize, Serialize};

use crate::options::ConfigOption;

/// Where lenses are attached within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CodeLensLocation {
    /// One lens at the top of the document (default)
    #[default]
    Document,
    /// A lens on each container symbol (class, module, impl)
    Containers,
    /// A lens on each block symbol (function, method)
    Blocks,
    /// Lenses on the symbols named by the custom symbol list
    Custom,
}

impl CodeLensLocation {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeLensLocation::Document => "Document",
            CodeLensLocation::Containers => "Containers",
            CodeLensLocation::Blocks => "Blocks",
            CodeLensLocation::Custom => "Custom",
        }
    }
}

impl ConfigOption for CodeLensLocation {
    const DOMAIN: &'static str = "codeLens.locations";

    fn all() -> &'static [Self] {
        &[
            CodeLensLocation::Document,
            CodeLensLocation::Containers,
            CodeLensLocation::Blocks,
            CodeLensLocation::Custom,
        ]
    }

    fn tag(self) -> &'static str {
        match self {
            CodeLensLocation::Document => "document",
            CodeLensLocation::Containers => "containers",
            CodeLensLocation::Blocks => "blocks",
            CodeLensLocation::Custom => "custom",
        }
    }
}

/// Lens placement override for one source language.
///
/// `language: None` marks the default entry, which applies to any language
/// without an exact match. Entries are merged last-write-wins: a later entry
/// for the same language supersedes an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeLensLanguageScope {
    /// Language identifier this entry applies to; `None` is the default entry.
    pub language: Option<String>,
    /// Lens placements for the language.
    pub locations: Vec<CodeLensLocation>,
    /// Symbol names to attach lenses to when `locations` contains `custom`.
    pub custom_symbols: Option<Vec<String>>,
}

/// Resolve the effective lens placement and custom symbol set for a language.
///
/// The last entry whose `language` exactly equals `language` wins; failing
/// that, the last default entry (`language: None`) wins; failing that, the
/// globals are returned unchanged. A winning entry with an empty location set
/// also falls back to the globals — a malformed override must never disable
/// all lenses for a language. A winning entry without custom symbols borrows
/// the global symbol list.
pub fn resolve_language_scope<'a>(
    language: &str,
    overrides: &'a [CodeLensLanguageScope],
    global_locations: &'a [CodeLensLocation],
    global_symbols: &'a [String],
) -> (&'a [CodeLensLocation], &'a [String]) {
    let winner = overrides
        .iter()
        .rev()
        .find(|scope| scope.language.as_deref() == Some(language))
        .or_else(|| overrides.iter().rev().find(|scope| scope.language.is_none()));

    match winner {
        Some(scope) if !scope.locations.is_empty() => (
            &scope.locations,
            scope
                .custom_symbols
                .as_deref()
                .unwrap_or(global_symbols),
        ),
        _ => (global_locations, global_symbols),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(language: Option<&str>, locations: &[CodeLensLocation]) -> CodeLensLanguageScope {
        CodeLensLanguageScope {
            language: language.map(str::to_string),
            locations: locations.to_vec(),
            custom_symbols: None,
        }
    }

    const GLOBALS: &[CodeLensLocation] =
        &[CodeLensLocation::Document, CodeLensLocation::Containers];

    #[test]
    fn no_matching_entry_returns_globals_unchanged() {
        let overrides = [scope(Some("rust"), &[CodeLensLocation::Blocks])];
        let symbols = vec!["main".to_string()];
        let (locations, custom) = resolve_language_scope("go", &overrides, GLOBALS, &symbols);
        assert_eq!(locations, GLOBALS);
        assert_eq!(custom, symbols.as_slice());
    }

    #[test]
    fn duplicate_entries_are_last_write_wins() {
        let overrides = [
            scope(Some("python"), &[CodeLensLocation::Document]),
            scope(Some("python"), &[CodeLensLocation::Blocks]),
        ];
        let (locations, _) = resolve_language_scope("python", &overrides, GLOBALS, &[]);
        assert_eq!(locations, &[CodeLensLocation::Blocks]);
    }

    #[test]
    fn default_entry_catches_unmatched_languages() {
        let overrides = [
            scope(None, &[CodeLensLocation::Document]),
            scope(Some("python"), &[CodeLensLocation::Blocks]),
        ];
        let (python, _) = resolve_language_scope("python", &overrides, GLOBALS, &[]);
        assert_eq!(python, &[CodeLensLocation::Blocks]);
        let (go, _) = resolve_language_scope("go", &overrides, GLOBALS, &[]);
        assert_eq!(go, &[CodeLensLocation::Document]);
    }

    #[test]
    fn winning_entry_with_empty_locations_falls_back_to_globals() {
        let overrides = [
            scope(Some("python"), &[CodeLensLocation::Blocks]),
            scope(Some("python"), &[]),
        ];
        let (locations, _) = resolve_language_scope("python", &overrides, GLOBALS, &[]);
        assert_eq!(locations, GLOBALS);
    }

    #[test]
    fn winning_entry_without_symbols_borrows_globals() {
        let overrides = [CodeLensLanguageScope {
            language: Some("rust".to_string()),
            locations: vec![CodeLensLocation::Custom],
            custom_symbols: None,
        }];
        let symbols = vec!["spawn".to_string()];
        let (_, custom) = resolve_language_scope("rust", &overrides, GLOBALS, &symbols);
        assert_eq!(custom, symbols.as_slice());
    }

    #[test]
    fn winning_entry_symbols_shadow_globals() {
        let overrides = [CodeLensLanguageScope {
            language: Some("rust".to_string()),
            locations: vec![CodeLensLocation::Custom],
            custom_symbols: Some(vec!["impl".to_string()]),
        }];
        let symbols = vec!["spawn".to_string()];
        let (_, custom) = resolve_language_scope("rust", &overrides, GLOBALS, &symbols);
        assert_eq!(custom, ["impl".to_string()].as_slice());
    }
}
