//! Leaf extraction over the host's raw settings value.
//!
//! The host configuration store hands the subsystem one loosely typed JSON
//! value per change notification. `SettingsReader` pulls individual leaves
//! out of that value by dotted key path, recovering to the declared default
//! (and recording a warning) whenever a leaf has the wrong type or fails
//! vocabulary validation. A missing key, or an explicit `null` on a scalar
//! leaf, silently keeps the default — hosts serialize unset settings both
//! ways. Color leaves are the exception: there `null` is the "derive from
//! data" sentinel and is preserved as [`ColorValue::Auto`].

use serde_json::Value;

use crate::error::SettingWarning;
use crate::options::{ConfigOption, canonicalize};
use crate::themes::ColorValue;

/// Human-readable JSON type name for diagnostics.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) struct SettingsReader<'a> {
    root: &'a Value,
    warnings: Vec<SettingWarning>,
}

impl<'a> SettingsReader<'a> {
    pub(crate) fn new(root: &'a Value) -> Self {
        let mut reader = Self {
            root,
            warnings: Vec::new(),
        };
        if !root.is_object() && !root.is_null() {
            reader.warn(
                "",
                format!(
                    "settings root is {}, expected an object; using defaults throughout",
                    json_type(root)
                ),
            );
        }
        reader
    }

    /// Warnings recorded so far, in encounter order.
    pub(crate) fn into_warnings(self) -> Vec<SettingWarning> {
        self.warnings
    }

    pub(crate) fn warn(&mut self, path: &str, reason: impl Into<String>) {
        self.warnings.push(SettingWarning {
            path: path.to_string(),
            reason: reason.into(),
        });
    }

    /// Raw value at a dotted camelCase path, if present.
    pub(crate) fn raw(&self, path: &str) -> Option<&'a Value> {
        path.split('.')
            .try_fold(self.root, |value, key| value.as_object()?.get(key))
    }

    pub(crate) fn bool_or(&mut self, path: &str, default: bool) -> bool {
        match self.raw(path) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(value)) => *value,
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a boolean, found {}; using {default}",
                        json_type(other)
                    ),
                );
                default
            }
        }
    }

    pub(crate) fn u32_or(&mut self, path: &str, default: u32) -> u32 {
        match self.raw(path) {
            None | Some(Value::Null) => default,
            Some(Value::Number(number)) => {
                match number.as_u64().and_then(|v| u32::try_from(v).ok()) {
                    Some(value) => value,
                    None => {
                        self.warn(
                            path,
                            format!("expected a non-negative integer, found {number}; using {default}"),
                        );
                        default
                    }
                }
            }
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a number, found {}; using {default}",
                        json_type(other)
                    ),
                );
                default
            }
        }
    }

    pub(crate) fn string_or(&mut self, path: &str, default: &str) -> String {
        match self.raw(path) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a string, found {}; using '{default}'",
                        json_type(other)
                    ),
                );
                default.to_string()
            }
        }
    }

    /// An enumerated leaf; invalid members recover to `default`.
    pub(crate) fn enum_or<T: ConfigOption>(&mut self, path: &str, default: T) -> T {
        match self.raw(path) {
            None | Some(Value::Null) => default,
            Some(Value::String(raw)) => match canonicalize::<T>(raw) {
                Ok(value) => value,
                Err(_) => {
                    self.warn(
                        path,
                        format!("unknown value '{raw}'; using '{}'", default.tag()),
                    );
                    default
                }
            },
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a string, found {}; using '{}'",
                        json_type(other),
                        default.tag()
                    ),
                );
                default
            }
        }
    }

    /// A list of enumerated members. Invalid entries are dropped with a
    /// warning each; if validation empties a non-empty list, the declared
    /// default list is restored. A raw empty list is respected as-is.
    pub(crate) fn enum_list_or<T: ConfigOption>(&mut self, path: &str, default: &[T]) -> Vec<T> {
        match self.raw(path) {
            None | Some(Value::Null) => default.to_vec(),
            Some(Value::Array(items)) => {
                let resolved = self.enum_items(path, items);
                if resolved.is_empty() && !items.is_empty() {
                    self.warn(path, "no valid entries remain; using defaults");
                    default.to_vec()
                } else {
                    resolved
                }
            }
            Some(other) => {
                self.warn(
                    path,
                    format!("expected an array, found {}; using defaults", json_type(other)),
                );
                default.to_vec()
            }
        }
    }

    /// Canonicalize the elements of an already-located array, dropping
    /// invalid ones with a warning each. Used directly for per-language
    /// entries, where an emptied list must be kept rather than defaulted.
    pub(crate) fn enum_items<T: ConfigOption>(&mut self, path: &str, items: &[Value]) -> Vec<T> {
        let mut resolved = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(raw) => match canonicalize::<T>(raw) {
                    Ok(value) => resolved.push(value),
                    Err(_) => {
                        self.warn(
                            &format!("{path}[{index}]"),
                            format!("unknown value '{raw}'; entry dropped"),
                        );
                    }
                },
                other => {
                    self.warn(
                        &format!("{path}[{index}]"),
                        format!("expected a string, found {}; entry dropped", json_type(other)),
                    );
                }
            }
        }
        resolved
    }

    pub(crate) fn string_list_or(&mut self, path: &str, default: &[String]) -> Vec<String> {
        match self.raw(path) {
            None | Some(Value::Null) => default.to_vec(),
            Some(Value::Array(items)) => {
                let mut resolved = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(value) => resolved.push(value.clone()),
                        other => self.warn(
                            &format!("{path}[{index}]"),
                            format!("expected a string, found {}; entry dropped", json_type(other)),
                        ),
                    }
                }
                resolved
            }
            Some(other) => {
                self.warn(
                    path,
                    format!("expected an array, found {}; using defaults", json_type(other)),
                );
                default.to_vec()
            }
        }
    }

    /// A color override slot: absent → `None` (keep the default), `null` →
    /// `Some(Auto)` (the derive-from-data sentinel), string → fixed color.
    pub(crate) fn color_patch(&mut self, path: &str) -> Option<ColorValue> {
        match self.raw(path) {
            None => None,
            Some(Value::Null) => Some(ColorValue::Auto),
            Some(Value::String(color)) => Some(ColorValue::Fixed(color.clone())),
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a color string or null, found {}; keeping the default",
                        json_type(other)
                    ),
                );
                None
            }
        }
    }

    /// A plain string override slot: absent or `null` → `None`.
    pub(crate) fn string_patch(&mut self, path: &str) -> Option<String> {
        match self.raw(path) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                self.warn(
                    path,
                    format!(
                        "expected a string, found {}; keeping the default",
                        json_type(other)
                    ),
                );
                None
            }
        }
    }
}
