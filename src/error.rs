//! Typed error variants for the revlens-config crate.
//!
//! Provides structured error types for settings validation and snapshot
//! assembly. Fallible entry points on [`crate::store::ConfigStore`] return
//! `anyhow::Result`; `ConfigError` values are automatically coerced via the
//! `From` impl that `anyhow` provides for any `std::error::Error`, so callers
//! who want to match on a specific failure mode can `downcast_ref`.
//!
//! # Example
//!
//! ```rust,no_run
//! use revlens_config::ConfigError;
//!
//! fn check_assemble_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::UnknownCommand { action, command } => {
//!                 eprintln!("{action} is bound to unregistered command {command}")
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Rejection of a raw string that is not a member of a closed option domain.
///
/// Produced by [`crate::options::canonicalize`]. Carries the domain name (the
/// host setting key the vocabulary belongs to) and the offending raw value,
/// so callers can decide how to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a member of {domain}")]
pub struct InvalidOption {
    /// Domain the value was validated against.
    pub domain: &'static str,
    /// The raw string that failed membership.
    pub raw: String,
}

/// Fatal configuration errors.
///
/// When assembly hits one of these, no snapshot is produced: a previously
/// published snapshot stays current, and at startup the subsystem refuses to
/// activate. Everything else that can go wrong with raw settings is
/// recoverable and surfaces as a [`SettingWarning`] instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A command binding references an identifier the host integration layer
    /// never registered.
    ///
    /// A broken binding would silently disable a user-facing action at the
    /// moment of invocation, so the binding table fails construction instead.
    #[error("command binding '{action}' references unregistered command '{command}'")]
    UnknownCommand {
        /// Symbolic action name the binding belongs to.
        action: &'static str,
        /// The unregistered command identifier.
        command: &'static str,
    },
}

/// A recovered, non-fatal problem found while assembling a snapshot.
///
/// The assembler replaces the offending leaf with its declared default and
/// records one of these; [`crate::store::ConfigStore`] forwards them to
/// `log::warn!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingWarning {
    /// Dotted settings path of the offending leaf.
    pub path: String,
    /// What was wrong and what the assembler fell back to.
    pub reason: String,
}

impl fmt::Display for SettingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_display_names_domain_and_value() {
        let err = InvalidOption {
            domain: "blame.file.annotationType",
            raw: "bogus".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'bogus' is not a member of blame.file.annotationType"
        );
    }

    #[test]
    fn config_error_coerces_through_anyhow() {
        let err: anyhow::Error = ConfigError::UnknownCommand {
            action: "ToggleFileBlame",
            command: "revlens.toggleFileBlame",
        }
        .into();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn setting_warning_display_is_path_prefixed() {
        let warning = SettingWarning {
            path: "statusBar.alignment".to_string(),
            reason: "unknown value 'center'; using 'left'".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "statusBar.alignment: unknown value 'center'; using 'left'"
        );
    }
}
