//! Snapshot publication and the host change-notification hook.
//!
//! The host delivers raw settings serially: once at activation and once per
//! settings change. Each delivery triggers one wholesale assembly; the new
//! snapshot is fully built before it is published, so readers never observe
//! a partially assembled tree. Consumers should re-fetch from [`ConfigStore`]
//! after a change notification rather than hold an `Arc` across updates.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use serde_json::Value;

use crate::commands::{CommandBindings, CommandRegistry};
use crate::config::Config;
use crate::error::SettingWarning;

/// Owns the current configuration snapshot and the validated binding table.
#[derive(Debug)]
pub struct ConfigStore {
    registry: CommandRegistry,
    bindings: CommandBindings,
    current: RwLock<Arc<Config>>,
}

impl ConfigStore {
    /// Build the store from the host's initial raw settings and command
    /// registry snapshot.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::ConfigError`] if a command binding
    /// references an unregistered command; no snapshot is published and the
    /// extension should refuse to activate.
    pub fn new(raw: &Value, registry: CommandRegistry) -> Result<Self> {
        let bindings = CommandBindings::build(&registry)?;
        let (config, warnings) = Config::assemble(raw, &registry)?;
        log_warnings(&warnings);
        log::info!(
            "configuration assembled ({} settings recovered to defaults)",
            warnings.len()
        );
        Ok(Self {
            registry,
            bindings,
            current: RwLock::new(Arc::new(config)),
        })
    }

    /// The current snapshot.
    pub fn config(&self) -> Arc<Config> {
        self.current.read().clone()
    }

    /// The validated binding table for symbolic UI actions.
    pub fn bindings(&self) -> &CommandBindings {
        &self.bindings
    }

    /// Host hook: the raw settings changed.
    ///
    /// Reassembles wholesale and publishes the new snapshot, returning it.
    /// On failure the previously published snapshot stays current and the
    /// error is reported back to the host.
    pub fn on_settings_changed(&self, raw: &Value) -> Result<Arc<Config>> {
        let (config, warnings) = Config::assemble(raw, &self.registry)?;
        log_warnings(&warnings);
        let snapshot = Arc::new(config);
        *self.current.write() = Arc::clone(&snapshot);
        log::debug!("configuration snapshot replaced");
        Ok(snapshot)
    }
}

fn log_warnings(warnings: &[SettingWarning]) {
    for warning in warnings {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CodeLensCommand, StatusBarCommand};
    use crate::options::ConfigOption;
    use crate::types::StatusBarAlignment;
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
    fn store_publishes_the_initial_snapshot() {
        let store = ConfigStore::new(&json!({}), full_registry()).unwrap();
        assert_eq!(*store.config(), Config::default());
        assert_eq!(
            store.bindings().resolve("ShowFileHistory"),
            Some("revlens.showFileHistory")
        );
    }

    #[test]
    fn store_refuses_to_start_on_a_broken_binding() {
        let result = ConfigStore::new(&json!({}), CommandRegistry::default());
        let err = result.err().expect("activation must fail");
        assert!(err.downcast_ref::<crate::error::ConfigError>().is_some());
    }

    #[test]
    fn change_notification_replaces_the_snapshot() {
        let store = ConfigStore::new(&json!({}), full_registry()).unwrap();
        let before = store.config();

        let after = store
            .on_settings_changed(&json!({ "statusBar": { "alignment": "right" } }))
            .unwrap();
        assert_eq!(after.status_bar.alignment, StatusBarAlignment::Right);
        assert_eq!(store.config().status_bar.alignment, StatusBarAlignment::Right);

        // The old snapshot is discarded, not patched
        assert_eq!(before.status_bar.alignment, StatusBarAlignment::Left);
        assert!(!Arc::ptr_eq(&before, &after));
    }
}
