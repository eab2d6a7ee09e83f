//! Command vocabulary and binding validation.
//!
//! UI actions (a lens click, the status bar entry) invoke commands the host
//! integration layer registers at activation. The settings only ever name
//! commands from two closed vocabularies, and the binding table from symbolic
//! action names to command identifiers is built once per assembly and
//! validated against the host's registry snapshot. An unknown identifier is
//! fatal: a broken binding would silently disable a user-facing action at the
//! moment of invocation, which is worse than refusing to activate.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::ConfigOption;

/// Commands a code lens may invoke when clicked.
///
/// Serialized as the full command identifier, which is what the host settings
/// store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CodeLensCommand {
    /// Toggle whole-file blame annotations
    #[default]
    #[serde(rename = "revlens.toggleFileBlame")]
    ToggleFileBlame,
    /// Open the blame history explorer for the lens range
    #[serde(rename = "revlens.showBlameHistory")]
    ShowBlameHistory,
    /// Open the file history explorer
    #[serde(rename = "revlens.showFileHistory")]
    ShowFileHistory,
    /// Diff the file against its previous revision
    #[serde(rename = "revlens.diffWithPrevious")]
    DiffWithPrevious,
    /// Quick pick with details of the most recent commit
    #[serde(rename = "revlens.showQuickCommitDetails")]
    ShowQuickCommitDetails,
    /// Quick pick with the commit's changes to the current file
    #[serde(rename = "revlens.showQuickCommitFileDetails")]
    ShowQuickCommitFileDetails,
    /// Quick pick of the current file's history
    #[serde(rename = "revlens.showQuickFileHistory")]
    ShowQuickFileHistory,
    /// Quick pick of the repository history
    #[serde(rename = "revlens.showQuickRepoHistory")]
    ShowQuickRepoHistory,
}

impl CodeLensCommand {
    /// The command identifier sent to the host when the lens is invoked.
    pub fn command_id(self) -> &'static str {
        match self {
            CodeLensCommand::ToggleFileBlame => "revlens.toggleFileBlame",
            CodeLensCommand::ShowBlameHistory => "revlens.showBlameHistory",
            CodeLensCommand::ShowFileHistory => "revlens.showFileHistory",
            CodeLensCommand::DiffWithPrevious => "revlens.diffWithPrevious",
            CodeLensCommand::ShowQuickCommitDetails => "revlens.showQuickCommitDetails",
            CodeLensCommand::ShowQuickCommitFileDetails => "revlens.showQuickCommitFileDetails",
            CodeLensCommand::ShowQuickFileHistory => "revlens.showQuickFileHistory",
            CodeLensCommand::ShowQuickRepoHistory => "revlens.showQuickRepoHistory",
        }
    }

    /// Symbolic action name, used in diagnostics and binding lookups.
    pub fn action(self) -> &'static str {
        match self {
            CodeLensCommand::ToggleFileBlame => "ToggleFileBlame",
            CodeLensCommand::ShowBlameHistory => "ShowBlameHistory",
            CodeLensCommand::ShowFileHistory => "ShowFileHistory",
            CodeLensCommand::DiffWithPrevious => "DiffWithPrevious",
            CodeLensCommand::ShowQuickCommitDetails => "ShowQuickCommitDetails",
            CodeLensCommand::ShowQuickCommitFileDetails => "ShowQuickCommitFileDetails",
            CodeLensCommand::ShowQuickFileHistory => "ShowQuickFileHistory",
            CodeLensCommand::ShowQuickRepoHistory => "ShowQuickRepoHistory",
        }
    }
}

impl ConfigOption for CodeLensCommand {
    const DOMAIN: &'static str = "codeLens.command";

    fn all() -> &'static [Self] {
        &[
            CodeLensCommand::ToggleFileBlame,
            CodeLensCommand::ShowBlameHistory,
            CodeLensCommand::ShowFileHistory,
            CodeLensCommand::DiffWithPrevious,
            CodeLensCommand::ShowQuickCommitDetails,
            CodeLensCommand::ShowQuickCommitFileDetails,
            CodeLensCommand::ShowQuickFileHistory,
            CodeLensCommand::ShowQuickRepoHistory,
        ]
    }

    fn tag(self) -> &'static str {
        self.command_id()
    }
}

/// Commands the status bar blame entry may invoke when clicked.
///
/// A superset of [`CodeLensCommand`]: the status bar can additionally diff
/// against the working tree and toggle the lenses themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusBarCommand {
    /// Toggle whole-file blame annotations
    #[serde(rename = "revlens.toggleFileBlame")]
    ToggleFileBlame,
    /// Open the blame history explorer for the current line
    #[serde(rename = "revlens.showBlameHistory")]
    ShowBlameHistory,
    /// Open the file history explorer
    #[serde(rename = "revlens.showFileHistory")]
    ShowFileHistory,
    /// Diff the file against its previous revision
    #[serde(rename = "revlens.diffWithPrevious")]
    DiffWithPrevious,
    /// Diff the file against the working tree
    #[serde(rename = "revlens.diffWithWorking")]
    DiffWithWorking,
    /// Toggle code lenses on or off
    #[serde(rename = "revlens.toggleCodeLens")]
    ToggleCodeLens,
    /// Quick pick with details of the current line's commit (default)
    #[default]
    #[serde(rename = "revlens.showQuickCommitDetails")]
    ShowQuickCommitDetails,
    /// Quick pick with the commit's changes to the current file
    #[serde(rename = "revlens.showQuickCommitFileDetails")]
    ShowQuickCommitFileDetails,
    /// Quick pick of the current file's history
    #[serde(rename = "revlens.showQuickFileHistory")]
    ShowQuickFileHistory,
    /// Quick pick of the repository history
    #[serde(rename = "revlens.showQuickRepoHistory")]
    ShowQuickRepoHistory,
}

impl StatusBarCommand {
    /// The command identifier sent to the host when the entry is clicked.
    pub fn command_id(self) -> &'static str {
        match self {
            StatusBarCommand::ToggleFileBlame => "revlens.toggleFileBlame",
            StatusBarCommand::ShowBlameHistory => "revlens.showBlameHistory",
            StatusBarCommand::ShowFileHistory => "revlens.showFileHistory",
            StatusBarCommand::DiffWithPrevious => "revlens.diffWithPrevious",
            StatusBarCommand::DiffWithWorking => "revlens.diffWithWorking",
            StatusBarCommand::ToggleCodeLens => "revlens.toggleCodeLens",
            StatusBarCommand::ShowQuickCommitDetails => "revlens.showQuickCommitDetails",
            StatusBarCommand::ShowQuickCommitFileDetails => "revlens.showQuickCommitFileDetails",
            StatusBarCommand::ShowQuickFileHistory => "revlens.showQuickFileHistory",
            StatusBarCommand::ShowQuickRepoHistory => "revlens.showQuickRepoHistory",
        }
    }

    /// Symbolic action name, used in diagnostics and binding lookups.
    pub fn action(self) -> &'static str {
        match self {
            StatusBarCommand::ToggleFileBlame => "ToggleFileBlame",
            StatusBarCommand::ShowBlameHistory => "ShowBlameHistory",
            StatusBarCommand::ShowFileHistory => "ShowFileHistory",
            StatusBarCommand::DiffWithPrevious => "DiffWithPrevious",
            StatusBarCommand::DiffWithWorking => "DiffWithWorking",
            StatusBarCommand::ToggleCodeLens => "ToggleCodeLens",
            StatusBarCommand::ShowQuickCommitDetails => "ShowQuickCommitDetails",
            StatusBarCommand::ShowQuickCommitFileDetails => "ShowQuickCommitFileDetails",
            StatusBarCommand::ShowQuickFileHistory => "ShowQuickFileHistory",
            StatusBarCommand::ShowQuickRepoHistory => "ShowQuickRepoHistory",
        }
    }
}

impl ConfigOption for StatusBarCommand {
    const DOMAIN: &'static str = "statusBar.command";

    fn all() -> &'static [Self] {
        &[
            StatusBarCommand::ToggleFileBlame,
            StatusBarCommand::ShowBlameHistory,
            StatusBarCommand::ShowFileHistory,
            StatusBarCommand::DiffWithPrevious,
            StatusBarCommand::DiffWithWorking,
            StatusBarCommand::ToggleCodeLens,
            StatusBarCommand::ShowQuickCommitDetails,
            StatusBarCommand::ShowQuickCommitFileDetails,
            StatusBarCommand::ShowQuickFileHistory,
            StatusBarCommand::ShowQuickRepoHistory,
        ]
    }

    fn tag(self) -> &'static str {
        self.command_id()
    }
}

/// Snapshot of the command identifiers the host integration layer has
/// registered, consulted only while building [`CommandBindings`].
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    ids: HashSet<String>,
}

impl CommandRegistry {
    /// Build a registry snapshot from the host's registered identifiers.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `id` was registered by the host.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// Validated binding table from symbolic action names to command identifiers.
///
/// Built once per assembly from the two command vocabularies. Construction
/// fails if any identifier is missing from the host registry; afterwards
/// [`resolve`](Self::resolve) cannot dangle.
#[derive(Debug, Clone)]
pub struct CommandBindings {
    bindings: HashMap<&'static str, &'static str>,
}

impl CommandBindings {
    /// Validate every command identifier against the host registry and build
    /// the action lookup table.
    pub fn build(registry: &CommandRegistry) -> Result<Self, ConfigError> {
        let mut bindings: HashMap<&'static str, &'static str> = HashMap::new();

        for command in CodeLensCommand::all() {
            if !registry.contains(command.command_id()) {
                return Err(ConfigError::UnknownCommand {
                    action: command.action(),
                    command: command.command_id(),
                });
            }
            bindings.insert(command.action(), command.command_id());
        }
        for command in StatusBarCommand::all() {
            if !registry.contains(command.command_id()) {
                return Err(ConfigError::UnknownCommand {
                    action: command.action(),
                    command: command.command_id(),
                });
            }
            bindings.insert(command.action(), command.command_id());
        }

        log::debug!("command bindings validated: {} actions", bindings.len());
        Ok(Self { bindings })
    }

    /// Command identifier bound to the symbolic action `action`, if any.
    pub fn resolve(&self, action: &str) -> Option<&'static str> {
        self.bindings.get(action).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_registry() -> CommandRegistry {
        CommandRegistry::new(
            CodeLensCommand::all()
                .iter()
                .map(|c| c.command_id())
                .chain(StatusBarCommand::all().iter().map(|c| c.command_id())),
        )
    }

    #[test]
    fn build_succeeds_against_a_complete_registry() {
        let bindings = CommandBindings::build(&full_registry()).unwrap();
        assert_eq!(
            bindings.resolve("ToggleFileBlame"),
            Some("revlens.toggleFileBlame")
        );
        assert_eq!(
            bindings.resolve("DiffWithWorking"),
            Some("revlens.diffWithWorking")
        );
        assert_eq!(bindings.resolve("NotAnAction"), None);
    }

    #[test]
    fn build_fails_fast_on_an_unregistered_command() {
        let mut ids: Vec<&str> = CodeLensCommand::all()
            .iter()
            .map(|c| c.command_id())
            .chain(StatusBarCommand::all().iter().map(|c| c.command_id()))
            .collect();
        ids.retain(|id| *id != "revlens.toggleCodeLens");

        let err = CommandBindings::build(&CommandRegistry::new(ids)).unwrap_err();
        match err {
            ConfigError::UnknownCommand { action, command } => {
                assert_eq!(action, "ToggleCodeLens");
                assert_eq!(command, "revlens.toggleCodeLens");
            }
        }
    }

    #[test]
    fn command_enums_serialize_as_full_identifiers() {
        let json = serde_json::to_value(CodeLensCommand::ShowQuickFileHistory).unwrap();
        assert_eq!(json, serde_json::json!("revlens.showQuickFileHistory"));
        let parsed: StatusBarCommand =
            serde_json::from_value(serde_json::json!("revlens.diffWithWorking")).unwrap();
        assert_eq!(parsed, StatusBarCommand::DiffWithWorking);
    }

    #[test]
    fn shared_actions_bind_to_the_same_identifier() {
        for lens in CodeLensCommand::all() {
            for status in StatusBarCommand::all() {
                if lens.action() == status.action() {
                    assert_eq!(lens.command_id(), status.command_id());
                }
            }
        }
    }
}
