//! Command provenance scopes.

use serde::{Deserialize, Serialize};

/// Which well-known directory produced a command.
///
/// The scope is rendered into the command description as a `(scope) `
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandScope {
    /// `~/.claude/commands`
    User,
    /// `./.claude/commands`
    Project,
    /// `~/.config/opencode/command`
    Opencode,
    /// `./.opencode/command`
    OpencodeProject,
}

impl CommandScope {
    /// Get the scope as its fixed string tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::Opencode => "opencode",
            Self::OpencodeProject => "opencode-project",
        }
    }
}

impl std::fmt::Display for CommandScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
