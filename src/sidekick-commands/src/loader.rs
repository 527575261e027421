//! Command loading from well-known directories.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::command::{CommandDefinition, LoadedCommand};
use crate::files::is_markdown_file;
use crate::frontmatter::{parse_frontmatter, CommandFrontmatter, FrontmatterError};
use crate::scope::CommandScope;

/// Errors that can occur when loading a single command file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frontmatter parsing error.
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    /// Filename is not valid UTF-8.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

/// Name-keyed mapping of command definitions, last write wins.
pub type CommandRecord = HashMap<String, CommandDefinition>;

/// Load all commands from one directory, tagged with a provenance scope.
///
/// A missing directory is an expected state and yields an empty list.
/// Entries are processed in directory-listing order, non-recursively; only
/// regular `.md` files are considered. A file that fails to read or parse
/// is skipped with a warning; one bad file never aborts the scan.
pub fn load_commands_from_dir(dir: &Path, scope: CommandScope) -> Vec<LoadedCommand> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Command directory {:?} does not exist, skipping", dir);
            return Vec::new();
        }
        Err(e) => {
            warn!("Error listing command directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut commands = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error reading entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let name = entry.file_name();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !is_markdown_file(&name.to_string_lossy(), file_type) {
            continue;
        }

        let path = entry.path();
        match load_command_file(&path, scope) {
            Ok(cmd) => {
                debug!("Loaded command '{}' from {:?}", cmd.name, path);
                commands.push(cmd);
            }
            Err(e) => {
                warn!("Failed to load command from {:?}: {}", path, e);
            }
        }
    }

    commands
}

/// Load a single command from a file.
fn load_command_file(path: &Path, scope: CommandScope) -> Result<LoadedCommand, LoadError> {
    // Command name is always the base name minus `.md`, never frontmatter.
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".md"))
        .ok_or_else(|| LoadError::InvalidFilename(format!("{path:?}")))?
        .to_string();

    let content = std::fs::read_to_string(path)?;
    let (frontmatter, body) = parse_frontmatter::<CommandFrontmatter>(&content)?;

    let definition = CommandDefinition::new(&name, frontmatter, body, scope);

    Ok(LoadedCommand {
        name,
        path: path.to_path_buf(),
        definition,
        scope,
    })
}

/// Reduce a load pass into a name-keyed record, later entries overwriting
/// earlier ones of the same derived name.
pub fn commands_to_record(commands: Vec<LoadedCommand>) -> CommandRecord {
    commands
        .into_iter()
        .map(|cmd| (cmd.name, cmd.definition))
        .collect()
}

/// Load user commands from `~/.claude/commands`.
pub fn load_user_commands() -> CommandRecord {
    match user_commands_dir() {
        Some(dir) => commands_to_record(load_commands_from_dir(&dir, CommandScope::User)),
        None => CommandRecord::new(),
    }
}

/// Load project commands from `./.claude/commands`.
pub fn load_project_commands() -> CommandRecord {
    match project_dir(".claude/commands") {
        Some(dir) => commands_to_record(load_commands_from_dir(&dir, CommandScope::Project)),
        None => CommandRecord::new(),
    }
}

/// Load global opencode commands from `~/.config/opencode/command`.
pub fn load_opencode_global_commands() -> CommandRecord {
    match opencode_global_dir() {
        Some(dir) => commands_to_record(load_commands_from_dir(&dir, CommandScope::Opencode)),
        None => CommandRecord::new(),
    }
}

/// Load project opencode commands from `./.opencode/command`.
pub fn load_opencode_project_commands() -> CommandRecord {
    match project_dir(".opencode/command") {
        Some(dir) => {
            commands_to_record(load_commands_from_dir(&dir, CommandScope::OpencodeProject))
        }
        None => CommandRecord::new(),
    }
}

fn user_commands_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".claude").join("commands"))
}

fn opencode_global_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("opencode").join("command"))
}

fn project_dir(suffix: &str) -> Option<PathBuf> {
    std::env::current_dir().ok().map(|cwd| cwd.join(suffix))
}
