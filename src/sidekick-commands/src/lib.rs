//! Custom command loader for the Sidekick host extensions.
//!
//! This crate scans well-known directories for custom slash commands
//! defined in markdown files with optional YAML frontmatter and turns them
//! into structured command templates for the host.
//!
//! # Command File Format
//!
//! ```markdown
//! ---
//! description: "Description of the command"
//! agent: "build"                  # optional: specific agent
//! model: "anthropic/claude-opus"  # optional: specific model
//! subtask: "true"                 # optional: execute as subtask
//! argument-hint: "<path>"         # optional: hint shown for arguments
//! ---
//!
//! Your command template here.
//! ```
//!
//! The command name is always the file's base name minus `.md`; the body is
//! wrapped in fixed instruction/user-request delimiters with a literal
//! `$ARGUMENTS` placeholder the host substitutes at invocation time.
//!
//! # Search Paths
//!
//! Commands are loaded from four well-known directories, each tagged with a
//! provenance scope:
//!
//! 1. `~/.claude/commands/` (`user`)
//! 2. `./.claude/commands/` (`project`)
//! 3. `~/.config/opencode/command/` (`opencode`)
//! 4. `./.opencode/command/` (`opencode-project`)

mod command;
mod files;
mod frontmatter;
mod loader;
mod model;
mod registry;
mod scope;

pub use command::{
    hints, substitute_placeholders, wrap_template, CommandDefinition, LoadedCommand,
};
pub use files::is_markdown_file;
pub use frontmatter::{parse_frontmatter, CommandFrontmatter, FrontmatterError};
pub use loader::{
    commands_to_record, load_commands_from_dir, load_opencode_global_commands,
    load_opencode_project_commands, load_project_commands, load_user_commands, CommandRecord,
    LoadError,
};
pub use model::sanitize_model_field;
pub use registry::CommandRegistry;
pub use scope::CommandScope;
