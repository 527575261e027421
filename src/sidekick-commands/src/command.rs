//! Command definition structures and template handling.

use std::path::PathBuf;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::frontmatter::CommandFrontmatter;
use crate::model::sanitize_model_field;
use crate::scope::CommandScope;

/// A command template materialized from a markdown file.
///
/// Immutable once constructed. The `template` field carries the file body
/// wrapped in the fixed instruction/user-request delimiters; the wrapping is
/// a permanent structural transform, not presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Name of the command (filename without extension).
    pub name: String,

    /// Description prefixed with the provenance scope, e.g. `(user) Does X`.
    pub description: String,

    /// Wrapped template body.
    pub template: String,

    /// Specific agent to run the command with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    /// Sanitized model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Whether to execute as a subtask (raw frontmatter value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<String>,

    /// Hint shown to the user for the command's arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
}

impl CommandDefinition {
    /// Build a definition from a parsed command file.
    ///
    /// Applies the fixed template wrapping, the `(scope) ` description
    /// prefix, and model sanitation. The name always comes from the file's
    /// base name, never from frontmatter.
    pub fn new(
        name: impl Into<String>,
        frontmatter: CommandFrontmatter,
        body: &str,
        scope: CommandScope,
    ) -> Self {
        let description = format!(
            "({scope}) {}",
            frontmatter.description.unwrap_or_default()
        );

        Self {
            name: name.into(),
            description,
            template: wrap_template(body),
            agent: frontmatter.agent,
            model: sanitize_model_field(frontmatter.model.as_deref()),
            subtask: frontmatter.subtask,
            argument_hint: frontmatter.argument_hint,
        }
    }

    /// Get the hints (placeholders) expected by this command's template.
    pub fn hints(&self) -> Vec<String> {
        hints(&self.template)
    }

    /// Check if this command expects arguments.
    pub fn expects_arguments(&self) -> bool {
        !self.hints().is_empty()
    }

    /// Substitute placeholders in the template with the given arguments.
    pub fn substitute(&self, arguments: &str) -> String {
        substitute_placeholders(&self.template, arguments)
    }
}

/// One on-disk file's parse result during a load pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCommand {
    /// Name of the command (filename without extension).
    pub name: String,
    /// Path to the source file.
    pub path: PathBuf,
    /// Materialized definition.
    pub definition: CommandDefinition,
    /// Which well-known directory produced it.
    pub scope: CommandScope,
}

/// Wrap a command body in the fixed instruction/user-request delimiters.
///
/// The body is trimmed; the `$ARGUMENTS` token stays literal for the host
/// to substitute at invocation time.
pub fn wrap_template(body: &str) -> String {
    format!(
        "<command-instruction>\n{}\n</command-instruction>\n\n<user-request>\n$ARGUMENTS\n</user-request>",
        body.trim()
    )
}

/// Extract placeholder hints from a template.
///
/// Returns `$ARGUMENTS` first when present, then `$1..$n` in ascending
/// order.
pub fn hints(template: &str) -> Vec<String> {
    let mut found = Vec::new();

    if template.contains("$ARGUMENTS") {
        found.push("$ARGUMENTS".to_string());
    }

    let Ok(re) = Regex::new(r"\$(\d+)") else {
        return found;
    };

    let mut numbered: Vec<u32> = re
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .collect();

    numbered.sort_unstable();
    numbered.dedup();

    for n in numbered {
        found.push(format!("${n}"));
    }

    found
}

/// Substitute placeholders in a template with arguments.
///
/// `$ARGUMENTS` is replaced with the full argument string; `$1`, `$2`, …
/// take individual whitespace-separated arguments, with the last numbered
/// placeholder capturing all remaining arguments.
pub fn substitute_placeholders(template: &str, arguments: &str) -> String {
    let mut result = template.replace("$ARGUMENTS", arguments);

    let args: Vec<&str> = arguments.split_whitespace().collect();
    let max_placeholder = find_max_placeholder(&result);

    for i in 1..=max_placeholder {
        let placeholder = format!("${i}");
        let replacement = if i == max_placeholder {
            if i as usize <= args.len() {
                args[(i as usize - 1)..].join(" ")
            } else {
                String::new()
            }
        } else {
            args.get(i as usize - 1).copied().unwrap_or("").to_string()
        };

        result = result.replace(&placeholder, &replacement);
    }

    result
}

/// Find the highest numbered placeholder in the template.
fn find_max_placeholder(template: &str) -> u32 {
    let Ok(re) = Regex::new(r"\$(\d+)") else {
        return 0;
    };

    re.captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
