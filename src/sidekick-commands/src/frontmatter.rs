//! Frontmatter parsing for command markdown files.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// YAML parsing error inside a delimited block.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Frontmatter keys recognized on command files.
///
/// Every field is an optional string; unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFrontmatter {
    /// Human-readable description of the command.
    #[serde(default)]
    pub description: Option<String>,

    /// Specific agent to use for this command.
    #[serde(default)]
    pub agent: Option<String>,

    /// Specific model to use for this command.
    #[serde(default)]
    pub model: Option<String>,

    /// Whether to execute this command as a subtask.
    #[serde(default)]
    pub subtask: Option<String>,

    /// Hint shown to the user for the command's arguments.
    #[serde(default, rename = "argument-hint")]
    pub argument_hint: Option<String>,
}

/// Split an optional leading frontmatter block from the body of a file.
///
/// The block is bounded by a `---` marker line at the very start of the
/// content and a matching `---` marker line below it; its contents
/// deserialize into `T`. Everything after the closing marker is the body,
/// returned verbatim (trimming is the caller's responsibility).
///
/// No opening marker at the start means the whole input is the body with
/// default data. An opening marker without a closing marker degrades the
/// same way rather than failing. Only a block that fails to deserialize is
/// an error.
pub fn parse_frontmatter<T>(content: &str) -> Result<(T, &str), FrontmatterError>
where
    T: DeserializeOwned + Default,
{
    let Some(rest) = content.strip_prefix("---") else {
        return Ok((T::default(), content));
    };

    // The opening marker must be a line of its own.
    if !rest.is_empty() && !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        return Ok((T::default(), content));
    }

    let Some(end_pos) = rest.find("\n---") else {
        // Missing closing marker, treat the whole input as body.
        return Ok((T::default(), content));
    };

    let block = rest[..end_pos].trim();
    let body = &rest[end_pos + 4..];

    let data: T = if block.is_empty() {
        T::default()
    } else {
        serde_yaml::from_str(block)?
    };

    Ok((data, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_recognized_keys() {
        let content = r#"---
description: "Test command"
agent: "build"
model: "anthropic/claude-opus"
subtask: "true"
argument-hint: "<path>"
---

This is the template content."#;

        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data.description, Some("Test command".to_string()));
        assert_eq!(data.agent, Some("build".to_string()));
        assert_eq!(data.model, Some("anthropic/claude-opus".to_string()));
        assert_eq!(data.subtask, Some("true".to_string()));
        assert_eq!(data.argument_hint, Some("<path>".to_string()));
        assert_eq!(body.trim(), "This is the template content.");
    }

    #[test]
    fn test_no_frontmatter_returns_whole_input() {
        let content = "Just a template without frontmatter.";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data, CommandFrontmatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_body_excludes_block() {
        let content = "---\ndescription: Reviews code\n---\nCheck style.";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data.description, Some("Reviews code".to_string()));
        assert!(!body.contains("description"));
        assert_eq!(body.trim(), "Check style.");
    }

    #[test]
    fn test_empty_block() {
        let content = "---\n---\n\nTemplate only.";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data, CommandFrontmatter::default());
        assert_eq!(body.trim(), "Template only.");
    }

    #[test]
    fn test_missing_closing_marker_degrades_to_body() {
        let content = "---\ndescription: Test\n\nNo closing delimiter";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data, CommandFrontmatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_marker_not_on_own_line_is_body() {
        let content = "--- not a marker line\nbody";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data, CommandFrontmatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let content = "---\ndescription: Test\nname: overridden\ncolor: blue\n---\nBody";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data.description, Some("Test".to_string()));
        assert_eq!(body.trim(), "Body");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let content = "---\ndescription: [unclosed\n---\nBody";
        assert!(parse_frontmatter::<CommandFrontmatter>(content).is_err());
    }

    #[test]
    fn test_closing_marker_at_eof() {
        let content = "---\ndescription: Test\n---";
        let (data, body) = parse_frontmatter::<CommandFrontmatter>(content).unwrap();

        assert_eq!(data.description, Some("Test".to_string()));
        assert!(body.is_empty());
    }
}
