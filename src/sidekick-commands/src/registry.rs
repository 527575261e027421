//! Registry merging per-scope command records.

use std::collections::HashMap;

use crate::command::CommandDefinition;
use crate::loader::CommandRecord;

/// Name-keyed registry of command definitions merged from per-scope loads.
///
/// Merging is last-write-wins: a later record's entry replaces an earlier
/// one of the same name, matching the loader's record reduction.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDefinition>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a definition, replacing any existing one of the same name.
    pub fn register(&mut self, definition: CommandDefinition) {
        self.commands.insert(definition.name.clone(), definition);
    }

    /// Merge a per-scope record into the registry.
    pub fn merge_record(&mut self, record: CommandRecord) {
        for (name, definition) in record {
            self.commands.insert(name, definition);
        }
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    /// Check if a command exists.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Get all command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.values()
    }
}

impl FromIterator<CommandDefinition> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = CommandDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for definition in iter {
            registry.register(definition);
        }
        registry
    }
}
