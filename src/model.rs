//! Data model for extracted function documentation.

use std::collections::BTreeMap;

/// Records keyed by function name. Iteration is in ascending name order.
pub type Records = BTreeMap<String, FunctionRecord>;

/// A single documented shell function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// Invocation line, `name` unless a `##C` directive overrides it
    pub usage: String,
    /// `##D` fragments, each fully sanitized
    pub description: Vec<String>,
    /// `##A` entries in first-seen order
    pub arguments: Vec<ArgEntry>,
    /// `##E` fragments, trimmed only
    pub examples: Vec<String>,
}

/// Parsed `##A arg=description` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgEntry {
    pub name: String,
    pub description: String,
}

impl FunctionRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Insert an argument, replacing the description of an existing entry
    /// with the same name.
    pub fn set_argument(&mut self, name: String, description: String) {
        match self.arguments.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.description = description,
            None => self.arguments.push(ArgEntry { name, description }),
        }
    }
}
