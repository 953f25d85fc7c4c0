//! People described in a written (non-live) mediation.

use serde::{Deserialize, Serialize};

/// One side of the conflict: a name and their account of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub statement: String,
}

impl Person {
    pub fn new(name: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statement: statement.into(),
        }
    }

    /// Name shown in summaries. Unnamed people become `Person A`, `Person B`, ...
    pub fn display_name(&self, index: usize) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            placeholder_name(index)
        } else {
            name.to_string()
        }
    }
}

/// Positional placeholder used when a person left their name blank.
pub fn placeholder_name(index: usize) -> String {
    let letter = char::from_u32('A' as u32 + index as u32).unwrap_or('?');
    format!("Person {letter}")
}
