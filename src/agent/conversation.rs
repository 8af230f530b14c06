// ABOUTME: Append-only conversation log - the model's entire working memory.
// ABOUTME: Owned and mutated exclusively by the agent runner.

use serde::{Deserialize, Serialize};

use crate::llm::{Role, Turn};

/// Ordered, append-only log of conversation turns.
///
/// The system turn is inserted once at construction and never removed.
/// The log grows for the life of the session; nothing is pruned or
/// summarized. A real deployment would cap or summarize behind this
/// interface without breaking the append-only contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create a conversation seeded with a system turn.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::new(Role::System, system_prompt)],
        }
    }

    /// Append a turn.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn::new(role, content));
    }

    /// All turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns, including the system turn.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when the log has no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
