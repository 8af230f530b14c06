// ABOUTME: Defines the Tool trait - the core abstraction for agent capabilities.
// ABOUTME: Tools have a name, a description, and take one string argument.

use async_trait::async_trait;

use crate::error::ToolError;

/// A capability the agent can invoke by name.
///
/// Tools take a single string argument and produce a single string
/// result. A tool is expected to catch its own transient failures
/// (network errors and the like) and convert them into a descriptive
/// result string; `Err` is reserved for invocation failures the tool
/// could not absorb, and never aborts a turn.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the system prompt.
    fn description(&self) -> &str;

    /// Invoke the tool with the given input.
    async fn invoke(&self, input: &str) -> Result<String, ToolError>;
}
