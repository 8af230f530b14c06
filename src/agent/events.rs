// ABOUTME: Progress events emitted while a turn runs.
// ABOUTME: Sinks render them; nothing in the loop blocks on a sink.

use crate::step::Step;

/// Events emitted by the runner as a turn progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    /// A displayable non-tool step (START or PLAN).
    Step(Step),

    /// A tool is about to be invoked.
    ToolCall { tool: String, input: String },

    /// A tool invocation finished.
    ToolResult {
        tool: String,
        input: String,
        output: String,
    },

    /// The model requested a tool the registry does not know.
    ToolMissing { tool: String },
}

/// Observer for runner progress.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &AgentEvent);
}

/// Sink that discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&self, _event: &AgentEvent) {}
}
