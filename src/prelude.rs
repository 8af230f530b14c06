// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use nimbus::prelude::*;` to get started quickly.

pub use crate::agent::{
    AgentConfig, AgentEvent, AgentRunner, Conversation, EventSink, NullSink, TurnOutcome,
    step_protocol_prompt,
};
pub use crate::error::{LlmError, NimbusError, ToolError};
pub use crate::llm::{ChatClient, ChatRequest, ChatResponse, GeminiClient, Role, Turn, Usage};
pub use crate::step::{ParsedResponse, Step, parse_response};
pub use crate::tool::{Registry, Tool, ToolSummary};
pub use crate::tools::WeatherTool;
