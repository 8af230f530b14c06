// ABOUTME: Agent runner - drives the step protocol for one conversation.
// ABOUTME: Parses model output, executes TOOL steps, and decides termination.

use std::sync::Arc;

use serde_json::json;

use super::conversation::Conversation;
use super::definition::AgentConfig;
use super::events::{AgentEvent, EventSink, NullSink};
use crate::error::{LlmError, ToolError};
use crate::llm::{ChatClient, ChatRequest, Role, Usage};
use crate::step::{Step, parse_response};
use crate::tool::Registry;

/// Result of one user turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The user-visible answer. Buffered tool outputs take precedence
    /// over model narration.
    pub answer: String,

    /// Number of model rounds in the inner loop.
    pub rounds: usize,

    /// Number of tool invocations made during the turn.
    pub tool_calls: usize,

    /// Token usage across the turn's model calls.
    pub usage: Usage,
}

/// Drives the step protocol: model call, parse, tool execution, repeat.
///
/// The runner exclusively owns its conversation; a transport or API
/// failure aborts only the current turn, retaining appended history and
/// discarding the turn's buffered tool outputs.
pub struct AgentRunner {
    config: AgentConfig,
    client: Arc<dyn ChatClient>,
    tools: Registry,
    conversation: Conversation,
    sink: Arc<dyn EventSink>,
}

impl AgentRunner {
    /// Create a runner; the conversation is seeded with the system turn.
    pub fn new(config: AgentConfig, client: Arc<dyn ChatClient>, tools: Registry) -> Self {
        let conversation = Conversation::new(&config.system_prompt);
        Self {
            config,
            client,
            tools,
            conversation,
            sink: Arc::new(NullSink),
        }
    }

    /// Install an event sink for progress display.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The conversation so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run one user turn to completion.
    pub async fn run_turn(&mut self, query: &str) -> Result<TurnOutcome, LlmError> {
        self.conversation.push(Role::User, query);

        let mut outputs: Vec<String> = Vec::new();
        let mut tool_calls = 0;
        let mut usage = Usage::default();
        let mut rounds = 0;

        loop {
            rounds += 1;
            if rounds > self.config.max_rounds {
                return Err(LlmError::Api {
                    status: 0,
                    message: format!("turn exceeded max rounds ({})", self.config.max_rounds),
                });
            }

            tokio::time::sleep(self.config.round_delay).await;

            let mut request = ChatRequest::new(&self.config.model)
                .turns(self.conversation.turns().to_vec())
                .json_output(true);
            if let Some(max) = self.config.max_tokens {
                request = request.max_tokens(max);
            }

            let response = self.client.complete(&request).await?;
            usage.add(&response.usage);

            let raw = response.content.trim().to_string();
            let parsed = parse_response(&raw);

            // The model must see its own prior utterance next round,
            // whatever the parse outcome.
            self.conversation.push(Role::Assistant, raw.clone());

            let mut saw_tool_step = false;
            for step in &parsed.steps {
                if let Step::Tool { tool, input } = step {
                    saw_tool_step = true;
                    self.sink.on_event(&AgentEvent::ToolCall {
                        tool: tool.clone(),
                        input: input.clone(),
                    });

                    let result = self.tools.invoke(tool, input).await;
                    match result {
                        Ok(output) => {
                            tool_calls += 1;
                            outputs.push(output.clone());
                            self.observe(tool, input, &output);
                            self.sink.on_event(&AgentEvent::ToolResult {
                                tool: tool.clone(),
                                input: input.clone(),
                                output,
                            });
                        }
                        Err(ToolError::NotFound(_)) => {
                            tracing::warn!(tool = %tool, "tool not found");
                            self.sink
                                .on_event(&AgentEvent::ToolMissing { tool: tool.clone() });
                        }
                        Err(e) => {
                            // The model gets to see the failure; the
                            // answer buffer does not.
                            tracing::warn!(tool = %tool, error = %e, "tool invocation failed");
                            self.observe(tool, input, &e.to_string());
                        }
                    }
                }
            }

            match parsed.primary {
                // Model echoing an observation back is a no-op.
                Some(Step::Observe { .. }) => continue,
                Some(step @ (Step::Start { .. } | Step::Plan { .. })) => {
                    self.sink.on_event(&AgentEvent::Step(step));
                    continue;
                }
                // Executed above.
                Some(Step::Tool { .. }) => continue,
                Some(Step::Output { content }) => {
                    return Ok(finish(outputs, content, rounds, tool_calls, usage));
                }
                // Unrecognized step tags terminate like OUTPUT.
                Some(Step::Unknown { content }) => {
                    let best = content.unwrap_or(raw);
                    return Ok(finish(outputs, best, rounds, tool_calls, usage));
                }
                // The model batched tool requests; it needs to see the
                // observations before it can conclude.
                None if saw_tool_step => continue,
                // Collection without tool requests: universal fallback.
                None => {
                    return Ok(finish(outputs, raw, rounds, tool_calls, usage));
                }
            }
        }
    }

    fn observe(&mut self, tool: &str, input: &str, output: &str) {
        let record = json!({
            "step": "OBSERVE",
            "tool": tool,
            "input": input,
            "output": output,
        });
        self.conversation.push(Role::ToolResult, record.to_string());
    }
}

fn finish(
    outputs: Vec<String>,
    fallback: String,
    rounds: usize,
    tool_calls: usize,
    usage: Usage,
) -> TurnOutcome {
    let answer = if outputs.is_empty() {
        fallback
    } else {
        outputs.join("\n")
    };
    TurnOutcome {
        answer,
        rounds,
        tool_calls,
        usage,
    }
}
