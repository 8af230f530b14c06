// ABOUTME: Agent configuration - model, prompt, and loop bounds.
// ABOUTME: Constructed explicitly at startup; no ambient state.

use std::time::Duration;

/// Configuration for an agent runner.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,

    /// System prompt seeded into the conversation.
    pub system_prompt: String,

    /// Upper bound on model rounds within a single user turn.
    pub max_rounds: usize,

    /// Courtesy pause before each model call. Rate-limit etiquette, not a
    /// correctness mechanism.
    pub round_delay: Duration,

    /// Maximum output tokens per model call, if capped.
    pub max_tokens: Option<u32>,
}

impl AgentConfig {
    /// Create a config with required fields and defaults.
    pub fn new(model: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            max_rounds: 16,
            round_delay: Duration::from_secs(1),
            max_tokens: None,
        }
    }

    /// Set the per-turn round bound.
    pub fn max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }

    /// Set the courtesy delay before each model call.
    pub fn round_delay(mut self, delay: Duration) -> Self {
        self.round_delay = delay;
        self
    }

    /// Cap output tokens per model call.
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}
