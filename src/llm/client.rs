// ABOUTME: Defines the ChatClient trait - the abstraction layer that allows
// ABOUTME: nimbus to work with any LLM provider.

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse};
use crate::error::LlmError;

/// Trait for LLM client implementations.
///
/// A single blocking completion call; the transport layer's timeout is the
/// only bound and there is no cancellation once a call is in flight.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Complete a conversation.
    async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, LlmError>;
}
