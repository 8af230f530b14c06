// ABOUTME: Interactive weather agent REPL built on nimbus.
// ABOUTME: Registers the wttr.in tool and drives the step protocol against Gemini.

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use nimbus::prelude::*;

/// Renders progress with one fixed prefix per step kind.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_event(&self, event: &AgentEvent) {
        match event {
            AgentEvent::Step(Step::Start { content }) => println!("[start] {}", content),
            AgentEvent::Step(Step::Plan { content }) => println!("[plan] {}", content),
            AgentEvent::Step(_) => {}
            AgentEvent::ToolCall { tool, input } => println!("[tool] {}({})", tool, input),
            AgentEvent::ToolResult {
                tool,
                input,
                output,
            } => println!("[tool] {}({}) = {}", tool, input, output),
            AgentEvent::ToolMissing { tool } => println!("[warn] tool {} not found", tool),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = Registry::new();
    registry.register(WeatherTool::new()).await;

    let client = Arc::new(GeminiClient::from_env()?);
    let prompt = step_protocol_prompt(&registry.summaries().await);
    let config = AgentConfig::new("gemini-2.5-flash", prompt);

    let mut runner = AgentRunner::new(config, client, registry).with_sink(Arc::new(ConsoleSink));

    let mut rl = DefaultEditor::new()?;
    println!("Weather Agent - ask about the current weather in any city. Type 'quit' to exit.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        let _ = rl.add_history_entry(line);

        match runner.run_turn(line).await {
            Ok(outcome) => println!("\n{}\n", outcome.answer),
            Err(e) => println!("[warn] model request failed: {}\n", e),
        }
    }

    Ok(())
}
