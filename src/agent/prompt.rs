// ABOUTME: System prompt for the step protocol.
// ABOUTME: Renders the workflow rules plus the registered tool catalog.

use crate::tool::ToolSummary;

/// Build the step-protocol system prompt for a set of tools.
pub fn step_protocol_prompt(tools: &[ToolSummary]) -> String {
    let catalog = if tools.is_empty() {
        "- (none)".to_string()
    } else {
        tools
            .iter()
            .map(|t| format!("- {}: {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are an expert assistant that resolves user queries with a structured
workflow of steps: START, PLAN, TOOL, OBSERVE, OUTPUT.

Always reply with a single JSON object carrying a "step" field. Never
produce free text outside the JSON.

Workflow rules:
1. Begin with START (echo the user input), then PLAN your approach, call
   TOOLs when external data is needed, and finish with OUTPUT.
2. Respect this JSON shape exactly:
{{
    "step": "START" | "PLAN" | "TOOL" | "OBSERVE" | "OUTPUT",
    "content": "string",
    "tool": "string",
    "input": "string"
}}
3. "tool" and "input" are required for TOOL steps.
4. Only call tools from the list below. If several cities are mentioned,
   call the weather tool once per city and compile the results before
   OUTPUT.
5. Never invent observations; after each TOOL call, wait for the OBSERVE
   result before moving on.

Available tools:
{catalog}"#
    )
}
