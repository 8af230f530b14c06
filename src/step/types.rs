// ABOUTME: Defines the Step sum type - one structured unit of model output.
// ABOUTME: Classification from untrusted JSON values lives here.

use serde_json::Value;

/// One structured unit of model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Echo of the triggering user input.
    Start { content: String },

    /// Free-text reasoning. Displayed, never executed.
    Plan { content: String },

    /// Request to invoke a named capability with one string argument.
    Tool { tool: String, input: String },

    /// Recorded result of a tool invocation. Only ever produced by the
    /// loop; model-authored OBSERVE output never drives execution.
    Observe {
        tool: String,
        input: String,
        output: String,
    },

    /// Terminal step; ends the inner loop.
    Output { content: String },

    /// Any value without a recognized `step` tag. Never executed; the
    /// runner dispatches it like `Output` so the loop always terminates
    /// once the model stops requesting tools.
    Unknown { content: Option<String> },
}

impl Step {
    /// Classify one parsed JSON value into a step.
    ///
    /// Missing string fields default to empty; an unrecognized or absent
    /// `step` tag (non-objects included) becomes `Unknown`.
    pub fn from_value(value: &Value) -> Step {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        match value.get("step").and_then(Value::as_str) {
            Some("START") => Step::Start {
                content: field("content"),
            },
            Some("PLAN") => Step::Plan {
                content: field("content"),
            },
            Some("TOOL") => Step::Tool {
                tool: field("tool"),
                input: field("input"),
            },
            Some("OBSERVE") => Step::Observe {
                tool: field("tool"),
                input: field("input"),
                output: field("output"),
            },
            Some("OUTPUT") => Step::Output {
                content: field("content"),
            },
            _ => Step::Unknown {
                content: value
                    .get("content")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
        }
    }

    /// True for TOOL steps.
    pub fn is_tool(&self) -> bool {
        matches!(self, Step::Tool { .. })
    }
}
