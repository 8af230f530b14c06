// ABOUTME: Tolerant parser for raw model output.
// ABOUTME: Guarantees the loop can always make forward progress.

use serde_json::Value;

use super::Step;

/// Outcome of parsing one raw model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Every step in model order. Never reduced to TOOL entries only.
    pub steps: Vec<Step>,

    /// Step identity used for dispatch; `None` when the model returned a
    /// collection.
    pub primary: Option<Step>,
}

impl ParsedResponse {
    fn output(content: &str) -> Self {
        let step = Step::Output {
            content: content.to_string(),
        };
        Self {
            steps: vec![step.clone()],
            primary: Some(step),
        }
    }
}

/// Parse raw model text into one or more steps.
///
/// Text that is not valid JSON, or that parses to a bare scalar, is
/// wrapped as a single OUTPUT step carrying the text verbatim. Objects
/// become a one-element batch; arrays keep every element and have no
/// primary step.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return ParsedResponse::output(raw),
    };

    match value {
        Value::Object(_) => {
            let step = Step::from_value(&value);
            ParsedResponse {
                steps: vec![step.clone()],
                primary: Some(step),
            }
        }
        Value::Array(items) => ParsedResponse {
            steps: items.iter().map(Step::from_value).collect(),
            primary: None,
        },
        Value::String(s) => ParsedResponse::output(&s),
        other => ParsedResponse::output(&other.to_string()),
    }
}
