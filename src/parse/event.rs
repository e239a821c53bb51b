//! Hook payload decoding.
//!
//! The host sends `{"tool_name": ..., "tool_input": {"command": ...}}` on stdin.
//! Anything that does not decode is treated as "not applicable".

use serde::Deserialize;

#[derive(Deserialize)]
struct HookInput {
    tool_name: Option<String>,
    tool_input: Option<ToolInput>,
}

#[derive(Deserialize)]
struct ToolInput {
    command: Option<serde_json::Value>,
}

/// A decoded PreToolUse event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptionEvent {
    /// Tool the agent invoked. Informational only.
    pub tool_name: String,
    /// Raw shell command text; empty when absent or not a string.
    pub command: String,
}

/// Decode a raw stdin payload.
///
/// Returns `None` for empty input, malformed JSON, or a non-object payload.
/// A missing `tool_input` or `command`, or a non-string `command`, decodes to
/// an empty command.
pub fn decode(input: &str) -> Option<InterceptionEvent> {
    let hook_input: HookInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("undecodable hook input: {e}");
            return None;
        }
    };

    let command = hook_input
        .tool_input
        .and_then(|t| t.command)
        .and_then(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .unwrap_or_default();

    Some(InterceptionEvent {
        tool_name: hook_input.tool_name.unwrap_or_default(),
        command,
    })
}
