//! Classification of raw TDF response bodies.

use serde_json::Value;

use crate::endpoint::Sentinels;
use crate::Error;

/// Plain-text body marker for a rejected api key.
pub const NOT_AUTHORIZED_SENTINEL: &str = "Not authorized to operate on agent.";
/// Plain-text body marker for an unknown agent.
pub const AGENT_LOAD_FAILED_SENTINEL: &str = "Failed to load agent";

/// Status and body as handed back by a [`Transport`](crate::Transport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Turns a response body into the parsed JSON value or a typed error.
///
/// First match wins: the two plain-text sentinels, JSON parse failure,
/// a JSON `error` member, then success. The status code is not consulted.
pub fn interpret(body: &str, sentinels: Sentinels<'_>) -> Result<Value, Error> {
    if body.contains(NOT_AUTHORIZED_SENTINEL) {
        return Err(Error::Unauthorized);
    }
    if body.contains(AGENT_LOAD_FAILED_SENTINEL) {
        return Err(Error::AgentNotFound {
            agent_id: match sentinels {
                Sentinels::Agent(agent_id) => Some(agent_id.to_string()),
                Sentinels::Market => None,
            },
        });
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::warn!("Failed to parse TDF server response: {} | body: {}", e, snippet);
        Error::ResponseFormat { body: snippet }
    })?;

    if let Some(error) = json.get("error").filter(|e| is_truthy(e)) {
        return Err(Error::ServerReported {
            code: error.get("code").cloned().unwrap_or(Value::Null),
            message: match error.get("message") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            },
        });
    }

    Ok(json)
}

// The server signals errors with any non-empty `error` member.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
