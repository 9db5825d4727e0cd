//! Error types for the API client.

/// Boxed error returned by a [`Transport`](crate::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when calling the TDF platform.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller input was rejected before any request was sent.
    #[error("tdfClient.{operation}: {field}: {reason}")]
    Validation {
        /// Operation signature, e.g. `trade(securities, options, cb)`.
        operation: &'static str,
        field: String,
        reason: String,
    },
    /// The server rejected the api key for the agent.
    #[error("Unauthorized. Invalid apiKey.")]
    Unauthorized,
    /// The server could not load an agent. Market-data endpoints have no
    /// agent id to report.
    #[error("Failed to load agent{}. Agent not found.", agent_suffix(.agent_id))]
    AgentNotFound { agent_id: Option<String> },
    /// The response body was not valid JSON. Carries a body snippet.
    #[error("Failed to parse TDF server response!")]
    ResponseFormat { body: String },
    /// The server answered with a JSON `error` object.
    #[error("code: {code}. message: {message}")]
    ServerReported {
        code: serde_json::Value,
        message: String,
    },
    /// The transport failed (connection refused, timeout, DNS, ...).
    #[error("Request failed")]
    Transport(#[source] TransportError),
}

fn agent_suffix(agent_id: &Option<String>) -> String {
    match agent_id {
        Some(id) => format!(" {}", id),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn validation(
        operation: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::Validation {
            operation,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error was raised before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
