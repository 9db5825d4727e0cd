//! Per-operation request descriptors.
//!
//! Every operation is an [`Endpoint`]: it knows how to validate itself, which
//! path and query it targets, and whether the agent sentinels apply to its
//! responses. [`Client::execute`](crate::Client::execute) runs any of them.

use url::Url;

use crate::{ConnectionOverrides, Error};

mod agent;
pub use self::agent::{AgentOptions, AgentStatusRequest, TradeRequest};

mod market;
pub use self::market::{
    AllHistoriesOptions, CurrentStatusOptions, HistoryRequest, DEFAULT_HISTORY_COUNT,
};

pub(crate) const TRADE: &str = "trade(securities, options, cb)";
pub(crate) const AGENT_STATUS: &str = "agentStatus(options, cb)";
pub(crate) const HISTORY: &str = "history(options, cb)";
pub(crate) const CURRENT_STATUS: &str = "currentStatus(options, cb)";
pub(crate) const ALL_HISTORIES: &str = "allHistories(options, cb)";

/// How the plain-text sentinels are reported. Both sentinels are checked
/// for every operation before JSON parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinels<'a> {
    /// A missing agent is reported with this id.
    Agent(&'a str),
    /// Market-data request: no agent id to report.
    Market,
}

/// A single TDF operation.
pub trait Endpoint {
    /// Operation signature used in validation messages and logs.
    fn operation(&self) -> &'static str;

    /// Per-call connection overrides.
    fn connection(&self) -> &ConnectionOverrides;

    /// Checks operation-specific arguments. Connection overrides are checked
    /// separately by [`Endpoint::validate_all`].
    fn validate(&self) -> Result<(), Error>;

    /// Path segments below the base URL, unencoded.
    fn path_segments(&self) -> Vec<&str>;

    /// Appends this operation's query parameters to the given URL.
    fn add_to_url(&self, url: &Url) -> Url;

    fn sentinels(&self) -> Sentinels<'_>;

    fn validate_all(&self) -> Result<(), Error> {
        self.connection().validate(self.operation())?;
        self.validate()
    }

    /// Builds the full request target on top of `base`.
    fn build_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.path_segments());
        }
        self.add_to_url(&url)
    }
}

pub(crate) fn require_non_empty(
    operation: &'static str,
    field: &str,
    value: &str,
) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::validation(
            operation,
            field,
            "Must be a non-empty string!",
        ));
    }
    Ok(())
}

pub(crate) fn optional_non_empty(
    operation: &'static str,
    field: &str,
    value: Option<&str>,
) -> Result<(), Error> {
    match value {
        Some(value) => require_non_empty(operation, field, value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectionSettings;

    fn base() -> Url {
        ConnectionSettings::new("http", "tdf.test", 3000)
            .base_url(CURRENT_STATUS)
            .unwrap()
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let url = HistoryRequest::new(Some("BRK/B"), &ConnectionOverrides::default())
            .build_url(&base());
        assert_eq!(url.path(), "/history/BRK%2FB");
    }

    #[test]
    fn connection_overrides_are_validated_first() {
        let options = CurrentStatusOptions::default()
            .with_symbol("")
            .with_connection(ConnectionOverrides::default().with_port(0));
        let err = options.validate_all().unwrap_err();
        assert!(err.to_string().contains("options.port"));
    }

    #[test]
    fn required_and_optional_strings() {
        assert!(require_non_empty(TRADE, "options.agentId", "").is_err());
        assert!(require_non_empty(TRADE, "options.agentId", "1").is_ok());
        assert!(optional_non_empty(HISTORY, "symbol", None).is_ok());
        assert!(optional_non_empty(HISTORY, "symbol", Some("")).is_err());
    }
}
