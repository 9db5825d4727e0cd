//! HTTP client for the Tour de Finance platform.

use serde_json::Value;
use url::Url;

use crate::{
    endpoint::{AgentOptions, AgentStatusRequest, AllHistoriesOptions, CurrentStatusOptions,
        Endpoint, HistoryRequest, TradeRequest},
    response::interpret,
    transport::{HttpTransport, Transport},
    types::Securities,
    ConnectionOverrides, ConnectionSettings, Error,
};

/// Operation label for errors raised while building a client.
pub(crate) const NEW_CLIENT: &str = "new(settings)";

/// Client for the TDF HTTP API.
///
/// Holds the instance connection defaults and a [`Transport`]. Every
/// operation is a GET; each call validates its arguments, resolves the
/// connection (per-call override, then instance default), sends one request
/// and classifies the body. Nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
    settings: ConnectionSettings,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for `http://localhost:80`.
    pub fn new() -> Result<Self, Error> {
        Self::with_settings(ConnectionSettings::default())
    }

    /// Creates a client with custom instance defaults. Fails if the defaults
    /// are not a usable `http`/`https` origin.
    pub fn with_settings(settings: ConnectionSettings) -> Result<Self, Error> {
        settings.validate(NEW_CLIENT)?;
        let transport = HttpTransport::new().map_err(Error::Transport)?;
        Ok(Self::with_transport(settings, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of a caller-provided transport. The defaults
    /// are checked on every call instead.
    pub fn with_transport(settings: ConnectionSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one endpoint: validate, build the URL, send, interpret.
    pub async fn execute<E>(&self, endpoint: &E) -> Result<Value, Error>
    where
        E: Endpoint + Sync + ?Sized,
    {
        let operation = endpoint.operation();
        endpoint.validate_all()?;

        let settings = self.settings.resolve(endpoint.connection());
        settings.validate(operation)?;
        let url = endpoint.build_url(&settings.base_url(operation)?);
        tracing::debug!("{} -> GET {}", operation, redact(&url));

        let resp = self.transport.get(url).await.map_err(|e| {
            tracing::error!("Failed to get resource for {}: {}", operation, e);
            Error::Transport(e)
        })?;
        tracing::debug!("{} <- HTTP {} ({} bytes)", operation, resp.status, resp.body.len());

        interpret(&resp.body, endpoint.sentinels())
    }

    /// Buys (positive amount) or sells (negative amount) securities for an
    /// agent. Accepts a single [`Security`](crate::types::Security) or a batch.
    pub async fn trade(
        &self,
        securities: impl Into<Securities>,
        options: &AgentOptions,
    ) -> Result<Value, Error> {
        let securities = securities.into();
        self.execute(&TradeRequest::new(&securities, options)).await
    }

    /// Fetches an agent's current composition.
    pub async fn agent_status(&self, options: &AgentOptions) -> Result<Value, Error> {
        self.execute(&AgentStatusRequest::new(options)).await
    }

    /// Fetches the price history of one symbol, or of every symbol when
    /// `symbol` is `None`.
    pub async fn history(
        &self,
        symbol: Option<&str>,
        options: &ConnectionOverrides,
    ) -> Result<Value, Error> {
        self.execute(&HistoryRequest::new(symbol, options)).await
    }

    /// Fetches the current status of all securities.
    pub async fn current_status(&self, options: &CurrentStatusOptions) -> Result<Value, Error> {
        self.execute(options).await
    }

    /// Fetches all available price histories.
    pub async fn all_histories(&self, options: &AllHistoriesOptions) -> Result<Value, Error> {
        self.execute(options).await
    }
}

// Keeps api keys out of logs.
fn redact(url: &Url) -> Url {
    let mut redacted = url.clone();
    if url.query().is_some() {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "apikey" {
                    "***".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted
}
