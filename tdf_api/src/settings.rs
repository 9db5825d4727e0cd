//! Connection defaults and per-call overrides.

use url::{Host, Url};

use crate::Error;

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_PORT: u16 = 80;

/// Where the TDF platform lives. Each [`Client`](crate::Client) owns one of
/// these as its instance defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub protocol: String,
    pub hostname: String,
    pub port: u16,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ConnectionSettings {
    pub fn new(protocol: &str, hostname: &str, port: u16) -> Self {
        Self {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            port,
        }
    }

    /// Reads `TDF_PROTOCOL`, `TDF_HOSTNAME` and `TDF_PORT`, falling back to the
    /// defaults for anything unset or unusable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let protocol = env_string("TDF_PROTOCOL").unwrap_or(defaults.protocol);
        let hostname = env_string("TDF_HOSTNAME").unwrap_or(defaults.hostname);
        let port = match env_string("TDF_PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => {
                    tracing::warn!("Ignoring invalid TDF_PORT value {:?}", raw);
                    defaults.port
                }
            },
            None => defaults.port,
        };
        Self {
            protocol,
            hostname,
            port,
        }
    }

    /// Applies per-call overrides on top of these defaults.
    pub fn resolve(&self, overrides: &ConnectionOverrides) -> ConnectionSettings {
        ConnectionSettings {
            protocol: overrides
                .protocol
                .clone()
                .unwrap_or_else(|| self.protocol.clone()),
            hostname: overrides
                .hostname
                .clone()
                .unwrap_or_else(|| self.hostname.clone()),
            port: overrides.port.unwrap_or(self.port),
        }
    }

    /// Checks that these settings describe a usable `http`/`https` origin.
    pub fn validate(&self, operation: &'static str) -> Result<(), Error> {
        check_connection(
            operation,
            "defaults",
            Some(&self.protocol),
            Some(&self.hostname),
            Some(self.port),
        )
    }

    /// `{protocol}://{hostname}:{port}/`
    pub(crate) fn base_url(&self, operation: &'static str) -> Result<Url, Error> {
        Url::parse(&format!(
            "{}://{}:{}/",
            self.protocol, self.hostname, self.port
        ))
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::validation(operation, "options.hostname", format!("Not a valid host ({})", e))
        })
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Per-call connection overrides. Unset fields fall back to the client's
/// [`ConnectionSettings`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionOverrides {
    pub protocol: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl ConnectionOverrides {
    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = Some(protocol.to_string());
        self
    }

    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = Some(hostname.to_string());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub(crate) fn validate(&self, operation: &'static str) -> Result<(), Error> {
        check_connection(
            operation,
            "options",
            self.protocol.as_deref(),
            self.hostname.as_deref(),
            self.port,
        )
    }
}

// Shared by instance defaults ("defaults.*") and per-call overrides ("options.*").
fn check_connection(
    operation: &'static str,
    prefix: &str,
    protocol: Option<&str>,
    hostname: Option<&str>,
    port: Option<u16>,
) -> Result<(), Error> {
    if let Some(protocol) = protocol {
        if protocol != "http" && protocol != "https" {
            return Err(Error::validation(
                operation,
                format!("{}.protocol", prefix),
                "Must be \"http\" or \"https\"!",
            ));
        }
    }
    if let Some(hostname) = hostname {
        if hostname.trim().is_empty() {
            return Err(Error::validation(
                operation,
                format!("{}.hostname", prefix),
                "Must be a non-empty string!",
            ));
        }
        // A bare host only: no path, query, fragment or userinfo.
        if Host::parse(hostname).is_err() {
            return Err(Error::validation(
                operation,
                format!("{}.hostname", prefix),
                "Must be a valid hostname!",
            ));
        }
    }
    if port == Some(0) {
        return Err(Error::validation(
            operation,
            format!("{}.port", prefix),
            "Must be a non-zero port number!",
        ));
    }
    Ok(())
}
