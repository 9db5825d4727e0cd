use url::Url;

use crate::types::Securities;
use crate::{ConnectionOverrides, Error};

use super::{require_non_empty, Endpoint, Sentinels, AGENT_STATUS, TRADE};

/// Credentials plus connection overrides for the agent operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentOptions {
    pub agent_id: String,
    pub api_key: String,
    pub connection: ConnectionOverrides,
}

impl AgentOptions {
    pub fn new(agent_id: &str, api_key: &str) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            api_key: api_key.to_string(),
            connection: ConnectionOverrides::default(),
        }
    }

    pub fn with_connection(mut self, connection: ConnectionOverrides) -> Self {
        self.connection = connection;
        self
    }

    fn validate(&self, operation: &'static str) -> Result<(), Error> {
        require_non_empty(operation, "options.agentId", &self.agent_id)?;
        require_non_empty(operation, "options.apiKey", &self.api_key)
    }
}

/// `GET /agents/trade/{agentId}?apikey=..&{symbol}={amount}..`
pub struct TradeRequest<'a> {
    securities: &'a Securities,
    options: &'a AgentOptions,
}

impl<'a> TradeRequest<'a> {
    pub fn new(securities: &'a Securities, options: &'a AgentOptions) -> Self {
        Self {
            securities,
            options,
        }
    }

    /// Query pairs in wire order. A repeated symbol keeps its first position
    /// and takes the last amount.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("apikey".to_string(), self.options.api_key.clone())];
        for security in self.securities {
            let amount = security.amount.to_string();
            match pairs.iter_mut().skip(1).find(|(k, _)| *k == security.symbol) {
                Some(existing) => existing.1 = amount,
                None => pairs.push((security.symbol.clone(), amount)),
            }
        }
        pairs
    }
}

impl Endpoint for TradeRequest<'_> {
    fn operation(&self) -> &'static str {
        TRADE
    }

    fn connection(&self) -> &ConnectionOverrides {
        &self.options.connection
    }

    fn validate(&self) -> Result<(), Error> {
        if self.securities.is_empty() {
            return Err(Error::validation(
                TRADE,
                "securities",
                "Must contain at least one security!",
            ));
        }
        self.options.validate(TRADE)?;
        for security in self.securities {
            if security.symbol.is_empty() {
                return Err(Error::validation(
                    TRADE,
                    format!("security.symbol ({})", security),
                    "Must be a non-empty string!",
                ));
            }
            if security.symbol == "apikey" {
                return Err(Error::validation(
                    TRADE,
                    format!("security.symbol ({})", security),
                    "\"apikey\" is reserved!",
                ));
            }
            if !security.amount.is_finite() {
                return Err(Error::validation(
                    TRADE,
                    format!("security.amount ({})", security),
                    "Must be a finite number!",
                ));
            }
        }
        Ok(())
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["agents", "trade", self.options.agent_id.as_str()]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }

    fn sentinels(&self) -> Sentinels<'_> {
        Sentinels::Agent(&self.options.agent_id)
    }
}

/// `GET /agents/{agentId}/composition?apikey=..`
pub struct AgentStatusRequest<'a> {
    options: &'a AgentOptions,
}

impl<'a> AgentStatusRequest<'a> {
    pub fn new(options: &'a AgentOptions) -> Self {
        Self { options }
    }
}

impl Endpoint for AgentStatusRequest<'_> {
    fn operation(&self) -> &'static str {
        AGENT_STATUS
    }

    fn connection(&self) -> &ConnectionOverrides {
        &self.options.connection
    }

    fn validate(&self) -> Result<(), Error> {
        self.options.validate(AGENT_STATUS)
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["agents", self.options.agent_id.as_str(), "composition"]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.options.api_key);
        url
    }

    fn sentinels(&self) -> Sentinels<'_> {
        Sentinels::Agent(&self.options.agent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Security;
    use crate::ConnectionSettings;

    fn base() -> Url {
        ConnectionSettings::default().base_url(TRADE).unwrap()
    }

    #[test]
    fn trade_url_lists_apikey_then_securities() {
        let securities = Securities::from(vec![
            Security::new("GOOG", 24.0),
            Security::new("MSFT", -1.5),
        ]);
        let options = AgentOptions::new("1", "k");
        let url = TradeRequest::new(&securities, &options).build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost/agents/trade/1?apikey=k&GOOG=24&MSFT=-1.5");
    }

    #[test]
    fn repeated_symbol_keeps_last_amount() {
        let securities = Securities::from(vec![
            Security::new("GOOG", 1.0),
            Security::new("AAPL", 2.0),
            Security::new("GOOG", 3.0),
        ]);
        let options = AgentOptions::new("1", "k");
        let pairs = TradeRequest::new(&securities, &options).query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "k".to_string()),
                ("GOOG".to_string(), "3".to_string()),
                ("AAPL".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn trade_validation_rules() {
        let options = AgentOptions::new("1", "k");

        let empty = Securities::default();
        let err = TradeRequest::new(&empty, &options).validate().unwrap_err();
        assert!(err.to_string().contains("securities"));

        let blank: Securities = Security::new("", 1.0).into();
        assert!(TradeRequest::new(&blank, &options).validate().is_err());

        let reserved: Securities = Security::new("apikey", 1.0).into();
        assert!(TradeRequest::new(&reserved, &options).validate().is_err());

        let nan: Securities = Security::new("GOOG", f64::NAN).into();
        let err = TradeRequest::new(&nan, &options).validate().unwrap_err();
        assert!(err.to_string().contains("security.amount"));

        let ok: Securities = Security::new("GOOG", 24.0).into();
        assert!(TradeRequest::new(&ok, &options).validate().is_ok());
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let securities: Securities = Security::new("GOOG", 24.0).into();

        let options = AgentOptions::new("", "k");
        let err = TradeRequest::new(&securities, &options)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "tdfClient.trade(securities, options, cb): options.agentId: Must be a non-empty string!"
        );

        let options = AgentOptions::new("1", "");
        let err = AgentStatusRequest::new(&options).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "tdfClient.agentStatus(options, cb): options.apiKey: Must be a non-empty string!"
        );
    }

    #[test]
    fn agent_status_url() {
        let options = AgentOptions::new("agent 7", "secret");
        let request = AgentStatusRequest::new(&options);
        let url = request.build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost/agents/agent%207/composition?apikey=secret");
        assert_eq!(request.sentinels(), Sentinels::Agent("agent 7"));
    }
}
