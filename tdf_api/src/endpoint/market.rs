use url::Url;

use crate::types::Select;
use crate::{ConnectionOverrides, Error};

use super::{
    optional_non_empty, Endpoint, Sentinels, ALL_HISTORIES, CURRENT_STATUS, HISTORY,
};

/// Number of history points `allHistories` asks for when `n` is not set.
pub const DEFAULT_HISTORY_COUNT: u32 = 12;

/// `GET /history/{symbol}` or `GET /history`
pub struct HistoryRequest<'a> {
    symbol: Option<&'a str>,
    connection: &'a ConnectionOverrides,
}

impl<'a> HistoryRequest<'a> {
    pub fn new(symbol: Option<&'a str>, connection: &'a ConnectionOverrides) -> Self {
        Self { symbol, connection }
    }
}

impl Endpoint for HistoryRequest<'_> {
    fn operation(&self) -> &'static str {
        HISTORY
    }

    fn connection(&self) -> &ConnectionOverrides {
        self.connection
    }

    fn validate(&self) -> Result<(), Error> {
        optional_non_empty(HISTORY, "options.symbol", self.symbol)
    }

    fn path_segments(&self) -> Vec<&str> {
        match self.symbol {
            Some(symbol) => vec!["history", symbol],
            None => vec!["history"],
        }
    }

    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }

    fn sentinels(&self) -> Sentinels<'_> {
        Sentinels::Market
    }
}

/// `GET /currentstatus[?symbol=..]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentStatusOptions {
    pub symbol: Option<String>,
    pub connection: ConnectionOverrides,
}

impl CurrentStatusOptions {
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_connection(mut self, connection: ConnectionOverrides) -> Self {
        self.connection = connection;
        self
    }
}

impl Endpoint for CurrentStatusOptions {
    fn operation(&self) -> &'static str {
        CURRENT_STATUS
    }

    fn connection(&self) -> &ConnectionOverrides {
        &self.connection
    }

    fn validate(&self) -> Result<(), Error> {
        optional_non_empty(CURRENT_STATUS, "options.symbol", self.symbol.as_deref())
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["currentstatus"]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(symbol) = &self.symbol {
            url.query_pairs_mut().append_pair("symbol", symbol);
        }
        url
    }

    fn sentinels(&self) -> Sentinels<'_> {
        Sentinels::Market
    }
}

/// `GET /allhistories?select=..&n=..[&symbol=..]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllHistoriesOptions {
    pub symbol: Option<String>,
    /// Defaults to [`Select::All`].
    pub select: Option<Select>,
    /// Defaults to [`DEFAULT_HISTORY_COUNT`].
    pub n: Option<u32>,
    pub connection: ConnectionOverrides,
}

impl AllHistoriesOptions {
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_select(mut self, select: Select) -> Self {
        self.select = Some(select);
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_connection(mut self, connection: ConnectionOverrides) -> Self {
        self.connection = connection;
        self
    }
}

impl Endpoint for AllHistoriesOptions {
    fn operation(&self) -> &'static str {
        ALL_HISTORIES
    }

    fn connection(&self) -> &ConnectionOverrides {
        &self.connection
    }

    fn validate(&self) -> Result<(), Error> {
        optional_non_empty(ALL_HISTORIES, "options.symbol", self.symbol.as_deref())?;
        if self.n == Some(0) {
            return Err(Error::validation(
                ALL_HISTORIES,
                "options.n",
                "Must be a positive number!",
            ));
        }
        Ok(())
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["allhistories"]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("select", self.select.unwrap_or_default().as_str())
            .append_pair(
                "n",
                &self.n.unwrap_or(DEFAULT_HISTORY_COUNT).to_string(),
            );
        if let Some(symbol) = &self.symbol {
            url.query_pairs_mut().append_pair("symbol", symbol);
        }
        url
    }

    fn sentinels(&self) -> Sentinels<'_> {
        Sentinels::Market
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectionSettings;

    fn base() -> Url {
        ConnectionSettings::new("http", "localhost", 3000)
            .base_url(HISTORY)
            .unwrap()
    }

    #[test]
    fn history_with_and_without_symbol() {
        let connection = ConnectionOverrides::default();
        let url = HistoryRequest::new(Some("GOOG"), &connection).build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/history/GOOG");

        let url = HistoryRequest::new(None, &connection).build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/history");
    }

    #[test]
    fn history_rejects_empty_symbol() {
        let connection = ConnectionOverrides::default();
        let err = HistoryRequest::new(Some(""), &connection)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "tdfClient.history(options, cb): options.symbol: Must be a non-empty string!"
        );
    }

    #[test]
    fn current_status_forwards_symbol() {
        let url = CurrentStatusOptions::default().build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/currentstatus");

        let url = CurrentStatusOptions::default()
            .with_symbol("AAPL")
            .build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/currentstatus?symbol=AAPL");
    }

    #[test]
    fn all_histories_defaults() {
        let url = AllHistoriesOptions::default().build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/allhistories?select=all&n=12");
    }

    #[test]
    fn all_histories_with_everything() {
        let url = AllHistoriesOptions::default()
            .with_select(Select::Bid)
            .with_n(30)
            .with_symbol("GOOG")
            .build_url(&base());
        insta::assert_snapshot!(url.as_str(), @"http://localhost:3000/allhistories?select=bid&n=30&symbol=GOOG");
    }

    #[test]
    fn all_histories_rejects_zero_count() {
        let err = AllHistoriesOptions::default().with_n(0).validate().unwrap_err();
        assert!(err.to_string().contains("options.n"));
        assert!(AllHistoriesOptions::default().with_n(1).validate().is_ok());
    }

    #[test]
    fn market_operations_report_sentinels_without_agent() {
        let connection = ConnectionOverrides::default();
        assert_eq!(HistoryRequest::new(None, &connection).sentinels(), Sentinels::Market);
        assert_eq!(CurrentStatusOptions::default().sentinels(), Sentinels::Market);
        assert_eq!(AllHistoriesOptions::default().sentinels(), Sentinels::Market);
    }
}
