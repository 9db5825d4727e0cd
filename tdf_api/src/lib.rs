pub mod callback;
mod client;
mod endpoint;
mod errors;
mod response;
mod settings;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::endpoint::{
    AgentOptions, AgentStatusRequest, AllHistoriesOptions, CurrentStatusOptions, Endpoint,
    HistoryRequest, Sentinels, TradeRequest, DEFAULT_HISTORY_COUNT,
};
pub use self::errors::{Error, TransportError};
pub use self::response::{
    interpret, RawResponse, AGENT_LOAD_FAILED_SENTINEL, NOT_AUTHORIZED_SENTINEL,
};
pub use self::settings::{
    ConnectionOverrides, ConnectionSettings, DEFAULT_HOSTNAME, DEFAULT_PORT, DEFAULT_PROTOCOL,
};
pub use self::transport::{HttpTransport, Transport, REQUEST_TIMEOUT};
