mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tdf_api::{Client, ConnectionSettings};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tdf")]
#[command(about = "Trade and query market data on a Tour de Finance server")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Connection flags. Unset flags fall back to TDF_PROTOCOL, TDF_HOSTNAME and
/// TDF_PORT, then to http://localhost:80.
#[derive(Args)]
struct ConnectionArgs {
    /// Protocol: http or https
    #[arg(long, global = true)]
    protocol: Option<String>,

    /// Hostname of the TDF server
    #[arg(long, global = true)]
    hostname: Option<String>,

    /// Port of the TDF server
    #[arg(long, global = true)]
    port: Option<u16>,
}

impl ConnectionArgs {
    fn settings(&self) -> ConnectionSettings {
        let mut settings = ConnectionSettings::from_env();
        if let Some(protocol) = &self.protocol {
            settings.protocol = protocol.clone();
        }
        if let Some(hostname) = &self.hostname {
            settings.hostname = hostname.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        settings
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Buy or sell securities for an agent
    Trade(commands::trade::TradeArgs),
    /// Show an agent's current composition
    AgentStatus(commands::agent_status::AgentStatusArgs),
    /// Show the price history of one symbol, or of all symbols
    History(commands::history::HistoryArgs),
    /// Show the current status of all securities
    CurrentStatus(commands::current_status::CurrentStatusArgs),
    /// Show all price histories
    AllHistories(commands::history::AllHistoriesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tdf=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };

    let settings = cli.connection.settings();
    tracing::debug!(
        "Using {}://{}:{}",
        settings.protocol,
        settings.hostname,
        settings.port
    );
    let client = Client::with_settings(settings)?;

    match &cli.command {
        Commands::Trade(args) => commands::trade::run(args, &client, &format).await?,
        Commands::AgentStatus(args) => commands::agent_status::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
        Commands::CurrentStatus(args) => {
            commands::current_status::run(args, &client, &format).await?
        }
        Commands::AllHistories(args) => {
            commands::history::run_all(args, &client, &format).await?
        }
    }

    Ok(())
}
