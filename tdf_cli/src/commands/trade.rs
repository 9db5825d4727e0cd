//! The `trade` subcommand: buys or sells securities for one agent.

use anyhow::Result;
use clap::Args;
use tdf_api::types::{Securities, Security};
use tdf_api::{AgentOptions, Client};

use super::flag_or_env;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct TradeArgs {
    /// Agent to trade for (falls back to TDF_AGENT_ID)
    #[arg(long)]
    pub agent_id: Option<String>,

    /// API key owning the agent (falls back to TDF_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Orders as SYMBOL=AMOUNT; negative amounts sell (e.g. GOOG=10 AAPL=-5)
    #[arg(required = true)]
    pub orders: Vec<Security>,
}

pub async fn run(args: &TradeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = AgentOptions::new(
        &flag_or_env(&args.agent_id, "TDF_AGENT_ID")?,
        &flag_or_env(&args.api_key, "TDF_API_KEY")?,
    );
    let securities: Securities = args.orders.iter().cloned().collect();

    tracing::info!(
        "Trading {} securities for agent {}",
        securities.len(),
        options.agent_id
    );
    let result = client.trade(securities, &options).await?;
    print_json(&result, format);
    Ok(())
}
