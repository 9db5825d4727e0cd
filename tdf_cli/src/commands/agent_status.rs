use anyhow::Result;
use clap::Args;
use tdf_api::{AgentOptions, Client};

use super::flag_or_env;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct AgentStatusArgs {
    /// Agent to inspect (falls back to TDF_AGENT_ID)
    #[arg(long)]
    pub agent_id: Option<String>,

    /// API key owning the agent (falls back to TDF_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

pub async fn run(args: &AgentStatusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = AgentOptions::new(
        &flag_or_env(&args.agent_id, "TDF_AGENT_ID")?,
        &flag_or_env(&args.api_key, "TDF_API_KEY")?,
    );
    let result = client.agent_status(&options).await?;
    print_json(&result, format);
    Ok(())
}
