//! The `history` and `all-histories` subcommands.

use anyhow::Result;
use clap::Args;
use tdf_api::types::Select;
use tdf_api::{AllHistoriesOptions, Client, ConnectionOverrides, DEFAULT_HISTORY_COUNT};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct HistoryArgs {
    /// Symbol to fetch; omit for every symbol
    pub symbol: Option<String>,
}

#[derive(Args)]
pub struct AllHistoriesArgs {
    /// Restrict the histories to one symbol
    #[arg(long)]
    pub symbol: Option<String>,

    /// Price series: all, bid, ask, last
    #[arg(long, default_value = "all", value_parser = parse_select)]
    pub select: Select,

    /// Number of points per history
    #[arg(long, default_value_t = DEFAULT_HISTORY_COUNT)]
    pub n: u32,
}

fn parse_select(s: &str) -> Result<Select, String> {
    s.parse::<Select>().map_err(|e| e.to_string())
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let result = client
        .history(args.symbol.as_deref(), &ConnectionOverrides::default())
        .await?;
    print_json(&result, format);
    Ok(())
}

pub async fn run_all(args: &AllHistoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut options = AllHistoriesOptions::default()
        .with_select(args.select)
        .with_n(args.n);
    if let Some(symbol) = &args.symbol {
        options = options.with_symbol(symbol);
    }
    let result = client.all_histories(&options).await?;
    print_json(&result, format);
    Ok(())
}
