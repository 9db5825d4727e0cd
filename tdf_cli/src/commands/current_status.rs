use anyhow::Result;
use clap::Args;
use tdf_api::{Client, CurrentStatusOptions};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct CurrentStatusArgs {
    /// Restrict the status to one symbol
    #[arg(long)]
    pub symbol: Option<String>,
}

pub async fn run(args: &CurrentStatusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut options = CurrentStatusOptions::default();
    if let Some(symbol) = &args.symbol {
        options = options.with_symbol(symbol);
    }
    let result = client.current_status(&options).await?;
    print_json(&result, format);
    Ok(())
}
