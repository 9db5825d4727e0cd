//! CLI subcommand implementations.

pub mod agent_status;
pub mod current_status;
pub mod history;
pub mod trade;

/// Reads a credential flag, falling back to an environment variable.
pub(crate) fn flag_or_env(flag: &Option<String>, var: &str) -> anyhow::Result<String> {
    match flag {
        Some(value) => Ok(value.clone()),
        None => std::env::var(var)
            .map_err(|_| anyhow::anyhow!("missing --{} (or {} in the environment)", flag_name(var), var)),
    }
}

fn flag_name(var: &str) -> String {
    var.trim_start_matches("TDF_").to_lowercase().replace('_', "-")
}
