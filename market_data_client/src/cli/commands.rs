use std::path::PathBuf;

use clap::Parser;

/// Query one Alpha Vantage analytic function and print the result.
#[derive(Parser, Debug)]
#[command(name = "av-query", author, version, about)]
pub struct Cli {
    /// Path to a TOML config file (api_key, base_url, max_attempts, timeout_secs).
    /// Without it the key is read from ALPHAVANTAGE_API_KEY.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Operation name (e.g. "sma", "ts_daily", "aroon_osc") or function code (e.g. "AROONOSC").
    pub operation: String,

    /// Equity symbol; case does not matter.
    #[arg(short, long)]
    pub symbol: String,

    /// Response format: csv or json
    #[arg(short, long, default_value = "csv")]
    pub datatype: String,

    /// Extra operation argument as name=value (repeatable), e.g. --arg interval=weekly
    #[arg(short, long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Print the request URL with the key redacted and exit without sending it.
    #[arg(long)]
    pub dry_run: bool,
}
