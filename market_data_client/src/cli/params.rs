use thiserror::Error;

use crate::request::Args;

use super::commands::Cli;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected NAME=VALUE, got `{0}`")]
pub struct MalformedArg(pub String);

/// Splits `name=value` on the first `=`.
pub fn parse_arg(raw: &str) -> Result<(String, String), MalformedArg> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(MalformedArg(raw.to_string())),
    }
}

/// Collects the command-line arguments into an [`Args`] set.
///
/// `--symbol` and `--datatype` are applied last, so they win over a
/// conflicting `--arg`.
pub fn args_from_cli(cli: &Cli) -> Result<Args, MalformedArg> {
    let mut args = Args::new();
    for raw in &cli.args {
        let (name, value) = parse_arg(raw)?;
        args.set(name, value);
    }
    args.set("symbol", &cli.symbol);
    args.set("datatype", &cli.datatype);
    Ok(args)
}
