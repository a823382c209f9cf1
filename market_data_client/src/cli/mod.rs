//! Command-line front end (`av-query`), enabled by the `cli` feature.

pub mod commands;
pub mod params;

use std::io::{self, Write};

use anyhow::Context;
use secrecy::SecretString;

use crate::{
    client::{Client, ClientConfig},
    operations::Operation,
    request,
    response::Response,
};

pub use commands::Cli;

/// Resolves configuration, runs the query, and writes the result to stdout.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    run_with(cli, &mut io::stdout()).await
}

/// Same as [`run`], writing to `out`.
///
/// A dry run needs no credential: it prints the request URL with the key
/// replaced by `REDACTED`.
pub async fn run_with<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let operation: Operation = cli.operation.parse()?;
    let args = params::args_from_cli(&cli)?;

    if cli.dry_run {
        let base_url = ClientConfig::resolve_base_url(cli.config.as_deref())?;
        let redacted = SecretString::new("REDACTED".into());
        let params = request::build(operation, &args, &redacted)?;
        writeln!(out, "{}", params.to_url(&base_url)?)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => ClientConfig::from_toml_path(path)?,
        None => ClientConfig::from_env()?,
    };
    let client = Client::from_config(config)?;
    let response = client
        .query(operation, &args)
        .await
        .with_context(|| format!("{operation} query failed"))?;

    match response {
        Response::Table(table) => table.write_csv(&mut *out)?,
        Response::Structured(value) => {
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
