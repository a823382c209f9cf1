//! Request builder: turns an operation and caller arguments into validated,
//! ordered query parameters.
//!
//! [`build`] is pure. It checks every argument against the operation's
//! descriptor, fills in defaults, uppercases the symbol, and appends the
//! credential last. Enumerated arguments must match their allowed set exactly
//! (case-sensitive). Period arguments are forwarded as given.

mod args;
mod params;

pub use args::Args;
pub use params::{APIKEY, RequestParams};

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};
use snafu::ensure;

use crate::{
    errors::{ClientError, InvalidArgumentSnafu},
    models::DataFormat,
    operations::{ADJUSTED_SUFFIX, Operation, ParamKind, ParamSpec, SYMBOL},
};

/// Builds the query parameters for one call of `operation`.
///
/// # Errors
///
/// [`ClientError::InvalidArgument`] when `symbol` is missing or blank, an
/// argument is not accepted by the operation, an enumerated argument is
/// outside its set, or the `adjusted` flag is not a boolean.
pub fn build(
    operation: Operation,
    args: &Args,
    api_key: &SecretString,
) -> Result<RequestParams, ClientError> {
    let descriptor = operation.descriptor();

    if let Some(name) = args.names().find(|name| !descriptor.accepts(name)) {
        return InvalidArgumentSnafu {
            name,
            value: args.get(name).unwrap_or_default(),
            reason: format!("not accepted by {}", descriptor.function),
        }
        .fail();
    }

    let symbol = args.get(SYMBOL).unwrap_or_default();
    ensure!(
        !symbol.trim().is_empty(),
        InvalidArgumentSnafu {
            name: SYMBOL,
            value: symbol,
            reason: "a symbol is required",
        }
    );

    let mut function = descriptor.function.to_string();
    let mut operation_params: Vec<(&'static str, String)> = Vec::with_capacity(descriptor.params.len() + 1);
    let mut format = DataFormat::default();

    for spec in descriptor.all_params() {
        let value = args.get(spec.name).unwrap_or(spec.default);
        match spec.kind {
            ParamKind::AdjustedFlag => {
                if parse_flag(spec, value)? {
                    function.push_str(ADJUSTED_SUFFIX);
                }
                continue;
            }
            ParamKind::DataFormat => {
                format = value.parse().map_err(|err| {
                    InvalidArgumentSnafu {
                        name: spec.name,
                        value,
                        reason: format!("{err}"),
                    }
                    .build()
                })?;
            }
            ParamKind::Period => {}
            kind => validate_member(spec, kind, value)?,
        }
        operation_params.push((spec.name, value.to_string()));
    }

    let mut entries = IndexMap::with_capacity(operation_params.len() + 2);
    entries.insert("function", function);
    entries.insert(SYMBOL, symbol.to_uppercase());
    entries.extend(operation_params);

    Ok(RequestParams::new(
        entries,
        format,
        SecretString::new(api_key.expose_secret().into()),
    ))
}

fn validate_member(spec: &ParamSpec, kind: ParamKind, value: &str) -> Result<(), ClientError> {
    let allowed = kind.allowed().unwrap_or_default();
    ensure!(
        allowed.contains(&value),
        InvalidArgumentSnafu {
            name: spec.name,
            value,
            reason: format!("must be one of {allowed:?}"),
        }
    );
    Ok(())
}

fn parse_flag(spec: &ParamSpec, value: &str) -> Result<bool, ClientError> {
    value.parse().map_err(|_| {
        InvalidArgumentSnafu {
            name: spec.name,
            value,
            reason: "must be `true` or `false`",
        }
        .build()
    })
}
