//! Enumerated request parameters accepted by the query endpoint.
//!
//! Each type carries its wire spelling and the full set of allowed strings
//! (`ALLOWED`), which the request builder uses to validate the untyped
//! arguments of [`Client::query`](crate::client::Client::query).

pub mod data_format;
pub mod interval;
pub mod output_size;
pub mod series_type;

pub use data_format::DataFormat;
pub use interval::Interval;
pub use output_size::OutputSize;
pub use series_type::SeriesType;

use thiserror::Error;

/// A string did not match any wire spelling of an enumerated parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not one of {allowed:?}")]
pub struct UnknownVariant {
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl UnknownVariant {
    pub(crate) fn new(value: &str, allowed: &'static [&'static str]) -> Self {
        Self {
            value: value.to_string(),
            allowed,
        }
    }
}
