//! Error taxonomy surfaced by every client call.
//!
//! A call fails with exactly one [`ClientError`]. Nothing is retried or
//! masked on the way up: argument problems are raised before the transport is
//! touched, transport failures as soon as the request fails, and decode
//! failures after the whole body has been read.

use snafu::{Backtrace, Snafu};

use crate::{response::DecodeError, transport::TransportError};

/// The unified error type for the `market_data_client` crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientError {
    /// A caller-supplied argument is missing, unknown to the operation, or
    /// outside its documented enumeration.
    #[snafu(display("Invalid argument `{name}` = `{value}`: {reason}"))]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// The HTTP request failed or returned a non-success status.
    #[snafu(display("Transport error: {source}"))]
    Transport {
        source: TransportError,
        backtrace: Backtrace,
    },

    /// The response body could not be decoded in the declared format.
    #[snafu(display("Failed to decode response: {source}"))]
    Decode {
        source: DecodeError,
        backtrace: Backtrace,
    },
}

impl ClientError {
    /// True when the failure happened before any network activity.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClientError::InvalidArgument { .. })
    }
}
