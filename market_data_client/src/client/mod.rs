//! The per-operation facade.
//!
//! Every call goes through [`Client::query`]: build the parameters, perform
//! exactly one GET through the transport, decode the body in the declared
//! format. The typed methods in `endpoints` are thin wrappers that fill an
//! [`Args`] and delegate here.

mod config;
mod endpoints;

pub use config::{
    API_KEY_ENV, BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS,
};

use config::ClientBuildSnafu;
use secrecy::SecretString;
use snafu::ResultExt;
use tracing::debug;

use crate::{
    errors::{ClientError, DecodeSnafu, TransportSnafu},
    operations::Operation,
    request::{self, Args, RequestParams},
    response::{self, Response},
    transport::{ReqwestTransport, Transport},
};

/// Client for the query endpoint.
///
/// Holds no per-call state, so a single instance can serve concurrent calls
/// whenever its transport can; [`ReqwestTransport`] can.
#[derive(Debug)]
pub struct Client<T = ReqwestTransport> {
    transport: T,
    api_key: SecretString,
    base_url: String,
    max_attempts: u32,
}

impl Client<ReqwestTransport> {
    /// Client with the default endpoint and a default `reqwest` transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(ClientConfig::new(api_key), ReqwestTransport::default())
    }

    /// Client with a `reqwest` transport built from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = match config.timeout {
            Some(timeout) => {
                ReqwestTransport::with_timeout(timeout).context(ClientBuildSnafu)?
            }
            None => ReqwestTransport::default(),
        };
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Client over a caller-supplied transport. `config.timeout` is ignored
    /// here; timeouts belong to the transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            api_key: config.api_key,
            base_url: config.base_url,
            max_attempts: config.max_attempts,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured attempt budget. Stored for compatibility only: every
    /// call makes exactly one request.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the parameters `query` would send, without sending them.
    pub fn build_params(&self, operation: Operation, args: &Args) -> Result<RequestParams, ClientError> {
        request::build(operation, args, &self.api_key)
    }

    /// Runs one call of `operation`.
    ///
    /// # Errors
    ///
    /// * [`ClientError::InvalidArgument`] - raised before the transport is used.
    /// * [`ClientError::Transport`] - connection failure or non-2xx status.
    /// * [`ClientError::Decode`] - body does not parse as the declared format.
    pub async fn query(&self, operation: Operation, args: &Args) -> Result<Response, ClientError> {
        let params = self.build_params(operation, args)?;
        debug!(
            operation = %operation,
            function = params.function(),
            symbol = params.symbol(),
            format = %params.format(),
            "sending request"
        );

        let body = self
            .transport
            .get(&self.base_url, &params)
            .await
            .context(TransportSnafu)?;
        debug!(bytes = body.len(), "received response body");

        response::normalize(&body, params.format()).context(DecodeSnafu)
    }
}
