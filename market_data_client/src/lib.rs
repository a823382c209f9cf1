//! Async client for the Alpha Vantage query endpoint.
//!
//! Every analytic function (daily time series, moving averages, oscillators,
//! trend indicators) is described by a static [`operations::OperationDescriptor`].
//! A call validates the caller's arguments against that descriptor, sends a
//! single GET with the API key as a query parameter, and decodes the body as
//! either a [`response::TimeSeriesTable`] (CSV) or a JSON value.
//!
//! ```no_run
//! use market_data_client::{Client, models::{DataFormat, Interval, SeriesType}};
//!
//! # async fn run() -> Result<(), market_data_client::ClientError> {
//! let client = Client::new("demo");
//! let response = client
//!     .sma("ibm", Interval::Weekly, 10, SeriesType::Open, DataFormat::Csv)
//!     .await?;
//! if let Some(table) = response.as_table() {
//!     println!("{} rows, first at {:?}", table.len(), table.times().next());
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod errors;
#[cfg(feature = "polars")]
pub mod io;
pub mod models;
pub mod operations;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Client, ClientConfig, ConfigError};
pub use errors::ClientError;
pub use operations::Operation;
pub use request::Args;
pub use response::{Response, TimeSeriesTable};
