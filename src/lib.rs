//! yfapi-rs: thin async client for the yfapi.net finance API.
//!
//! Three endpoints are wrapped, each with a typed lookup and a raw variant:
//!
//! - quotes: `/v6/finance/quote`, see [`QuoteBuilder`]
//! - option chains: `/v7/finance/options/{symbol}`, see [`OptionsBuilder`]
//! - spark series: `/v8/finance/spark`, see [`SparkBuilder`]
//!
//! Typed lookups return maps keyed by symbol. Quote and option records have
//! every field rendered as a string; spark records keep their JSON values.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), yfapi_rs::YfError> {
//! let client = yfapi_rs::YfClient::new("my-api-key")?;
//! let spark = client.spark(["AAPL"]).interval("1d").range("1mo").fetch().await?;
//! println!("{}", spark["AAPL"]["close"]);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod options;
pub mod quote;
pub mod spark;

pub use crate::core::client::constants::{API_KEY_HEADER, MAX_SYMBOLS};
pub use crate::core::request::join_symbols;
pub use crate::core::{
    ApiRequest, Endpoint, QueryParams, SecurityRecord, SparkRecord, YfClient, YfClientBuilder,
    YfError,
};
pub use options::{OptionsBuilder, option_chain};
pub use quote::{QuoteBuilder, quotes};
pub use spark::{SparkBuilder, spark};
