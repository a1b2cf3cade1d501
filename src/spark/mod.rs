//! Compact price series from `/v{version}/finance/spark`.
//!
//! Unlike quotes and options, spark values are not flattened to strings: each
//! symbol's object comes back as a [`SparkRecord`] with numbers and arrays intact.

use std::collections::HashMap;

use crate::core::records::{self, SparkRecord};
use crate::core::request::{ApiRequest, Endpoint, QueryParams, clean_symbol, join_symbols, validate_symbols};
use crate::core::{YfClient, YfError, net};

/// Fetch spark series for up to ten symbols, keyed by uppercased symbol.
///
/// `interval` and `range` are the upstream strings (`"1d"`, `"1mo"`, ...) and are
/// only sent when non-empty.
///
/// # Errors
///
/// See [`SparkBuilder::fetch`].
pub async fn spark<I, S>(
    client: &YfClient,
    symbols: I,
    interval: &str,
    range: &str,
) -> Result<HashMap<String, SparkRecord>, YfError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SparkBuilder::new(client)
        .symbols(symbols)
        .interval(interval)
        .range(range)
        .fetch()
        .await
}

/// Builder for spark lookups.
#[derive(Debug, Clone)]
pub struct SparkBuilder<'a> {
    client: &'a YfClient,
    symbols: Vec<String>,
    interval: Option<String>,
    range: Option<String>,
    version: u32,
}

impl<'a> SparkBuilder<'a> {
    pub fn new(client: &'a YfClient) -> Self {
        Self {
            client,
            symbols: Vec::new(),
            interval: None,
            range: None,
            version: Endpoint::SPARK.default_version(),
        }
    }

    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(clean_symbol).collect();
        self
    }

    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(clean_symbol(sym));
        self
    }

    /// Bar interval, e.g. `1d`.
    #[must_use]
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Lookback range, e.g. `1mo`.
    #[must_use]
    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// API version (default 8).
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Validate the arguments and assemble the request without sending it.
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidArgument`] for an empty, blank or over-long symbol list.
    pub fn request(&self) -> Result<ApiRequest, YfError> {
        validate_symbols(&self.symbols)?;

        let mut qp = QueryParams::new();
        qp.set("symbols", join_symbols(&self.symbols))
            .set_non_empty("interval", self.interval.as_deref())
            .set_non_empty("range", self.range.as_deref());

        self.client
            .build_request(Endpoint::SPARK.segments(), self.version, &qp)
    }

    /// Send the request and return the response untouched: no status check, no parsing.
    ///
    /// # Errors
    ///
    /// - [`YfError::InvalidArgument`] for an empty, blank or over-long symbol list.
    /// - [`YfError::Http`] if the transport fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbols = ?self.symbols)))]
    pub async fn fetch_raw(&self) -> Result<reqwest::Response, YfError> {
        let req = self.request()?;
        net::send(self.client, req).await
    }

    /// Execute the request and return one [`SparkRecord`] per requested symbol.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus:
    /// - [`YfError::Status`] on a non-2xx response.
    /// - [`YfError::Data`] if the body is not a non-empty JSON object.
    /// - [`YfError::MissingSymbol`] if any requested symbol is absent. No partial result is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbols = ?self.symbols)))]
    pub async fn fetch(&self) -> Result<HashMap<String, SparkRecord>, YfError> {
        let resp = self.fetch_raw().await?;
        let body = net::success_text(resp).await?;
        records::spark_records(&body, &self.symbols)
    }
}
