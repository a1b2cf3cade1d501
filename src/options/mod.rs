//! Option chains from `/v{version}/finance/options/{symbol}`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::records::{self, SecurityRecord};
use crate::core::request::{ApiRequest, Endpoint, QueryParams};
use crate::core::{YfClient, YfError, net};

/* ---------------- Public: option chain ---------------- */

/// Fetch the option chain for `symbol`, optionally for one expiry `date`.
///
/// # Errors
///
/// See [`OptionsBuilder::fetch`].
pub async fn option_chain(
    client: &YfClient,
    symbol: &str,
    date: Option<&str>,
) -> Result<HashMap<String, SecurityRecord>, YfError> {
    let mut b = OptionsBuilder::new(client, symbol);
    if let Some(d) = date {
        b = b.date(d);
    }
    b.fetch().await
}

/// Builder for `/v{version}/finance/options/{symbol}` lookups.
#[derive(Debug, Clone)]
pub struct OptionsBuilder<'a> {
    client: &'a YfClient,
    symbol: String,
    date: Option<String>,
    version: u32,
}

impl<'a> OptionsBuilder<'a> {
    pub fn new(client: &'a YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            date: None,
            version: Endpoint::OPTIONS.default_version(),
        }
    }

    /// Expiry to request, passed through as the `date` query parameter.
    /// A blank value is the same as not setting one.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Expiry to request as a timestamp; sent as unix seconds.
    #[must_use]
    pub fn date_at(mut self, at: DateTime<Utc>) -> Self {
        self.date = Some(at.timestamp().to_string());
        self
    }

    /// API version (default 7).
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Validate the arguments and assemble the request without sending it.
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidArgument`] if the symbol is empty or whitespace.
    pub fn request(&self) -> Result<ApiRequest, YfError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(YfError::InvalidArgument(
                "symbol cannot be empty or whitespace".into(),
            ));
        }

        let mut qp = QueryParams::new();
        qp.set_non_empty("date", self.date.as_deref());

        let mut path: Vec<&str> = Endpoint::OPTIONS.segments().to_vec();
        path.push(symbol);
        self.client.build_request(&path, self.version, &qp)
    }

    /// Send the request and return the response untouched: no status check, no parsing.
    ///
    /// # Errors
    ///
    /// - [`YfError::InvalidArgument`] if the symbol is empty or whitespace.
    /// - [`YfError::Http`] if the transport fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_raw(&self) -> Result<reqwest::Response, YfError> {
        let req = self.request()?;
        net::send(self.client, req).await
    }

    /// Execute the request and map each entry of `optionChain.result` to a
    /// [`SecurityRecord`], keyed by its `underlyingSymbol`.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus:
    /// - [`YfError::Status`] on a non-2xx response.
    /// - [`YfError::Data`] if the body is not JSON or `optionChain.result` is missing or empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(&self) -> Result<HashMap<String, SecurityRecord>, YfError> {
        let resp = self.fetch_raw().await?;
        let body = net::success_text(resp).await?;
        let env: OptEnvelope = records::parse_body(&body, "options")?;
        let result = env
            .option_chain
            .and_then(|oc| oc.result)
            .ok_or_else(|| YfError::Data("missing `optionChain.result`".into()))?;
        records::keyed_records(&result, "underlyingSymbol", "optionChain.result")
    }
}

/* ---------------- Minimal serde for the options envelope ---------------- */

#[derive(Deserialize)]
struct OptEnvelope {
    #[serde(rename = "optionChain")]
    option_chain: Option<OptChainNode>,
}

#[derive(Deserialize)]
struct OptChainNode {
    result: Option<Vec<Map<String, Value>>>,
    #[allow(dead_code)]
    error: Option<Value>,
}
