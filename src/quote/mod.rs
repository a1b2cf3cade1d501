//! Real-time quotes from `/v{version}/finance/quote`, one flattened record per symbol.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::records::{self, SecurityRecord};
use crate::core::request::{ApiRequest, Endpoint, QueryParams, clean_symbol, join_symbols, validate_symbols};
use crate::core::{YfClient, YfError, net};

/// Default `lang` query parameter.
pub const DEFAULT_LANG: &str = "EN";
/// Default `region` query parameter.
pub const DEFAULT_REGION: &str = "us";

/* ---------------- Public API ---------------- */

/// Fetch real-time quotes for up to ten symbols, keyed by each record's `symbol` field.
///
/// # Errors
///
/// See [`QuoteBuilder::fetch`].
pub async fn quotes<I, S>(
    client: &YfClient,
    symbols: I,
) -> Result<HashMap<String, SecurityRecord>, YfError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    QuoteBuilder::new(client).symbols(symbols).fetch().await
}

/// Builder for `/v{version}/finance/quote` lookups.
#[derive(Debug, Clone)]
pub struct QuoteBuilder<'a> {
    client: &'a YfClient,
    symbols: Vec<String>,
    version: u32,
    lang: String,
    region: String,
}

impl<'a> QuoteBuilder<'a> {
    pub fn new(client: &'a YfClient) -> Self {
        Self {
            client,
            symbols: Vec::new(),
            version: Endpoint::QUOTE.default_version(),
            lang: DEFAULT_LANG.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Set the symbols to query (replaces any set earlier).
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(clean_symbol).collect();
        self
    }

    /// Add a single symbol.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(clean_symbol(sym));
        self
    }

    /// API version (default 6).
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Response language (default `EN`).
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Market region (default `us`).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    fn query(&self) -> QueryParams {
        let mut qp = QueryParams::new();
        qp.set("region", self.region.as_str())
            .set("lang", self.lang.as_str())
            .set("symbols", join_symbols(&self.symbols));
        qp
    }

    /// Validate the arguments and assemble the request without sending it.
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidArgument`] for an empty, blank or over-long symbol list.
    pub fn request(&self) -> Result<ApiRequest, YfError> {
        validate_symbols(&self.symbols)?;
        self.client
            .build_request(Endpoint::QUOTE.segments(), self.version, &self.query())
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

    /// Execute the request and map each quote in `quoteResponse.result` to a
    /// [`SecurityRecord`], keyed by its `symbol` field.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus:
    /// - [`YfError::Status`] on a non-2xx response.
    /// - [`YfError::Data`] if the body is not JSON or `quoteResponse.result` is missing or empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbols = ?self.symbols)))]
    pub async fn fetch(&self) -> Result<HashMap<String, SecurityRecord>, YfError> {
        let resp = self.fetch_raw().await?;
        let body = net::success_text(resp).await?;
        let env: QuoteEnvelope = records::parse_body(&body, "quote")?;
        let result = env
            .quote_response
            .and_then(|qr| qr.result)
            .ok_or_else(|| YfError::Data("missing `quoteResponse.result`".into()))?;
        records::keyed_records(&result, "symbol", "quoteResponse.result")
    }
}

/* ---------------- Minimal serde for the quote envelope ---------------- */

#[derive(Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<QuoteResponseNode>,
}

#[derive(Deserialize)]
struct QuoteResponseNode {
    result: Option<Vec<Map<String, Value>>>,
    #[allow(dead_code)]
    error: Option<Value>,
}
