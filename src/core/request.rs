//! Pure request assembly: versioned URL, query string and auth headers.
//!
//! Nothing in here touches the network. The fetch paths build an [`ApiRequest`]
//! first and hand it to the transport afterwards, so what goes on the wire can
//! be inspected (and tested) on its own.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::core::YfError;
use crate::core::client::constants::{API_KEY_HEADER, APPLICATION_JSON, MAX_SYMBOLS};

/// A versioned upstream endpoint: its path below `/v{version}` and the version used by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    segments: &'static [&'static str],
    default_version: u32,
}

impl Endpoint {
    /// `/v6/finance/quote`
    pub const QUOTE: Self = Self {
        segments: &["finance", "quote"],
        default_version: 6,
    };
    /// `/v7/finance/options/{symbol}`
    pub const OPTIONS: Self = Self {
        segments: &["finance", "options"],
        default_version: 7,
    };
    /// `/v8/finance/spark`
    pub const SPARK: Self = Self {
        segments: &["finance", "spark"],
        default_version: 8,
    };

    /// The API version used when the caller does not pick one.
    pub const fn default_version(&self) -> u32 {
        self.default_version
    }

    /// Fixed path segments below the version prefix.
    pub const fn segments(&self) -> &'static [&'static str] {
        self.segments
    }

    /// The endpoint path as written in the API docs, e.g. `/finance/quote`.
    pub fn path(&self) -> String {
        self.segments.iter().fold(String::new(), |mut acc, s| {
            acc.push('/');
            acc.push_str(s);
            acc
        })
    }
}

/// Query-string parameters for a single request.
///
/// Setting a key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets `key` only when `value` is present and not blank.
    pub fn set_non_empty(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.0.insert(key.into(), v.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An immutable, ready-to-send GET request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

impl ApiRequest {
    pub const fn method(&self) -> &Method {
        &self.method
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn into_parts(self) -> (Method, Url, HeaderMap) {
        (self.method, self.url, self.headers)
    }
}

/// Builds `{base}/v{version}/{segments...}?{params}` with the `Accept` and API-key headers.
///
/// Each segment is percent-encoded on its own, so a caller-supplied symbol can
/// never introduce extra path components.
///
/// # Errors
///
/// Returns [`YfError::InvalidArgument`] if `base` cannot carry a path (e.g. `mailto:`).
pub(crate) fn build_request(
    base: &Url,
    api_key: &HeaderValue,
    segments: &[&str],
    version: u32,
    params: &QueryParams,
) -> Result<ApiRequest, YfError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| YfError::InvalidArgument(format!("base URL cannot be a base: {base}")))?
        .pop_if_empty()
        .push(&format!("v{version}"))
        .extend(segments);

    if !params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params.iter() {
            qp.append_pair(k, v);
        }
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key.clone());

    Ok(ApiRequest {
        method: Method::GET,
        url,
        headers,
    })
}

/// Joins symbols with commas, no trailing separator: `["AAPL", "MSFT"]` -> `"AAPL,MSFT"`.
pub fn join_symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Strips surrounding whitespace so the symbol is sent and looked up as written.
pub(crate) fn clean_symbol(symbol: impl Into<String>) -> String {
    let symbol: String = symbol.into();
    symbol.trim().to_string()
}

/// Checks a symbol list against the upstream limits before anything is sent.
pub(crate) fn validate_symbols(symbols: &[String]) -> Result<(), YfError> {
    if symbols.is_empty() {
        return Err(YfError::InvalidArgument(
            "at least one symbol is required".into(),
        ));
    }
    if symbols.len() > MAX_SYMBOLS {
        return Err(YfError::InvalidArgument(format!(
            "at most {MAX_SYMBOLS} symbols per request, got {}",
            symbols.len()
        )));
    }
    if symbols.iter().any(|s| s.trim().is_empty()) {
        return Err(YfError::InvalidArgument(
            "symbols must not be blank".into(),
        ));
    }
    Ok(())
}
