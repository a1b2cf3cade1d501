//! Public client surface + builder.
//! Defaults (base URL, UA, header names) live in `constants`.

pub(crate) mod constants;

use crate::core::YfError;
use crate::core::request::{self, ApiRequest, QueryParams};
use crate::options::OptionsBuilder;
use crate::quote::QuoteBuilder;
use crate::spark::SparkBuilder;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use reqwest::header::HeaderValue;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Client for the yfapi.net REST API.
///
/// Holds the API key, the base URL and the HTTP transport. All three are fixed at
/// construction; cloning is cheap and clones can be used from many tasks at once.
///
/// # Example
///
/// ```no_run
/// # use yfapi_rs::YfClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), yfapi_rs::YfError> {
/// let client = YfClient::new("my-api-key")?;
/// let quotes = client.quote(["AAPL", "MSFT"]).fetch().await?;
/// println!("{:?}", quotes.get("AAPL").and_then(|q| q.get("regularMarketPrice")));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct YfClient {
    http: Client,
    base_url: Url,
    api_key: HeaderValue,
}

impl fmt::Debug for YfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YfClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl YfClient {
    /// Creates a client for the default base URL with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidArgument`] if the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, YfError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new builder.
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// The base URL every versioned endpoint path is appended to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Assembles a GET request for `segments` under `/v{version}` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidArgument`] if the base URL cannot carry a path.
    pub fn build_request(
        &self,
        segments: &[&str],
        version: u32,
        params: &QueryParams,
    ) -> Result<ApiRequest, YfError> {
        request::build_request(&self.base_url, &self.api_key, segments, version, params)
    }

    /// Start a quote lookup for `symbols` (at most ten).
    pub fn quote<I, S>(&self, symbols: I) -> QuoteBuilder<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuoteBuilder::new(self).symbols(symbols)
    }

    /// Start an option chain lookup for `symbol`.
    pub fn options(&self, symbol: impl Into<String>) -> OptionsBuilder<'_> {
        OptionsBuilder::new(self, symbol)
    }

    /// Start a spark lookup for `symbols` (at most ten).
    pub fn spark<I, S>(&self, symbols: I) -> SparkBuilder<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SparkBuilder::new(self).symbols(symbols)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
    custom_client: Option<Client>,
}

impl YfClientBuilder {
    /// Set the API key sent as `X-API-KEY`. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (default `https://yfapi.net`).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the User-Agent. Ignored when a custom client is supplied.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Route all requests through a proxy, e.g. `http://proxy.example.com:8080`.
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Use a caller-configured `reqwest::Client` as the transport.
    ///
    /// Timeouts, proxies and TLS settings are then whatever that client carries.
    #[must_use]
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    ///
    /// - [`YfError::InvalidArgument`] if the API key or base URL is missing, blank,
    ///   or the key is not a valid header value.
    /// - [`YfError::Url`] if the base URL does not parse.
    /// - [`YfError::Http`] if the transport cannot be constructed (e.g. a bad proxy URL).
    pub fn build(self) -> Result<YfClient, YfError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| YfError::InvalidArgument("api_key cannot be empty or whitespace".into()))?;
        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| {
            YfError::InvalidArgument("api_key contains characters not allowed in a header".into())
        })?;
        api_key.set_sensitive(true);

        let base_url = match self.base_url.as_deref() {
            None => Url::parse(DEFAULT_BASE_URL)?,
            Some(raw) if raw.trim().is_empty() => {
                return Err(YfError::InvalidArgument(
                    "base_url cannot be empty or whitespace".into(),
                ));
            }
            Some(raw) => Url::parse(raw.trim())?,
        };
        if base_url.cannot_be_a_base() {
            return Err(YfError::InvalidArgument(format!(
                "base_url must be a hierarchical URL: {base_url}"
            )));
        }

        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                if let Some(p) = self.proxy.as_deref() {
                    httpb = httpb.proxy(reqwest::Proxy::all(p)?);
                }

                httpb.build()?
            }
        };

        Ok(YfClient {
            http,
            base_url,
            api_key,
        })
    }
}
