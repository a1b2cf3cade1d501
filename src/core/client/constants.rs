//! Centralized constants for default endpoints, headers and UA.

/// Default UA sent when the builder creates its own transport.
pub(crate) const USER_AGENT: &str = concat!("yfapi-rs/", env!("CARGO_PKG_VERSION"));

/// Default yfapi.net base (versioned paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://yfapi.net";

/// Header carrying the API key on every request (`X-API-KEY`; lowercase for `HeaderName`).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Media type sent in the `Accept` header.
pub const APPLICATION_JSON: &str = "application/json";

/// Upstream limit on symbols per quote or spark request.
pub const MAX_SYMBOLS: usize = 10;
