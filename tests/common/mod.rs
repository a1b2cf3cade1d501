#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use yfapi_rs::YfClient;

pub const API_KEY: &str = "test-api-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{symbol}.json");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> YfClient {
    YfClient::builder()
        .api_key(API_KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

pub fn eleven_symbols() -> Vec<String> {
    (1..=11).map(|i| format!("SYM{i}")).collect()
}

pub fn mock_quote<'a>(server: &'a MockServer, symbols: &'a str, fixture_key: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/quote")
            .query_param("symbols", symbols)
            .query_param("region", "us")
            .query_param("lang", "EN")
            .header("x-api-key", API_KEY)
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quote", fixture_key));
    })
}

pub fn mock_options<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v7/finance/options/{symbol}"))
            .header("x-api-key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("options", symbol));
    })
}

pub fn mock_spark<'a>(
    server: &'a MockServer,
    symbols: &'a str,
    fixture_key: &str,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/spark")
            .query_param("symbols", symbols)
            .header("x-api-key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("spark", fixture_key));
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &'a str, status: u16, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
