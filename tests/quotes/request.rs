use std::collections::HashMap;

use crate::common::{client_for, eleven_symbols, setup_server};
use yfapi_rs::{QuoteBuilder, YfClient, YfError};

fn query(req: &yfapi_rs::ApiRequest) -> HashMap<String, String> {
    req.url().query_pairs().into_owned().collect()
}

#[test]
fn symbols_are_comma_joined_with_defaults() {
    let client = YfClient::new("k").unwrap();
    for n in 1..=10 {
        let symbols: Vec<String> = (0..n).map(|i| format!("S{i}")).collect();
        let req = client.quote(symbols.clone()).request().unwrap();

        assert_eq!(req.url().path(), "/v6/finance/quote");
        let q = query(&req);
        assert_eq!(q["symbols"], symbols.join(","));
        assert!(!q["symbols"].ends_with(','));
        assert_eq!(q["region"], "us");
        assert_eq!(q["lang"], "EN");
    }
}

#[test]
fn headers_carry_key_and_accept() {
    let client = YfClient::new("abc123").unwrap();
    let req = QuoteBuilder::new(&client).add_symbol("AAPL").request().unwrap();
    assert_eq!(req.headers()["x-api-key"], "abc123");
    assert_eq!(req.headers()["accept"], "application/json");
}

#[test]
fn empty_and_blank_symbol_lists_are_rejected() {
    let client = YfClient::new("k").unwrap();
    let err = client.quote(Vec::<String>::new()).request().unwrap_err();
    assert!(matches!(err, YfError::InvalidArgument(_)));

    let err = client.quote(["AAPL", ""]).request().unwrap_err();
    assert!(matches!(err, YfError::InvalidArgument(_)));
}

#[tokio::test]
async fn eleven_symbols_fail_before_any_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET);
        then.status(200).body("{}");
    });
    let client = client_for(&server);

    let err = client.quote(eleven_symbols()).fetch().await.unwrap_err();
    assert!(err.is_invalid_argument(), "got {err:?}");

    let err = client.quote(eleven_symbols()).fetch_raw().await.unwrap_err();
    assert!(err.is_invalid_argument(), "got {err:?}");

    assert_eq!(mock.calls(), 0);
}

#[test]
fn padded_symbols_are_trimmed() {
    let client = YfClient::new("k").unwrap();
    let req = client
        .quote([" AAPL", "MSFT\t"])
        .add_symbol("  GOOG ")
        .request()
        .unwrap();
    assert_eq!(query(&req)["symbols"], "AAPL,MSFT,GOOG");
}
