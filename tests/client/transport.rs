use httpmock::Method::GET;

use crate::common::{API_KEY, fixture, setup_server};
use yfapi_rs::{YfClient, YfError};

#[tokio::test]
async fn custom_client_is_used_as_transport() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/quote")
            .header("user-agent", "custom-transport-ua")
            .header("x-api-key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quote", "AAPL"));
    });

    let http = reqwest::Client::builder()
        .user_agent("custom-transport-ua")
        .build()
        .unwrap();
    let client = YfClient::builder()
        .api_key(API_KEY)
        .base_url(server.base_url())
        .custom_client(http)
        .build()
        .unwrap();

    let quotes = client.quote(["AAPL"]).fetch().await.unwrap();
    mock.assert();
    assert!(quotes.contains_key("AAPL"));
}

#[tokio::test]
async fn custom_client_ignores_builder_user_agent() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/quote")
            .header("user-agent", "from-custom-client");
        then.status(200).body(fixture("quote", "AAPL"));
    });

    let client = YfClient::builder()
        .api_key(API_KEY)
        .base_url(server.base_url())
        .user_agent("from-builder")
        .custom_client(
            reqwest::Client::builder()
                .user_agent("from-custom-client")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    client.quote(["AAPL"]).fetch().await.unwrap();
    mock.assert();
}

#[test]
fn bad_proxy_fails_build() {
    let err = YfClient::builder()
        .api_key(API_KEY)
        .proxy("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, YfError::Http(_)), "got {err:?}");
    assert!(!err.is_invalid_argument());
}
