use crate::common::{client_for, mock_options, mock_status, setup_server};
use httpmock::Method::GET;
use yfapi_rs::YfError;

#[tokio::test]
async fn chain_is_keyed_by_underlying_symbol() {
    let server = setup_server();
    let mock = mock_options(&server, "AAPL");
    let client = client_for(&server);

    let chain = yfapi_rs::option_chain(&client, "AAPL", None).await.unwrap();
    mock.assert();

    assert_eq!(chain.len(), 1);
    let aapl = &chain["AAPL"];
    assert_eq!(aapl["underlyingSymbol"], "AAPL");
    assert_eq!(aapl["hasMiniOptions"], "false");
    assert_eq!(aapl["expirationDates"], "[1704412800,1705017600]");

    let nested: serde_json::Value = serde_json::from_str(&aapl["options"]).unwrap();
    assert_eq!(nested[0]["calls"][0]["contractSymbol"], "AAPL240105C00185000");
}

#[tokio::test]
async fn date_is_forwarded() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/options/AAPL")
            .query_param("date", "1704412800");
        then.status(200)
            .body(crate::common::fixture("options", "AAPL"));
    });
    let client = client_for(&server);

    let chain = client
        .options("AAPL")
        .date("1704412800")
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(chain.contains_key("AAPL"));
}

#[tokio::test]
async fn missing_option_chain_is_data_error() {
    let server = setup_server();
    let _mock = mock_status(&server, "/v7/finance/options/AAPL", 200, r#"{"quoteResponse":{}}"#);
    let client = client_for(&server);

    let err = client.options("AAPL").fetch().await.unwrap_err();
    match err {
        YfError::Data(msg) => assert!(msg.contains("optionChain"), "{msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_status_error_but_raw_passes_through() {
    let server = setup_server();
    let body = r#"{"optionChain":{"result":[],"error":{"code":"Not Found"}}}"#;
    let mock = mock_status(&server, "/v7/finance/options/ZZZZ", 404, body);
    let client = client_for(&server);

    let err = client.options("ZZZZ").fetch().await.unwrap_err();
    match err {
        YfError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.contains("/v7/finance/options/ZZZZ"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    let resp = client.options("ZZZZ").fetch_raw().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(resp.text().await.unwrap(), body);
    assert_eq!(mock.calls(), 2);
}
