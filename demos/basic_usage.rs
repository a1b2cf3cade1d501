use std::time::Duration;

use yfapi_rs::YfClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(api_key) = std::env::args().nth(1) else {
        eprintln!("usage: cargo run --example basic_usage -- <API_KEY>");
        std::process::exit(2);
    };

    let client = YfClient::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("--- Quotes ---");
    let quotes = client.quote(["AAPL", "MSFT", "NVDA"]).fetch().await?;
    for (symbol, quote) in &quotes {
        println!(
            "  {symbol}: {} {}",
            quote.get("regularMarketPrice").map_or("-", String::as_str),
            quote.get("currency").map_or("", String::as_str)
        );
    }
    println!();

    println!("--- Option chain for AAPL ---");
    let chain = client.options("AAPL").fetch().await?;
    if let Some(aapl) = chain.get("AAPL") {
        println!(
            "  expirations: {}",
            aapl.get("expirationDates").map_or("-", String::as_str)
        );
    }
    println!();

    println!("--- Spark (1d / 1mo) ---");
    let spark = client.spark(["AAPL", "MSFT"]).interval("1d").range("1mo").fetch().await?;
    for (symbol, series) in &spark {
        let closes = series
            .get("close")
            .and_then(|c| c.as_array())
            .map_or(0, Vec::len);
        println!("  {symbol}: {closes} closes");
    }
    println!();

    println!("--- Raw response ---");
    let resp = client.quote(["TSLA"]).fetch_raw().await?;
    println!("  status {}", resp.status());
    println!("  {} bytes", resp.text().await?.len());

    Ok(())
}
