//! Simple example of using tmdb-rotate.
//!
//! Fetches details for a well-known show, rotating across two proxies.
//! Pass your TMDB API key as the first argument.

use tmdb_rotate::{to_pretty_json, Config, Options, ProxyServer, TmdbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let api_key = std::env::args().nth(1).expect("usage: simple <api-key>");

    let config = Config::builder(api_key)
        .use_proxy(true)
        .proxies(vec![
            // First slot is the localhost escape hatch: every other request
            // goes out directly.
            ProxyServer::new("localhost", "0"),
            ProxyServer::with_auth("proxy-b.example.com", "3128", "user", "secret"),
        ])
        .build();

    let client = TmdbClient::new(config)?;

    let mut options = Options::new();
    options.insert("language".to_owned(), "en-US".to_owned());

    let show = client.tv_info(1399, &options).await?;
    println!("{}", to_pretty_json(&show)?);

    let popular = client.tv_popular(&Options::new()).await?;
    for entry in popular.results.iter().take(5) {
        println!("{} ({})", entry.name, entry.first_air_date.as_deref().unwrap_or("?"));
    }

    Ok(())
}
