// src/config/http.rs
// DOCUMENTATION: HTTP client initialization
// PURPOSE: Build the shared reqwest client from configuration

use crate::config::Config;
use reqwest::Client;

/// Build the HTTP client used by the places transport
/// DOCUMENTATION: Called once at startup. Retries are never configured here;
/// a failed request surfaces once and the caller decides what to do.
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    log::info!("Initializing HTTP client for {}", config.places_api_url);

    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
