// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables
/// DOCUMENTATION: Only the binary reads this; the store and gateway take
/// their collaborators as constructor arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the places service (e.g., "http://localhost:3000")
    pub places_api_url: String,

    /// Optional per-request timeout in seconds. None means the transport
    /// waits until the server answers or the connection drops.
    pub http_timeout_secs: Option<u64>,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            places_api_url: env::var("PLACES_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the base URL can be joined with request paths
    pub fn validate(&self) -> Result<(), String> {
        if self.places_api_url.is_empty() {
            return Err("PLACES_API_URL is required".to_string());
        }

        let url = Url::parse(&self.places_api_url)
            .map_err(|e| format!("PLACES_API_URL is not a valid URL: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(format!(
                    "PLACES_API_URL must use http or https, got {}",
                    other
                ))
            }
        }

        if self.http_timeout_secs.is_none() {
            log::debug!("HTTP_TIMEOUT_SECS not set - requests wait for the server indefinitely");
        }

        Ok(())
    }
}
