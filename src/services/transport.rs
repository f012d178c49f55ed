// src/services/transport.rs
// DOCUMENTATION: Raw access to the remote places service
// PURPOSE: Issue the four HTTP calls and report transport-level results

use crate::errors::TransportError;
use crate::models::{AddPlaceRequest, Place, PlacesResponse};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};

/// Path of the catalog of places available to add
pub const PLACES_PATH: &str = "places";

/// Path of the user's favourites
pub const USER_PLACES_PATH: &str = "user-places";

/// Raw remote operations
/// DOCUMENTATION: Implementations perform exactly one network call per
/// method and never retry. Errors carry transport detail; turning them into
/// caller-facing messages is the gateway's job.
#[async_trait]
pub trait PlacesTransport: Send + Sync {
    /// GET `{base}/{path}` and unwrap the `{ places: [...] }` envelope
    async fn fetch_places(&self, path: &str) -> Result<Vec<Place>, TransportError>;

    /// PUT `{base}/user-places` with `{ placeId }`
    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError>;

    /// DELETE `{base}/user-places/{placeId}`
    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError>;
}

/// reqwest-backed transport
pub struct HttpPlacesTransport {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the places service
    base_url: Url,
}

impl HttpPlacesTransport {
    /// Create transport for the service at `base_url`
    /// DOCUMENTATION: Paths are appended to the base URL's path, so a base
    /// of "http://host/api" resolves places at "http://host/api/places".
    pub fn new(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::Request(format!("Invalid base URL {}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(TransportError::Request(format!(
                "Base URL cannot carry paths: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::Request(format!("Base URL cannot carry paths: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn ensure_success(response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PlacesTransport for HttpPlacesTransport {
    async fn fetch_places(&self, path: &str) -> Result<Vec<Place>, TransportError> {
        let url = self.endpoint(&[path])?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;

        let body: PlacesResponse = response.json().await?;
        log::debug!("GET /{} returned {} places", path, body.places.len());
        Ok(body.places)
    }

    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        let url = self.endpoint(&[USER_PLACES_PATH])?;
        log::debug!("PUT {} placeId={}", url, place_id);

        let body = AddPlaceRequest {
            place_id: place_id.to_string(),
        };
        let response = self.client.put(url).json(&body).send().await?;

        // Response body is not used by the client
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        let url = self.endpoint(&[USER_PLACES_PATH, place_id])?;
        log::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
