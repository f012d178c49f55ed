// src/services/gateway.rs
// DOCUMENTATION: Remote sync gateway
// PURPOSE: Map store intents onto remote calls and fixed user-facing errors

use crate::errors::{FetchTarget, MutationKind, PlacesError};
use crate::models::Place;
use crate::services::transport::{PlacesTransport, PLACES_PATH, USER_PLACES_PATH};
use std::sync::Arc;

/// Stateless bridge between PlaceStore and a PlacesTransport
/// DOCUMENTATION: Each call makes exactly one transport request. On failure
/// the raw transport error is logged here and replaced by the fixed message
/// for the call site; nothing is retried.
#[derive(Clone)]
pub struct RemoteSyncGateway {
    transport: Arc<dyn PlacesTransport>,
}

impl RemoteSyncGateway {
    pub fn new(transport: Arc<dyn PlacesTransport>) -> Self {
        Self { transport }
    }

    /// GET /places
    pub async fn fetch_available_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.fetch(PLACES_PATH, FetchTarget::AvailablePlaces).await
    }

    /// GET /user-places
    pub async fn fetch_user_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.fetch(USER_PLACES_PATH, FetchTarget::UserPlaces).await
    }

    /// PUT /user-places
    pub async fn add_user_place(&self, place_id: &str) -> Result<(), PlacesError> {
        self.transport.put_user_place(place_id).await.map_err(|e| {
            log::error!("Storing place {} failed: {}", place_id, e);
            PlacesError::Mutation(MutationKind::Add)
        })
    }

    /// DELETE /user-places/{placeId}
    pub async fn remove_user_place(&self, place_id: &str) -> Result<(), PlacesError> {
        self.transport.delete_user_place(place_id).await.map_err(|e| {
            log::error!("Removing place {} failed: {}", place_id, e);
            PlacesError::Mutation(MutationKind::Remove)
        })
    }

    async fn fetch(&self, path: &str, target: FetchTarget) -> Result<Vec<Place>, PlacesError> {
        self.transport.fetch_places(path).await.map_err(|e| {
            log::error!("Fetching /{} failed: {}", path, e);
            PlacesError::Fetch(target)
        })
    }
}
