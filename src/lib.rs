// src/lib.rs
// DOCUMENTATION: Client-side data access for a user's favourite places
// PURPOSE: Keep a local collection in sync with the remote places service
// using optimistic updates with rollback

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::{FetchTarget, MutationKind, PlacesError, TransportError};
pub use models::{Place, PlaceCollection};
pub use services::{
    HttpPlacesTransport, PendingRequest, PlaceStore, PlacesTransport, PlacesView,
    RemoteSyncGateway, RequestState, SubscriptionScope,
};
