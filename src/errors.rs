// src/errors.rs
// DOCUMENTATION: Error taxonomy for the places client
// PURPOSE: Separate raw transport failures from the fixed messages callers see

use thiserror::Error;

/// Which catalog a failed fetch was loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// GET /places
    AvailablePlaces,
    /// GET /user-places
    UserPlaces,
}

/// Which optimistic write failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Add,
    Remove,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Add => "add",
            MutationKind::Remove => "remove",
        }
    }
}

/// Transport-level failures
/// DOCUMENTATION: Produced by a PlacesTransport. Never crosses the gateway;
/// the gateway logs it and replaces it with a PlacesError.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Caller-visible errors
/// DOCUMENTATION: Display renders the fixed user-facing message for each
/// call site. Fetch failures never touch local state; mutation failures are
/// always delivered after the optimistic change has been rolled back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacesError {
    #[error("{}", fetch_message(.0))]
    Fetch(FetchTarget),

    #[error("{}", mutation_message(.0))]
    Mutation(MutationKind),

    #[error("Request was cancelled before it completed")]
    Cancelled,
}

impl PlacesError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, PlacesError::Fetch(_))
    }

    /// Operation name for mutation errors ("add" / "remove")
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            PlacesError::Mutation(kind) => Some(kind.as_str()),
            _ => None,
        }
    }
}

fn fetch_message(target: &FetchTarget) -> &'static str {
    match target {
        FetchTarget::AvailablePlaces => {
            "Something went wrong fetching the available places. Please try again later."
        }
        FetchTarget::UserPlaces => {
            "Something went wrong fetching the favourite places. Please try again later."
        }
    }
}

fn mutation_message(kind: &MutationKind) -> &'static str {
    match kind {
        MutationKind::Add => "Failed to store selected place.",
        MutationKind::Remove => "Failed to remove selected place.",
    }
}
