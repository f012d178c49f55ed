// src/services/place_store.rs
// DOCUMENTATION: Local source of truth for the user's favourite places
// PURPOSE: Optimistic add/remove with rollback, wholesale reload, read-only view

use crate::errors::{MutationKind, PlacesError};
use crate::models::{Place, PlaceCollection};
use crate::services::gateway::RemoteSyncGateway;
use crate::services::request::PendingRequest;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the user's favourites
/// DOCUMENTATION: The collection lives in a watch channel whose sender only
/// this type holds; readers get a PlacesView. Every local change is applied
/// in one synchronous step, so no reader sees a half-updated collection.
///
/// The only public writers are `load_user_places`, `add_place` and
/// `remove_place` (plus their `spawn_*` variants); the optimistic helper
/// they share is private, so code outside the crate cannot hand it an
/// arbitrary edit:
///
/// ```compile_fail
/// # use places_sync::{MutationKind, PlaceCollection, PlaceStore};
/// # async fn overwrite(store: &PlaceStore) {
/// let _ = store
///     .with_optimistic_update(
///         MutationKind::Add,
///         |places: &mut PlaceCollection| {
///             *places = PlaceCollection::new();
///             true
///         },
///         async { Ok(()) },
///     )
///     .await;
/// # }
/// ```
///
/// Mutations are not serialized against each other. Each one restores its
/// own snapshot on failure, which can discard a concurrent change that was
/// applied in between.
pub struct PlaceStore {
    gateway: RemoteSyncGateway,
    user_places: watch::Sender<PlaceCollection>,
}

impl PlaceStore {
    /// Create store with an empty collection
    pub fn new(gateway: RemoteSyncGateway) -> Self {
        let (user_places, _) = watch::channel(PlaceCollection::new());
        Self {
            gateway,
            user_places,
        }
    }

    /// Live read-only projection of the favourites
    pub fn loaded_user_places(&self) -> PlacesView {
        PlacesView {
            rx: self.user_places.subscribe(),
        }
    }

    /// Current favourites as an owned snapshot
    pub fn user_places(&self) -> PlaceCollection {
        self.user_places.borrow().clone()
    }

    /// Fetch the catalog of places that can be added
    /// DOCUMENTATION: Leaves the favourites untouched
    pub async fn load_available_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.gateway.fetch_available_places().await
    }

    /// Fetch the favourites and replace the local collection with them
    /// DOCUMENTATION: On success any unconfirmed optimistic change is
    /// overwritten. On failure the collection is left as it was. The
    /// returned list is the stored one, so a repeated id in the server
    /// response appears once.
    pub async fn load_user_places(&self) -> Result<Vec<Place>, PlacesError> {
        let fetched = self.gateway.fetch_user_places().await?;
        let collection = PlaceCollection::from(fetched);

        log::info!("Loaded {} favourite places", collection.len());
        let places = collection.as_slice().to_vec();
        self.user_places.send_replace(collection);
        Ok(places)
    }

    /// Optimistically append `place`, then store it remotely
    /// DOCUMENTATION: An id already present is not appended again, but the
    /// remote write is still sent. On failure the collection is restored to
    /// the snapshot taken right before the append.
    pub async fn add_place(&self, place: Place) -> Result<(), PlacesError> {
        let place_id = place.id.clone();
        self.with_optimistic_update(
            MutationKind::Add,
            move |places| places.append(place),
            self.gateway.add_user_place(&place_id),
        )
        .await
    }

    /// Optimistically drop `place`, then remove it remotely
    /// DOCUMENTATION: Mirror of add_place. Removing an absent id changes
    /// nothing locally but still sends the remote delete.
    pub async fn remove_place(&self, place: &Place) -> Result<(), PlacesError> {
        self.with_optimistic_update(
            MutationKind::Remove,
            |places| places.remove(&place.id),
            self.gateway.remove_user_place(&place.id),
        )
        .await
    }

    /// Snapshot, mutate locally, await the remote call, restore on failure
    /// DOCUMENTATION: `mutate_local` returns whether it changed anything so
    /// unchanged collections do not notify readers. `remote_call` is not
    /// polled until the local change has been applied. The rollback happens
    /// before the error is returned, so a caller holding the error always
    /// observes the restored collection.
    ///
    /// Dropping the returned future while the remote call is in flight
    /// leaves the optimistic change in place; callers that may go away
    /// should use the `spawn_*` variants.
    async fn with_optimistic_update<M, R>(
        &self,
        kind: MutationKind,
        mutate_local: M,
        remote_call: R,
    ) -> Result<(), PlacesError>
    where
        M: FnOnce(&mut PlaceCollection) -> bool,
        R: Future<Output = Result<(), PlacesError>>,
    {
        let mut snapshot = PlaceCollection::new();
        let changed = self.user_places.send_if_modified(|places| {
            snapshot = places.clone();
            mutate_local(places)
        });
        log::debug!(
            "Optimistic {} applied (changed: {}, {} -> {} places)",
            kind.as_str(),
            changed,
            snapshot.len(),
            self.user_places.borrow().len()
        );

        match remote_call.await {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!(
                    "Remote {} failed, restoring {} places",
                    kind.as_str(),
                    snapshot.len()
                );
                self.user_places.send_replace(snapshot);
                Err(err)
            }
        }
    }

    /// load_available_places on its own task
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, like every `spawn_*`
    /// method here.
    pub fn spawn_load_available_places(self: &Arc<Self>) -> PendingRequest<Vec<Place>> {
        let store = Arc::clone(self);
        PendingRequest::spawn(async move { store.load_available_places().await })
    }

    /// load_user_places on its own task
    pub fn spawn_load_user_places(self: &Arc<Self>) -> PendingRequest<Vec<Place>> {
        let store = Arc::clone(self);
        PendingRequest::spawn(async move { store.load_user_places().await })
    }

    /// add_place on its own task; reconciliation completes even if the
    /// returned handle is dropped
    pub fn spawn_add_place(self: &Arc<Self>, place: Place) -> PendingRequest<()> {
        let store = Arc::clone(self);
        PendingRequest::spawn(async move { store.add_place(place).await })
    }

    /// remove_place on its own task
    pub fn spawn_remove_place(self: &Arc<Self>, place: Place) -> PendingRequest<()> {
        let store = Arc::clone(self);
        PendingRequest::spawn(async move { store.remove_place(&place).await })
    }
}

/// Read-only view of the favourites
#[derive(Clone)]
pub struct PlacesView {
    rx: watch::Receiver<PlaceCollection>,
}

impl PlacesView {
    pub fn snapshot(&self) -> PlaceCollection {
        self.rx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rx.borrow().contains(id)
    }

    /// Wait for the next change and return the new collection.
    /// Returns None once the store is gone.
    pub async fn changed(&mut self) -> Option<PlaceCollection> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
