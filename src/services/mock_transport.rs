// src/services/mock_transport.rs
// DOCUMENTATION: Scripted in-memory transport for tests
// PURPOSE: Control remote outcomes and timing without a network

use crate::errors::TransportError;
use crate::models::Place;
use crate::services::transport::{PlacesTransport, PLACES_PATH};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Mock transport for testing without network.
///
/// Writes can be held open until the test releases them, which lets tests
/// observe the optimistic state and pick the order in which concurrent
/// requests resolve.
#[derive(Default)]
pub(crate) struct MockTransport {
    available: Mutex<Vec<Place>>,
    user_places: Mutex<Vec<Place>>,
    fail_fetches: AtomicBool,
    fail_writes: AtomicBool,
    hold_writes: AtomicBool,
    held: Mutex<VecDeque<(String, oneshot::Sender<bool>)>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_available(&self, places: Vec<Place>) {
        *self.available.lock().unwrap() = places;
    }

    pub(crate) fn set_user_places(&self, places: Vec<Place>) {
        *self.user_places.lock().unwrap() = places;
    }

    pub(crate) fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Park every subsequent write until `release` is called for it
    pub(crate) fn hold_writes(&self, hold: bool) {
        self.hold_writes.store(hold, Ordering::SeqCst);
    }

    /// Every request seen so far, e.g. "GET places", "PUT a", "DELETE b"
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn held_count(&self) -> usize {
        self.held.lock().unwrap().len()
    }

    /// Resolve the oldest parked write labelled `call`
    pub(crate) fn release(&self, call: &str, succeed: bool) {
        let mut held = self.held.lock().unwrap();
        let index = held
            .iter()
            .position(|(label, _)| label == call)
            .unwrap_or_else(|| panic!("no held request {:?}", call));
        if let Some((_, tx)) = held.remove(index) {
            let _ = tx.send(succeed);
        }
    }

    /// Let spawned tasks run until `count` writes are parked
    pub(crate) async fn wait_for_held(&self, count: usize) {
        for _ in 0..1000 {
            if self.held_count() >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} held requests, found {}", count, self.held_count());
    }

    async fn write(&self, call: String) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(call.clone());

        let succeed = if self.hold_writes.load(Ordering::SeqCst) {
            let (tx, rx) = oneshot::channel();
            self.held.lock().unwrap().push_back((call, tx));
            rx.await.unwrap_or(false)
        } else {
            !self.fail_writes.load(Ordering::SeqCst)
        };

        if succeed {
            Ok(())
        } else {
            Err(TransportError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            })
        }
    }
}

#[async_trait]
impl PlacesTransport for MockTransport {
    async fn fetch_places(&self, path: &str) -> Result<Vec<Place>, TransportError> {
        self.calls.lock().unwrap().push(format!("GET {}", path));

        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(TransportError::Request("connection refused".to_string()));
        }

        if path == PLACES_PATH {
            Ok(self.available.lock().unwrap().clone())
        } else {
            Ok(self.user_places.lock().unwrap().clone())
        }
    }

    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        self.write(format!("PUT {}", place_id)).await?;

        let place = self
            .available
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == place_id)
            .cloned();
        let mut user_places = self.user_places.lock().unwrap();
        if let Some(place) = place {
            if !user_places.iter().any(|p| p.id == place_id) {
                user_places.push(place);
            }
        }
        Ok(())
    }

    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        self.write(format!("DELETE {}", place_id)).await?;
        self.user_places.lock().unwrap().retain(|p| p.id != place_id);
        Ok(())
    }
}
