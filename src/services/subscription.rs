// src/services/subscription.rs
// DOCUMENTATION: Lifetime scope for result callbacks
// PURPOSE: Unsubscribe callbacks when the consuming view goes away

use crate::errors::PlacesError;
use crate::services::request::PendingRequest;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Scope owning the callbacks a consumer attached to pending requests
/// DOCUMENTATION: Once the scope is destroyed (explicitly or by drop) no
/// callback starts, on any runtime flavor: listeners check a shared flag
/// before invoking. A callback already running when `destroy` is called
/// finishes. The operations behind the requests are not aborted: their
/// network calls finish and the store still reconciles, only the delivery
/// to this scope is dropped.
#[derive(Default)]
pub struct SubscriptionScope {
    listeners: Vec<JoinHandle<()>>,
    destroyed: Arc<AtomicBool>,
}

impl SubscriptionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke `on_result` once `request` resolves, unless the scope is
    /// destroyed first
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn subscribe<T, F>(&mut self, request: PendingRequest<T>, on_result: F)
    where
        T: Send + 'static,
        F: FnOnce(Result<T, PlacesError>) + Send + 'static,
    {
        if self.is_destroyed() {
            log::debug!("Subscribe on destroyed scope ignored");
            return;
        }

        let destroyed = Arc::clone(&self.destroyed);
        self.listeners.retain(|handle| !handle.is_finished());
        self.listeners.push(tokio::spawn(async move {
            let result = request.await;
            // abort() cannot stop a poll already running on another worker
            if destroyed.load(Ordering::SeqCst) {
                return;
            }
            on_result(result);
        }));
    }

    /// Number of callbacks still waiting for their request
    pub fn active(&self) -> usize {
        self.listeners.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Unsubscribe every pending callback
    pub fn destroy(&mut self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }

        let pending = self.active();
        for handle in self.listeners.drain(..) {
            handle.abort();
        }
        if pending > 0 {
            log::debug!("Scope destroyed with {} pending subscriptions", pending);
        }
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.destroy();
    }
}
