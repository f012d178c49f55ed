// src/services/request.rs
// DOCUMENTATION: Explicit async result for store operations
// PURPOSE: Pending / success / failure handle for work running on a task

use crate::errors::PlacesError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Resolution state of a PendingRequest
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Pending,
    Success(T),
    Failure(PlacesError),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}

/// Handle to an operation running on its own tokio task
/// DOCUMENTATION: Awaiting the handle yields the operation's result.
/// Dropping it only discards the result; the task itself keeps running to
/// completion, so the store still confirms or rolls back.
pub struct PendingRequest<T> {
    rx: oneshot::Receiver<Result<T, PlacesError>>,
    resolved: Option<Result<T, PlacesError>>,
}

// No field is structurally pinned
impl<T> Unpin for PendingRequest<T> {}

impl<T> PendingRequest<T>
where
    T: Send + 'static,
{
    /// Run `operation` on a new task and return a handle to its result
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the task is started
    /// with `tokio::spawn`.
    pub fn spawn<F>(operation: F) -> Self
    where
        F: Future<Output = Result<T, PlacesError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = operation.await;
            if tx.send(result).is_err() {
                log::debug!("Request completed after its subscriber went away; result discarded");
            }
        });

        Self { rx, resolved: None }
    }
}

impl<T> PendingRequest<T> {
    /// Check the current state without waiting
    pub fn state(&mut self) -> RequestState<T>
    where
        T: Clone,
    {
        if self.resolved.is_none() {
            match self.rx.try_recv() {
                Ok(result) => self.resolved = Some(result),
                Err(TryRecvError::Empty) => return RequestState::Pending,
                Err(TryRecvError::Closed) => self.resolved = Some(Err(PlacesError::Cancelled)),
            }
        }

        match &self.resolved {
            Some(Ok(value)) => RequestState::Success(value.clone()),
            Some(Err(err)) => RequestState::Failure(err.clone()),
            None => RequestState::Pending,
        }
    }
}

impl<T> Future for PendingRequest<T> {
    type Output = Result<T, PlacesError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(result) = self.resolved.take() {
            return Poll::Ready(result);
        }

        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Producer task died without sending
            Poll::Ready(Err(_)) => Poll::Ready(Err(PlacesError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{FetchTarget, MutationKind};
    use tokio::sync::oneshot;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    #[tokio::test]
    async fn test_state_moves_from_pending_to_success() {
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        let mut request = PendingRequest::spawn(async move {
            let _ = gate_rx.await;
            Ok::<_, PlacesError>(7u32)
        });

        assert_eq!(request.state(), RequestState::Pending);

        gate_tx.send(()).unwrap();
        let result = (&mut request).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_state_reports_failure_and_is_sticky() {
        let mut request = PendingRequest::<()>::spawn(async {
            Err(PlacesError::Mutation(MutationKind::Add))
        });

        for _ in 0..100 {
            if !request.state().is_pending() {
                break;
            }
            tokio::task::yield_now().await;
        }

        let failed = RequestState::Failure(PlacesError::Mutation(MutationKind::Add));
        assert_eq!(request.state(), failed);
        assert_eq!(request.state(), failed);
        assert_eq!(request.await, Err(PlacesError::Mutation(MutationKind::Add)));
    }

    #[tokio::test]
    async fn test_future_stays_pending_until_operation_finishes() {
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        let request = PendingRequest::spawn(async move {
            let _ = gate_rx.await;
            Err::<Vec<u8>, _>(PlacesError::Fetch(FetchTarget::UserPlaces))
        });

        let mut polled = task::spawn(request);
        assert_pending!(polled.poll());

        gate_tx.send(()).unwrap();
        for _ in 0..100 {
            if polled.is_woken() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_ready_eq!(polled.poll(), Err(PlacesError::Fetch(FetchTarget::UserPlaces)));
    }

    #[tokio::test]
    async fn test_dropped_producer_reads_as_cancelled() {
        let (tx, rx) = oneshot::channel::<Result<(), PlacesError>>();
        drop(tx);
        let mut request = PendingRequest { rx, resolved: None };

        assert_eq!(request.state(), RequestState::Failure(PlacesError::Cancelled));
    }
}
