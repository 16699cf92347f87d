// Store context shared with the display surface.
// Runs fetches on the tokio runtime and applies their outcomes on the caller's thread.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::Post;

use super::post_store::{FetchKind, FetchOutcome, PostStore};
use super::state::PostState;

/// Owns the store for the lifetime of the application.
///
/// Fetches are spawned as tasks; nothing mutates the store until the owner
/// calls [`StoreContext::drain`] or [`StoreContext::settle`].
pub struct StoreContext {
    store: PostStore,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
    in_flight: usize,
}

impl StoreContext {
    pub fn new(store: PostStore) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &PostState {
        self.store.state()
    }

    /// Number of spawned fetches whose outcome has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start `load` in the background.
    pub fn load(&mut self) {
        self.dispatch(FetchKind::Load);
    }

    /// Start `invalidate` in the background. Overlapping calls each fetch.
    pub fn invalidate(&mut self) {
        self.dispatch(FetchKind::Invalidate);
    }

    pub fn select_post(&mut self, post: Option<Post>) {
        self.store.select_post(post);
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }

    fn dispatch(&mut self, kind: FetchKind) {
        let Some(pending) = self.store.begin(kind) else {
            return;
        };

        let tx = self.tx.clone();
        self.in_flight += 1;
        log::debug!("Spawned {:?} fetch, {} in flight", pending.kind(), self.in_flight);
        tokio::spawn(async move {
            let outcome = pending.run().await;
            // Receiver only goes away with the context itself.
            let _ = tx.send(outcome);
        });
    }

    /// Apply every outcome that has already arrived. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for in-flight fetches to finish, up to `timeout`.
    pub async fn settle(&mut self, timeout: Duration) {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.in_flight > 0 {
            match tokio::time::timeout_at(deadline, self.rx.recv()).await {
                Ok(Some(outcome)) => self.apply(outcome),
                Ok(None) | Err(_) => break,
            }
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.store.complete(outcome);
    }
}
