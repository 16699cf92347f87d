// Post store: fetch, cache, invalidate, and select.
// Every mutation is written through to durable storage.

use std::sync::Arc;

use crate::api::{Post, PostSource};
use crate::error::Result;
use crate::storage::DurableKeyValueStore;

use super::state::{InvalidateMode, PostState};

/// Fixed name of the storage slot holding the persisted state.
pub const STORAGE_KEY: &str = "post-storage";

/// Which store operation a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Load,
    Invalidate,
}

/// Result of a fetch, ready to be applied with [`PostStore::complete`].
/// Failures are already reduced to their display text.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub kind: FetchKind,
    pub result: std::result::Result<Vec<Post>, String>,
}

/// A fetch that has been started against the store but not yet run.
pub struct PendingFetch {
    kind: FetchKind,
    source: Arc<dyn PostSource>,
}

impl PendingFetch {
    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    /// Perform the network fetch. Never fails; errors land in the outcome.
    pub async fn run(self) -> FetchOutcome {
        let result = self
            .source
            .fetch_posts()
            .await
            .map_err(|e| e.to_string());
        FetchOutcome {
            kind: self.kind,
            result,
        }
    }
}

/// Single source of truth for posts and fetch status.
pub struct PostStore {
    state: PostState,
    source: Arc<dyn PostSource>,
    storage: Box<dyn DurableKeyValueStore>,
    invalidate_mode: InvalidateMode,
}

impl PostStore {
    /// Create a store, rehydrating from `storage` before anything is fetched.
    pub fn new(
        source: Arc<dyn PostSource>,
        storage: Box<dyn DurableKeyValueStore>,
        invalidate_mode: InvalidateMode,
    ) -> Self {
        let state = rehydrate(storage.as_ref());
        Self {
            state,
            source,
            storage,
            invalidate_mode,
        }
    }

    pub fn state(&self) -> &PostState {
        &self.state
    }

    /// Fetch posts unless some are already cached.
    ///
    /// Awaits in place; the event loop goes through [`StoreContext`] instead.
    ///
    /// [`StoreContext`]: super::StoreContext
    #[cfg(test)]
    pub async fn load(&mut self) {
        if let Some(pending) = self.begin(FetchKind::Load) {
            let outcome = pending.run().await;
            self.complete(outcome);
        }
    }

    /// Re-fetch posts regardless of what is cached.
    #[cfg(test)]
    pub async fn invalidate(&mut self) {
        if let Some(pending) = self.begin(FetchKind::Invalidate) {
            let outcome = pending.run().await;
            self.complete(outcome);
        }
    }

    /// Set or clear the selected post. The post is not checked against `posts`.
    pub fn select_post(&mut self, post: Option<Post>) {
        self.state.selected_post = post;
        self.persist();
    }

    /// Drop all state and the persisted slot.
    pub fn reset(&mut self) {
        self.state = PostState::default();
        if let Err(e) = self.storage.remove_item(STORAGE_KEY) {
            log::warn!("Failed to remove persisted posts: {}", e);
        }
    }

    /// Apply the pre-fetch half of an operation.
    ///
    /// Returns `None` when the operation needs no fetch (a `Load` with posts
    /// already cached).
    pub fn begin(&mut self, kind: FetchKind) -> Option<PendingFetch> {
        match kind {
            FetchKind::Load => {
                if !self.state.posts.is_empty() {
                    log::debug!("Load skipped, {} posts cached", self.state.posts.len());
                    return None;
                }
                self.state.is_loading = true;
                self.state.error = None;
                self.persist();
            }
            FetchKind::Invalidate => {
                if self.invalidate_mode == InvalidateMode::Replace {
                    self.state.is_loading = true;
                    self.persist();
                }
            }
        }

        log::debug!("Fetching posts ({:?})", kind);
        Some(PendingFetch {
            kind,
            source: Arc::clone(&self.source),
        })
    }

    /// Apply the post-fetch half of an operation.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        match (outcome.kind, outcome.result) {
            (FetchKind::Load, Ok(posts)) => {
                log::info!("Loaded {} posts", posts.len());
                self.replace_posts(posts);
                self.state.is_loading = false;
            }
            (FetchKind::Invalidate, Ok(posts)) => {
                self.state.error = None;
                match self.invalidate_mode {
                    InvalidateMode::Preserve if posts == self.state.posts => {
                        log::debug!("Refresh returned unchanged posts");
                    }
                    InvalidateMode::Preserve => {
                        log::info!("Refresh replaced posts ({} now)", posts.len());
                        self.replace_posts(posts);
                    }
                    InvalidateMode::Replace => {
                        log::info!("Refresh replaced posts ({} now)", posts.len());
                        self.replace_posts(posts);
                        self.state.is_loading = false;
                    }
                }
            }
            (kind, Err(message)) => {
                log::error!("Fetching posts failed ({:?}): {}", kind, message);
                self.state.error = Some(message);
                if kind == FetchKind::Load || self.invalidate_mode == InvalidateMode::Replace {
                    self.state.is_loading = false;
                }
            }
        }
        self.persist();
    }

    fn replace_posts(&mut self, posts: Vec<Post>) {
        self.state.posts = posts;
        self.state.last_updated = Some(timestamp_now());

        // Keep the selection pointing at the fresh copy, or drop it if gone.
        if let Some(id) = self.state.selected_post.as_ref().map(|p| p.id) {
            let fresh = self.state.posts.iter().find(|p| p.id == id).cloned();
            if fresh.is_none() {
                log::info!("Selected post {} no longer present, clearing", id);
            }
            self.state.selected_post = fresh;
        }
    }

    /// Write-through after a mutation. Failures are logged, never surfaced.
    fn persist(&self) {
        if let Err(e) = save(self.storage.as_ref(), &self.state) {
            log::warn!("Failed to persist posts: {}", e);
        }
    }
}

fn save(storage: &dyn DurableKeyValueStore, state: &PostState) -> Result<()> {
    let json = serde_json::to_string(state)?;
    storage.set_item(STORAGE_KEY, &json)
}

fn read_saved(storage: &dyn DurableKeyValueStore) -> Result<Option<PostState>> {
    match storage.get_item(STORAGE_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn rehydrate(storage: &dyn DurableKeyValueStore) -> PostState {
    match read_saved(storage) {
        Ok(Some(state)) => {
            log::info!("Rehydrated {} posts from storage", state.posts.len());
            state
        }
        Ok(None) => PostState::default(),
        Err(e) => {
            log::warn!("Ignoring unreadable persisted posts: {}", e);
            PostState::default()
        }
    }
}

fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
