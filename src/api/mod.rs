// Posts API module.
// HTTP client for the remote posts endpoint and the source abstraction the store fetches through.

pub mod client;
pub mod endpoints;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::{DEFAULT_BASE_URL, PostsClient};
pub use types::Post;

/// Anything that can produce the full post collection.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}
