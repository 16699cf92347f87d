// Test doubles shared across module tests.
// Fake post sources and sample data for store, context, and surface tests.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{Post, PostSource};
use crate::error::{PostboardError, Result};

/// Post source that replays queued responses and counts calls.
/// Once the queue is empty every call returns `fallback`, or fails when
/// there is none.
pub struct FakeSource {
    queue: Mutex<VecDeque<Result<Vec<Post>>>>,
    fallback: Option<Vec<Post>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn returning(posts: Vec<Post>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Some(posts),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push_ok(&self, posts: Vec<Post>) {
        self.queue.lock().unwrap().push_back(Ok(posts));
    }

    pub fn push_err(&self, err: PostboardError) {
        self.queue.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for FakeSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.queue.lock().unwrap().pop_front();
        next.unwrap_or_else(|| {
            self.fallback
                .clone()
                .ok_or_else(connection_reset)
        })
    }
}

/// Transport-style failure, as a dropped connection would produce.
pub fn connection_reset() -> PostboardError {
    PostboardError::Io(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(1, "First post", "Hello from the first post"),
        Post::new(2, "Second post", "Another body"),
        Post::new(3, "Third post", "Yet another body"),
    ]
}
