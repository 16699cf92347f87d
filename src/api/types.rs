// Posts API response types.
// Defines the post value deserialized from the remote endpoint.

use serde::{Deserialize, Serialize};

/// A post as returned by the `/posts` endpoint.
///
/// Fields beyond `id`, `title` and `body` (such as `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
