// Post store state.
// The persisted snapshot of posts and selection, plus session-only fetch status.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::api::Post;

/// Complete state held by the post store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostState {
    /// Posts in the order the source returned them.
    pub posts: Vec<Post>,
    /// True only while a loading fetch is in flight. Never persisted.
    #[serde(skip)]
    pub is_loading: bool,
    /// Description of the most recent fetch failure. Session-only, so a restart
    /// shows the cached posts instead of an old error.
    #[serde(skip)]
    pub error: Option<String>,
    /// The post the user picked, matched by id.
    pub selected_post: Option<Post>,
    /// Local wall-clock time of the last change to `posts`.
    pub last_updated: Option<String>,
}

impl PostState {
    pub fn is_selected(&self, post: &Post) -> bool {
        self.selected_post.as_ref().is_some_and(|p| p.id == post.id)
    }

    /// Index of the selected post within `posts`.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected_post.as_ref()?;
        self.posts.iter().position(|p| p.id == selected.id)
    }
}

/// What `invalidate` does with a freshly fetched collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InvalidateMode {
    /// Replace posts only when the fetched collection differs. Leaves the
    /// loading flag alone.
    #[default]
    Preserve,
    /// Show the loading view and always replace posts.
    Replace,
}
