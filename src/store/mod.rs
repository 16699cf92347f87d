// Post store module.
// Fetch-and-cache state container for the posts list and its application context.

pub mod context;
pub mod post_store;
pub mod state;

pub use context::StoreContext;
pub use post_store::PostStore;
pub use state::{InvalidateMode, PostState};
