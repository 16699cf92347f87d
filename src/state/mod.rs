// Display surface state.
// Cursor over the posts list and the periodic refresh timer.

pub mod cursor;
pub mod timer;

pub use cursor::PostCursor;
pub use timer::{DEFAULT_REFRESH_INTERVAL, RefreshTimer};
