// Markshelf state managers
// Managers own mutable state: the bookmark collection and per-card image fallback cursors.

pub mod bookmark_manager;
pub mod image_cursor;
pub mod seed;
