//! Storage layer for the changelog document
//!
//! The document persists as a single pretty-printed JSON file (default
//! `changelog.json`). All five category lists are written even when empty,
//! so a reloaded document always satisfies the model's shape.
//!
//! Writes go to a temp file and are renamed into place. Concurrent writers
//! are not coordinated; the last writer wins.

mod store;

pub use store::{ChangelogStore, StoreError};
