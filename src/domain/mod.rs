//! Domain models for the changelog CLI
//!
//! Contains the core document model without any I/O concerns.

mod changelog;
mod changeset;

pub use changelog::{Changelog, Release};
pub use changeset::{Category, ChangeSet};
