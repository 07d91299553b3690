//! Changelog CLI - maintain a structured changelog and render it to markdown
//!
//! The changelog lives in a single JSON document holding an "unreleased"
//! staging area and an ordered release history. Each invocation loads the
//! document, applies at most one mutation (record a change, cut a release,
//! toggle a yanked flag) or renders it to markdown, and saves the result.

pub mod cli;
pub mod domain;
pub mod render;
pub mod storage;

pub use domain::{Category, ChangeSet, Changelog, Release};
