//! # Command-Line Interface
//!
//! The binary takes exactly two positional arguments: an action token and a
//! free-text argument whose meaning depends on the action.
//!
//! | Action | Argument | Effect |
//! |--------|----------|--------|
//! | `add` / `remove` / `change` / `fix` / `other` | change text | record a change in the unreleased area |
//! | `release` | release name | cut a release from the unreleased changes |
//! | `yank` / `unyank` | release name | toggle a release's yanked flag |
//! | `write` | output path | render the changelog to markdown |
//!
//! An unknown action prints a diagnostic, leaves the document unchanged, and
//! still rewrites the file; missing arguments exit non-zero with usage before
//! the document is touched.
//!
//! The document path comes from `--path` (or `CHANGELOG_PATH`), defaulting to
//! `changelog.json` in the working directory. All commands support `--format
//! text|json` and `--verbose`.

mod app;
mod output;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
