//! Changelog document model
//!
//! The document holds the unreleased staging area plus the ordered release
//! history. Mutations are append-only and infallible; history order is
//! creation order and is never re-sorted.

use serde::{Deserialize, Serialize};

use super::changeset::{Category, ChangeSet};

/// A named, optionally yanked entry in the release history
///
/// Releases are immutable once cut, except for the yanked flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Changes shipped in this release
    #[serde(flatten)]
    pub changes: ChangeSet,

    /// Whether the release was withdrawn after publication
    #[serde(default)]
    pub yanked: bool,

    /// Release identifier, typically a semantic version
    pub name: String,
}

impl Release {
    /// Returns the section heading for this release
    pub fn heading(&self) -> String {
        if self.yanked {
            format!("{} [YANKED]", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// The changelog document: unreleased staging area plus release history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Changelog {
    /// Changes not yet assigned to a release
    pub unreleased: ChangeSet,

    /// Past releases, oldest first
    pub past: Vec<Release>,
}

impl Changelog {
    /// Creates an empty changelog
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a change description to the unreleased staging area
    pub fn record(&mut self, category: Category, text: impl Into<String>) {
        self.unreleased.record(category, text);
    }

    /// Moves the unreleased changes into a new release at the end of history
    ///
    /// Names are not checked for uniqueness; cutting two releases with the
    /// same name yields two history entries.
    pub fn cut_release(&mut self, name: impl Into<String>) {
        let changes = std::mem::take(&mut self.unreleased);
        self.past.push(Release {
            changes,
            yanked: false,
            name: name.into(),
        });
    }

    /// Sets the yanked flag on the most recently cut release with the given
    /// name
    ///
    /// Returns false when no release matches, leaving the document unchanged.
    pub fn set_yanked(&mut self, name: &str, yanked: bool) -> bool {
        match self.past.iter_mut().rev().find(|r| r.name == name) {
            Some(release) => {
                release.yanked = yanked;
                true
            }
            None => false,
        }
    }
}
