//! JSON storage for the changelog document

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::Changelog;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but does not match the document layout
    #[error("Malformed changelog document at {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Store for the changelog document as a JSON file
pub struct ChangelogStore {
    path: PathBuf,
}

impl ChangelogStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, or returns an empty one if the file does not exist
    pub fn load_or_create(&self) -> Result<Changelog> {
        if !self.path.exists() {
            return Ok(Changelog::new());
        }

        self.load()
    }

    /// Loads the document from disk
    ///
    /// A file that cannot be read or parsed is fatal; no default document is
    /// substituted and nothing is written back.
    pub fn load(&self) -> Result<Changelog> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read changelog: {}", self.path.display()))?;

        let changelog = serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        Ok(changelog)
    }

    /// Writes the document to disk (full rewrite)
    pub fn save(&self, changelog: &Changelog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let data =
            serde_json::to_string_pretty(changelog).context("Failed to serialize changelog")?;

        // Write to temp file first, then rename into place
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, data)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
