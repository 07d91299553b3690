//! Main CLI application structure

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::domain::Category;
use crate::render;
use crate::storage::ChangelogStore;

#[derive(Parser)]
#[command(name = "changelog")]
#[command(author, version, about = "Local-first changelog management")]
pub struct Cli {
    /// Action to perform: add, remove, change, fix, other, release, yank, unyank, write
    pub action: String,

    /// Change text, release name, or output path, depending on the action
    pub what: String,

    /// Path to the changelog document
    #[arg(
        long,
        short = 'p',
        env = "CHANGELOG_PATH",
        default_value = "changelog.json"
    )]
    pub path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let store = ChangelogStore::new(&cli.path);
    output.verbose(&format!("Loading changelog from {}", cli.path.display()));
    let mut changelog = store.load_or_create()?;

    match cli.action.as_str() {
        "release" => {
            changelog.cut_release(cli.what.as_str());
            output.success(&format!("Cut release {}", cli.what));
        }

        "yank" => {
            if changelog.set_yanked(&cli.what, true) {
                output.success(&format!("Yanked release {}", cli.what));
            } else {
                output.error(&format!("No release named {}", cli.what));
            }
        }

        "unyank" => {
            if changelog.set_yanked(&cli.what, false) {
                output.success(&format!("Unyanked release {}", cli.what));
            } else {
                output.error(&format!("No release named {}", cli.what));
            }
        }

        "write" => {
            let text = render::render(&changelog);
            fs::write(&cli.what, text)
                .with_context(|| format!("Failed to write changelog to {}", cli.what))?;
            output.success(&format!("Wrote changelog to {}", cli.what));
        }

        action => match action.parse::<Category>() {
            Ok(category) => {
                changelog.record(category, cli.what.as_str());
                output.success(&format!("Recorded {} change", action));
            }
            // Not fatal: the document is saved back unchanged below.
            Err(()) => output.error(&format!("Unknown action: {}", action)),
        },
    }

    output.verbose(&format!("Saving changelog to {}", cli.path.display()));
    store.save(&changelog)?;

    Ok(())
}
