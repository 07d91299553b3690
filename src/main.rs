//! Changelog CLI - local-first changelog management

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = changelog_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
