//! Markdown changelog renderer
//!
//! Rendering is a pure function of the document: the same contents in the
//! same order always produce the same bytes. Sections with no changes emit
//! nothing, so an all-empty document renders to the empty string.

use crate::domain::{Category, ChangeSet, Changelog};

/// Renders the document as markdown
///
/// The unreleased section comes first, followed by past releases in the
/// order they were cut.
pub fn render(changelog: &Changelog) -> String {
    let mut out = String::new();

    write_changeset(&mut out, &changelog.unreleased, "Unreleased");
    for release in &changelog.past {
        write_changeset(&mut out, &release.changes, &release.heading());
    }

    out
}

/// Writes one `##` section for a change set, or nothing if it is empty
fn write_changeset(out: &mut String, changes: &ChangeSet, heading: &str) {
    if changes.is_empty() {
        return;
    }

    out.push_str("## ");
    out.push_str(heading);
    out.push_str("\n\n");

    for category in Category::ALL {
        write_category(out, changes.entries(category), category);
    }

    out.push('\n');
}

/// Writes one `###` sub-section for a category, or nothing if it is empty
fn write_category(out: &mut String, entries: &[String], category: Category) {
    if entries.is_empty() {
        return;
    }

    out.push_str("### ");
    out.push_str(category.section_title());
    out.push_str("\n\n");

    for entry in entries {
        out.push_str(" - ");
        out.push_str(category.verb());
        out.push(' ');
        out.push_str(entry);
        out.push('\n');
    }

    out.push('\n');
}
