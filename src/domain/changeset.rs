//! Change categories and the per-section change list
//!
//! Every change set carries all five category lists, even when empty. This
//! keeps rendering and serialization free of presence checks.

use serde::{Deserialize, Serialize};

/// Category of a recorded change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Added,
    Removed,
    Changed,
    Fixed,
    Other,
}

impl Category {
    /// All categories, in rendering order
    pub const ALL: [Category; 5] = [
        Category::Added,
        Category::Removed,
        Category::Changed,
        Category::Fixed,
        Category::Other,
    ];

    /// Returns the sub-heading title used when rendering this category
    pub fn section_title(&self) -> &'static str {
        match self {
            Category::Added => "Additions",
            Category::Removed => "Removals",
            Category::Changed => "Changes",
            Category::Fixed => "Fixes",
            Category::Other => "Other",
        }
    }

    /// Returns the verb prefix for bullet lines in this category
    ///
    /// The Other category has no verb and renders its entries bare.
    pub fn verb(&self) -> &'static str {
        match self {
            Category::Added => "Added",
            Category::Removed => "Removed",
            Category::Changed => "Changed",
            Category::Fixed => "Fixed",
            Category::Other => "",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Category::Added),
            "remove" => Ok(Category::Removed),
            "change" => Ok(Category::Changed),
            "fix" => Ok(Category::Fixed),
            "other" => Ok(Category::Other),
            _ => Err(()),
        }
    }
}

/// The five ordered per-category lists of change descriptions
///
/// Entries keep their insertion order. Nothing is deduplicated or removed;
/// the empty string is a valid entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
    pub fixed: Vec<String>,
    pub other: Vec<String>,
}

impl ChangeSet {
    /// Creates an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a change description to the given category
    pub fn record(&mut self, category: Category, text: impl Into<String>) {
        self.entries_mut(category).push(text.into());
    }

    /// Returns the entries recorded under the given category
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Added => &self.added,
            Category::Removed => &self.removed,
            Category::Changed => &self.changed,
            Category::Fixed => &self.fixed,
            Category::Other => &self.other,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Added => &mut self.added,
            Category::Removed => &mut self.removed,
            Category::Changed => &mut self.changed,
            Category::Fixed => &mut self.fixed,
            Category::Other => &mut self.other,
        }
    }

    /// Returns true if every category list is empty
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_changeset_is_empty() {
        let changes = ChangeSet::new();
        assert!(changes.is_empty());
        for category in Category::ALL {
            assert!(changes.entries(category).is_empty());
        }
    }

    #[test]
    fn record_appends_in_order() {
        let mut changes = ChangeSet::new();
        changes.record(Category::Added, "first");
        changes.record(Category::Added, "second");

        assert_eq!(changes.added, vec!["first", "second"]);
        assert!(!changes.is_empty());
    }

    #[test]
    fn record_touches_only_its_category() {
        let mut changes = ChangeSet::new();
        changes.record(Category::Fixed, "a fix");

        assert_eq!(changes.fixed, vec!["a fix"]);
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert!(changes.changed.is_empty());
        assert!(changes.other.is_empty());
    }

    #[test]
    fn empty_string_is_a_valid_entry() {
        let mut changes = ChangeSet::new();
        changes.record(Category::Other, "");

        assert_eq!(changes.other, vec![""]);
        assert!(!changes.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut changes = ChangeSet::new();
        changes.record(Category::Changed, "same");
        changes.record(Category::Changed, "same");

        assert_eq!(changes.changed.len(), 2);
    }

    #[test]
    fn category_parses_action_tokens() {
        assert_eq!("add".parse::<Category>(), Ok(Category::Added));
        assert_eq!("remove".parse::<Category>(), Ok(Category::Removed));
        assert_eq!("change".parse::<Category>(), Ok(Category::Changed));
        assert_eq!("fix".parse::<Category>(), Ok(Category::Fixed));
        assert_eq!("other".parse::<Category>(), Ok(Category::Other));
        assert!("release".parse::<Category>().is_err());
        assert!("frobnicate".parse::<Category>().is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let changes: ChangeSet = serde_json::from_str("{}").unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn empty_lists_are_serialized() {
        let json = serde_json::to_string(&ChangeSet::new()).unwrap();
        for key in ["added", "removed", "changed", "fixed", "other"] {
            assert!(json.contains(&format!("\"{}\":[]", key)), "missing {}", key);
        }
    }
}
