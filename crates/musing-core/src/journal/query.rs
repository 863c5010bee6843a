//! Filtering and ordering of journal entries.

use serde::{Deserialize, Serialize};

use super::date::parse_date;
use super::model::JournalEntry;

/// Category filter for the entry list.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Only entries whose category name equals this exactly
    Named(String),
}

impl CategoryFilter {
    /// `"all"` means no filter; any other value filters by that name.
    pub fn from_name(name: &str) -> Self {
        if name == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    pub fn matches(&self, entry: &JournalEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => &entry.category == name,
        }
    }
}

/// Entries matching `filter`, newest first.
///
/// The sort is stable: entries with equal dates keep their input order.
/// Unparseable dates sort after every parseable one.
pub fn filter_sorted<'a>(entries: &'a [JournalEntry], filter: &CategoryFilter) -> Vec<&'a JournalEntry> {
    let mut keyed: Vec<_> = entries
        .iter()
        .filter(|e| filter.matches(e))
        .map(|e| (parse_date(&e.date), e))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// The newest entry matching `filter`, if any.
pub fn latest<'a>(entries: &'a [JournalEntry], filter: &CategoryFilter) -> Option<&'a JournalEntry> {
    filter_sorted(entries, filter).into_iter().next()
}
