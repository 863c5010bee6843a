//! Journal domain model.
//!
//! Entries reference categories by name and comments reference personas by
//! ID. Neither reference is enforced: a category may be renamed or a persona
//! deleted while entries and comments pointing at them live on.

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Fallback author shown when a comment's persona no longer resolves and the
/// comment carries no snapshot of its own.
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown";
pub const UNKNOWN_AUTHOR_EMOJI: &str = "❔";

/// A journal category. Entries refer to it by `name`, not `id`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalCategory {
    pub id: String,
    pub name: String,
}

/// Denormalized author fields stored on a comment.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorSnapshot {
    pub name: String,
    pub emoji: String,
}

/// Who wrote a comment.
///
/// `Persona` is a live reference resolved against the current persona list;
/// it may carry a snapshot to use once the persona has been deleted.
/// `Snapshot` is used for authors that never had a live persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommentAuthor {
    Persona {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snapshot: Option<AuthorSnapshot>,
    },
    Snapshot {
        name: String,
        emoji: String,
    },
}

/// A comment author resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuthor {
    pub name: String,
    pub emoji: String,
    /// Avatar of the live persona, if any
    pub avatar: Option<String>,
    /// Accent color of the live persona, if any
    pub color: Option<String>,
    /// True when the author resolved to a persona in the current list
    pub live: bool,
}

impl ResolvedAuthor {
    fn from_persona(persona: &Persona) -> Self {
        Self {
            name: persona.name.clone(),
            emoji: persona.emoji.clone(),
            avatar: persona.avatar.clone(),
            color: Some(persona.color.clone()),
            live: true,
        }
    }

    fn from_snapshot(name: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            avatar: None,
            color: None,
            live: false,
        }
    }
}

impl CommentAuthor {
    /// Live reference to a persona, snapshotting its current name and emoji.
    pub fn persona(persona: &Persona) -> Self {
        Self::Persona {
            id: persona.id.clone(),
            snapshot: Some(AuthorSnapshot {
                name: persona.name.clone(),
                emoji: persona.emoji.clone(),
            }),
        }
    }

    /// Resolves the author against the current persona list.
    pub fn resolve(&self, personas: &[Persona]) -> ResolvedAuthor {
        match self {
            CommentAuthor::Persona { id, snapshot } => {
                if let Some(persona) = personas.iter().find(|p| &p.id == id) {
                    return ResolvedAuthor::from_persona(persona);
                }
                match snapshot {
                    Some(s) => ResolvedAuthor::from_snapshot(&s.name, &s.emoji),
                    None => ResolvedAuthor::from_snapshot(UNKNOWN_AUTHOR_NAME, UNKNOWN_AUTHOR_EMOJI),
                }
            }
            CommentAuthor::Snapshot { name, emoji } => ResolvedAuthor::from_snapshot(name, emoji),
        }
    }
}

/// A comment on a journal entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    /// Creation time as stored (RFC 3339 expected, not guaranteed)
    pub timestamp: String,
    pub author: CommentAuthor,
    pub content: String,
}

/// A comment to be added; the store assigns `id` and `timestamp`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: CommentAuthor,
    pub content: String,
}

/// A journal entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Category name; may not match any existing category
    pub category: String,
    /// Creation date as stored (RFC 3339 or `YYYY-MM-DD`); may be unparseable
    pub date: String,
    /// Comments in insertion order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Partial update applied to an existing entry.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntryUpdate {
    /// Applies the set fields to `entry`.
    pub fn apply_to(&self, entry: &mut JournalEntry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(content) = &self.content {
            entry.content = content.clone();
        }
        if let Some(category) = &self.category {
            entry.category = category.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::get_default_presets;

    #[test]
    fn test_live_author_resolves_to_current_persona() {
        let mut personas = get_default_presets();
        let author = CommentAuthor::persona(&personas[0]);
        personas[0].name = "Renamed".to_string();

        let resolved = author.resolve(&personas);
        assert_eq!(resolved.name, "Renamed");
        assert!(resolved.live);
    }

    #[test]
    fn test_deleted_persona_falls_back_to_snapshot() {
        let personas = get_default_presets();
        let author = CommentAuthor::persona(&personas[1]);

        let resolved = author.resolve(&[]);
        assert_eq!(resolved.name, personas[1].name);
        assert_eq!(resolved.emoji, personas[1].emoji);
        assert!(!resolved.live);
    }

    #[test]
    fn test_dangling_reference_without_snapshot_is_unknown() {
        let author = CommentAuthor::Persona {
            id: "gone".to_string(),
            snapshot: None,
        };
        let resolved = author.resolve(&get_default_presets());
        assert_eq!(resolved.name, UNKNOWN_AUTHOR_NAME);
    }

    #[test]
    fn test_author_serializes_with_kind_tag() {
        let author = CommentAuthor::Snapshot {
            name: "Guest".to_string(),
            emoji: "👤".to_string(),
        };
        let value = serde_json::to_value(&author).unwrap();
        assert_eq!(value["kind"], "snapshot");
        assert_eq!(value["name"], "Guest");
    }

    #[test]
    fn test_entry_update_only_touches_set_fields() {
        let mut entry = JournalEntry {
            id: "1".to_string(),
            title: "Old".to_string(),
            content: "Body".to_string(),
            category: "A".to_string(),
            date: "2024-01-01".to_string(),
            comments: Vec::new(),
        };
        EntryUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        }
        .apply_to(&mut entry);

        assert_eq!(entry.title, "New");
        assert_eq!(entry.content, "Body");
        assert_eq!(entry.category, "A");
    }
}
