//! In-memory state owner.
//!
//! Implements both collaborator traits over a single snapshot guarded by a
//! mutex. Every call applies atomically with respect to the others; nothing
//! is written to disk.

use std::sync::Arc;

use musing_core::error::{MusingError, Result};
use musing_core::journal::{Comment, EntryUpdate, JournalCategory, JournalEntry, NewComment};
use musing_core::persona::{Persona, get_default_presets};
use musing_core::port::{JournalStore, PersonaStore};
use musing_core::settings::AppSettings;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Category names a fresh store starts with.
pub const DEFAULT_CATEGORY_NAMES: [&str; 3] = ["General", "Work", "Personal"];

pub fn default_categories() -> Vec<JournalCategory> {
    DEFAULT_CATEGORY_NAMES
        .iter()
        .map(|name| JournalCategory {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Everything the store holds, as exported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub personas: Vec<Persona>,
    pub settings: AppSettings,
    pub categories: Vec<JournalCategory>,
    pub entries: Vec<JournalEntry>,
}

impl Default for MemorySnapshot {
    fn default() -> Self {
        Self {
            personas: get_default_presets(),
            settings: AppSettings::default(),
            categories: default_categories(),
            entries: Vec::new(),
        }
    }
}

#[derive(Default)]
struct Inner {
    snapshot: MemorySnapshot,
    /// Entry IDs waiting for an AI reaction, oldest first
    pending_reactions: Vec<String>,
    last_export: Option<String>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Creates a store with default personas and categories and no entries.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: MemorySnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                snapshot,
                ..Default::default()
            })),
        }
    }

    pub async fn snapshot(&self) -> MemorySnapshot {
        self.inner.lock().await.snapshot.clone()
    }

    pub async fn personas(&self) -> Vec<Persona> {
        self.inner.lock().await.snapshot.personas.clone()
    }

    pub async fn settings(&self) -> AppSettings {
        self.inner.lock().await.snapshot.settings.clone()
    }

    pub async fn entries(&self) -> Vec<JournalEntry> {
        self.inner.lock().await.snapshot.entries.clone()
    }

    pub async fn categories(&self) -> Vec<JournalCategory> {
        self.inner.lock().await.snapshot.categories.clone()
    }

    pub async fn pending_reactions(&self) -> Vec<String> {
        self.inner.lock().await.pending_reactions.clone()
    }

    /// Takes the oldest pending reaction request, if any.
    pub async fn take_pending_reaction(&self) -> Option<String> {
        let mut inner = self.inner.lock().await;
        if inner.pending_reactions.is_empty() {
            None
        } else {
            Some(inner.pending_reactions.remove(0))
        }
    }

    /// JSON produced by the most recent export.
    pub async fn last_export(&self) -> Option<String> {
        self.inner.lock().await.last_export.clone()
    }
}

fn find_entry<'a>(entries: &'a mut [JournalEntry], id: &str) -> Result<&'a mut JournalEntry> {
    entries
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| MusingError::not_found("journal entry", id))
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[async_trait::async_trait]
impl PersonaStore for MemoryStore {
    async fn replace_personas(&self, personas: Vec<Persona>) -> Result<()> {
        let mut inner = self.inner.lock().await;
        tracing::info!(
            "[MemoryStore] Replacing {} personas with {}",
            inner.snapshot.personas.len(),
            personas.len()
        );
        inner.snapshot.personas = personas;
        Ok(())
    }

    async fn replace_settings(&self, settings: AppSettings) -> Result<()> {
        self.inner.lock().await.snapshot.settings = settings;
        Ok(())
    }

    async fn export_data(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let json = serde_json::to_string_pretty(&inner.snapshot)?;
        tracing::info!("[MemoryStore] Exported {} bytes", json.len());
        inner.last_export = Some(json);
        Ok(())
    }

    async fn clear_activity(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        for entry in &mut inner.snapshot.entries {
            entry.comments.clear();
        }
        inner.pending_reactions.clear();
        tracing::info!("[MemoryStore] Cleared activity");
        Ok(())
    }

    async fn clear_all_data(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.snapshot = MemorySnapshot::default();
        inner.pending_reactions.clear();
        inner.last_export = None;
        tracing::info!("[MemoryStore] Cleared all data");
        Ok(())
    }
}

#[async_trait::async_trait]
impl JournalStore for MemoryStore {
    async fn add_entry(&self, title: String, content: String, category: String) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            category,
            date: now(),
            comments: Vec::new(),
        };
        tracing::info!("[MemoryStore] Added entry {}", entry.id);

        if inner.snapshot.settings.auto_reaction {
            inner.pending_reactions.push(entry.id.clone());
        }
        inner.snapshot.entries.push(entry);
        Ok(())
    }

    async fn update_entry(&self, id: &str, update: EntryUpdate) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let entry = find_entry(&mut inner.snapshot.entries, id)?;
        update.apply_to(entry);
        Ok(())
    }

    async fn delete_entry(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let before = inner.snapshot.entries.len();
        inner.snapshot.entries.retain(|e| e.id != id);
        if inner.snapshot.entries.len() == before {
            return Err(MusingError::not_found("journal entry", id));
        }
        inner.pending_reactions.retain(|pending| pending != id);
        Ok(())
    }

    async fn add_category(&self, name: String) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.snapshot.categories.iter().any(|c| c.name == name) {
            tracing::debug!("[MemoryStore] Category {} already exists", name);
            return Ok(());
        }
        inner.snapshot.categories.push(JournalCategory {
            id: Uuid::new_v4().to_string(),
            name,
        });
        Ok(())
    }

    async fn add_comment(&self, entry_id: &str, comment: NewComment) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let entry = find_entry(&mut inner.snapshot.entries, entry_id)?;
        entry.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            timestamp: now(),
            author: comment.author,
            content: comment.content,
        });
        Ok(())
    }

    async fn request_ai_comment(&self, entry_id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if !inner.snapshot.entries.iter().any(|e| e.id == entry_id) {
            return Err(MusingError::not_found("journal entry", entry_id));
        }
        if !inner.pending_reactions.iter().any(|id| id == entry_id) {
            inner.pending_reactions.push(entry_id.to_string());
        }
        Ok(())
    }
}
