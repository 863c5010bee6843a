//! Collaborator interfaces the views delegate to.
//!
//! The views never mutate the lists they are given. Every change is sent to
//! the state owner through these traits: persona and settings changes as a
//! whole replacement value, journal changes as targeted calls. Persistence,
//! ordering and concurrent-writer arbitration are the owner's business.

use std::path::Path;

use crate::error::Result;
use crate::journal::{EntryUpdate, NewComment};
use crate::persona::Persona;
use crate::settings::AppSettings;

/// State owner for personas, settings and the data-management actions.
#[async_trait::async_trait]
pub trait PersonaStore: Send + Sync {
    /// Replaces the full persona list.
    async fn replace_personas(&self, personas: Vec<Persona>) -> Result<()>;

    /// Replaces the full settings value.
    async fn replace_settings(&self, settings: AppSettings) -> Result<()>;

    /// Exports all user data.
    async fn export_data(&self) -> Result<()>;

    /// Clears activity (comments and pending reactions).
    async fn clear_activity(&self) -> Result<()>;

    /// Clears all data.
    ///
    /// Callers invoke this without any confirmation of their own; the
    /// implementation (or whoever wires it to a control) is responsible for
    /// asking the user first.
    async fn clear_all_data(&self) -> Result<()>;
}

/// State owner for journal entries, categories and comments.
#[async_trait::async_trait]
pub trait JournalStore: Send + Sync {
    /// Creates an entry; the store assigns its ID and date.
    async fn add_entry(&self, title: String, content: String, category: String) -> Result<()>;

    /// Applies a partial update to the entry with `id`.
    async fn update_entry(&self, id: &str, update: EntryUpdate) -> Result<()>;

    async fn delete_entry(&self, id: &str) -> Result<()>;

    async fn add_category(&self, name: String) -> Result<()>;

    /// Appends a comment to the entry; the store assigns ID and timestamp.
    async fn add_comment(&self, entry_id: &str, comment: NewComment) -> Result<()>;

    /// Asks for an AI reaction. The result arrives later as a new comment
    /// through the store's own update path.
    async fn request_ai_comment(&self, entry_id: &str) -> Result<()>;
}

/// User-facing dialogs.
#[async_trait::async_trait]
pub trait Dialogs: Send + Sync {
    /// Asks a yes/no question. `true` means the user confirmed.
    async fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user must acknowledge.
    async fn alert(&self, message: &str);
}

/// Reads a local image into an embeddable `data:` URL.
#[async_trait::async_trait]
pub trait ImageReader: Send + Sync {
    async fn read_data_url(&self, path: &Path) -> Result<String>;
}
