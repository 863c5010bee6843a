//! Persona settings view state.
//!
//! Holds the persona editor (a draft copy of one persona) and the pending
//! avatar reads. Persona lists and settings are passed in on every call and
//! changes leave as whole-value replacements through [`PersonaStore`].

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::PersonaConfig;
use crate::error::{MusingError, Result};
use crate::persona::{Persona, get_default_presets};
use crate::port::{Dialogs, ImageReader, PersonaStore};
use crate::settings::{AiProvider, ApiConnection, AppSettings};

/// Shown when saving a persona without a connection.
pub const CONNECTION_REQUIRED_MESSAGE: &str =
    "Please select an API connection for this persona before saving.";

/// Shown when the chosen file is not an image.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please choose an image file.";

/// Number of personality characters shown on a card.
pub const PERSONALITY_EXCERPT_CHARS: usize = 60;

/// A local file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// MIME type as reported by the picker (e.g. `image/png`)
    pub mime_type: String,
}

/// Provider and model shown on a persona card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionBadge {
    pub provider: AiProvider,
    pub model_name: String,
}

impl ConnectionBadge {
    pub fn label(&self) -> String {
        format!("{} · {}", self.provider.label(), self.model_name)
    }
}

/// Display data for one persona in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaCard {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub avatar: Option<String>,
    pub role: String,
    pub color: String,
    pub personality_excerpt: String,
    pub badge: Option<ConnectionBadge>,
}

/// Result of [`PersonaSettingsView::save_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The list was replaced and the editor closed
    Saved,
    /// Validation failed; nothing changed and the editor stays open
    Rejected(String),
    /// No persona is being edited
    NotEditing,
}

/// Result of [`PersonaSettingsView::start_avatar_upload`].
#[derive(Debug)]
pub enum AvatarUpload {
    /// The read is running; its result is picked up by `apply_avatar_uploads`
    Started(JoinHandle<()>),
    /// The file was refused before reading
    Rejected(String),
}

struct EditSession {
    id: u64,
    draft: Persona,
}

struct AvatarRead {
    session: u64,
    result: Result<String>,
}

/// View state for persona management.
pub struct PersonaSettingsView {
    store: Arc<dyn PersonaStore>,
    dialogs: Arc<dyn Dialogs>,
    images: Arc<dyn ImageReader>,
    config: PersonaConfig,
    editing: Option<EditSession>,
    next_session: u64,
    upload_tx: mpsc::UnboundedSender<AvatarRead>,
    upload_rx: mpsc::UnboundedReceiver<AvatarRead>,
}

impl PersonaSettingsView {
    pub fn new(
        store: Arc<dyn PersonaStore>,
        dialogs: Arc<dyn Dialogs>,
        images: Arc<dyn ImageReader>,
        config: PersonaConfig,
    ) -> Self {
        let (upload_tx, upload_rx) = mpsc::unbounded_channel();
        Self {
            store,
            dialogs,
            images,
            config,
            editing: None,
            next_session: 0,
            upload_tx,
            upload_rx,
        }
    }

    // ============================================================================
    // List
    // ============================================================================

    /// Builds one card per persona, in list order.
    ///
    /// A badge appears only when the persona's connection ID matches a
    /// connection in `settings`.
    pub fn cards(&self, personas: &[Persona], settings: &AppSettings) -> Vec<PersonaCard> {
        personas
            .iter()
            .map(|p| PersonaCard {
                id: p.id.clone(),
                name: p.name.clone(),
                emoji: p.emoji.clone(),
                avatar: p.avatar.clone(),
                role: p.role.clone(),
                color: p.color.clone(),
                personality_excerpt: excerpt(&p.personality, PERSONALITY_EXCERPT_CHARS),
                badge: p
                    .connection()
                    .and_then(|id| settings.find_connection(id))
                    .map(|c| ConnectionBadge {
                        provider: c.provider,
                        model_name: c.model_name.clone(),
                    }),
            })
            .collect()
    }

    /// Connections a persona may be linked to.
    pub fn available_connections<'a>(&self, settings: &'a AppSettings) -> Vec<&'a ApiConnection> {
        settings
            .connections
            .iter()
            .filter(|c| self.config.supported_providers.contains(&c.provider))
            .collect()
    }

    /// Appends a placeholder persona and opens it in the editor.
    pub async fn add_persona(&mut self, personas: &[Persona]) -> Result<()> {
        let persona = Persona::placeholder();
        let mut updated = personas.to_vec();
        updated.push(persona.clone());
        self.store.replace_personas(updated).await?;

        tracing::info!("[PersonaSettings] Added persona {}", persona.id);
        self.open_editor(&persona);
        Ok(())
    }

    /// Removes a persona after confirmation. Returns whether it was removed.
    pub async fn delete_persona(&mut self, personas: &[Persona], id: &str) -> Result<bool> {
        let name = personas
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .ok_or_else(|| MusingError::not_found("persona", id))?;

        let message = format!("Delete persona \"{}\"?", name);
        if !self.dialogs.confirm(&message).await {
            return Ok(false);
        }

        let updated: Vec<Persona> = personas.iter().filter(|p| p.id != id).cloned().collect();
        self.store.replace_personas(updated).await?;

        if self.editing.as_ref().is_some_and(|s| s.draft.id == id) {
            self.editing = None;
        }
        tracing::info!("[PersonaSettings] Deleted persona {}", id);
        Ok(true)
    }

    /// Replaces every persona with the default set after confirmation.
    pub async fn reset_to_defaults(&mut self) -> Result<bool> {
        let message = "Reset all personas to the defaults? Customizations and connections will be lost.";
        if !self.dialogs.confirm(message).await {
            return Ok(false);
        }

        self.store.replace_personas(get_default_presets()).await?;
        self.editing = None;
        tracing::info!("[PersonaSettings] Reset personas to defaults");
        Ok(true)
    }

    // ============================================================================
    // Editor
    // ============================================================================

    /// Opens the editor on a copy of `persona`, discarding any open draft.
    pub fn open_editor(&mut self, persona: &Persona) {
        self.next_session += 1;
        self.editing = Some(EditSession {
            id: self.next_session,
            draft: persona.clone(),
        });
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> Option<&Persona> {
        self.editing.as_ref().map(|s| &s.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Persona> {
        self.editing.as_mut().map(|s| &mut s.draft)
    }

    /// Points the draft at a connection offered by `available_connections`.
    ///
    /// Returns `false` (leaving the draft untouched) for unknown or
    /// unsupported connections.
    pub fn select_connection(&mut self, settings: &AppSettings, connection_id: &str) -> bool {
        let supported = self
            .available_connections(settings)
            .iter()
            .any(|c| c.id == connection_id);
        match self.draft_mut() {
            Some(draft) if supported => {
                draft.connection_id = Some(connection_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Closes the editor without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates the draft and writes it back into the list by ID.
    pub async fn save_draft(&mut self, personas: &[Persona]) -> Result<SaveOutcome> {
        let Some(session) = self.editing.as_ref() else {
            return Ok(SaveOutcome::NotEditing);
        };

        if session.draft.connection().is_none() {
            tracing::warn!(
                "[PersonaSettings] Rejected save of {}: no connection selected",
                session.draft.id
            );
            self.dialogs.alert(CONNECTION_REQUIRED_MESSAGE).await;
            return Ok(SaveOutcome::Rejected(CONNECTION_REQUIRED_MESSAGE.to_string()));
        }

        let draft = &session.draft;
        if !personas.iter().any(|p| p.id == draft.id) {
            tracing::warn!(
                "[PersonaSettings] Draft {} no longer in persona list; nothing to replace",
                draft.id
            );
        }
        let updated: Vec<Persona> = personas
            .iter()
            .map(|p| if p.id == draft.id { draft.clone() } else { p.clone() })
            .collect();
        self.store.replace_personas(updated).await?;

        tracing::info!("[PersonaSettings] Saved persona {}", draft.id);
        self.editing = None;
        Ok(SaveOutcome::Saved)
    }

    // ============================================================================
    // Avatar upload
    // ============================================================================

    /// Starts reading `file` into the draft's avatar.
    ///
    /// Non-images and files over the configured size are refused with an
    /// alert. Accepted files are read on a spawned task; the result is only
    /// applied if the same edit session is still open when
    /// [`apply_avatar_uploads`](Self::apply_avatar_uploads) runs.
    pub async fn start_avatar_upload(&mut self, file: &ImageFile) -> AvatarUpload {
        let Some(session) = self.editing.as_ref().map(|s| s.id) else {
            tracing::warn!("[PersonaSettings] Avatar upload ignored: editor is closed");
            return AvatarUpload::Rejected("No persona is being edited".to_string());
        };

        if !file.mime_type.starts_with("image/") {
            self.dialogs.alert(NOT_AN_IMAGE_MESSAGE).await;
            return AvatarUpload::Rejected(NOT_AN_IMAGE_MESSAGE.to_string());
        }

        if file.size_bytes > self.config.max_avatar_bytes {
            let message = avatar_too_large_message(self.config.max_avatar_bytes);
            tracing::warn!(
                "[PersonaSettings] Avatar {:?} rejected: {} bytes",
                file.path,
                file.size_bytes
            );
            self.dialogs.alert(&message).await;
            return AvatarUpload::Rejected(message);
        }

        let images = Arc::clone(&self.images);
        let tx = self.upload_tx.clone();
        let path = file.path.clone();
        let handle = tokio::spawn(async move {
            let result = images.read_data_url(&path).await;
            // The receiver lives as long as the view; a send error means the
            // view is gone and the result has nowhere to go.
            let _ = tx.send(AvatarRead { session, result });
        });
        AvatarUpload::Started(handle)
    }

    /// Applies finished avatar reads to the open draft.
    ///
    /// Returns how many were applied. Reads from an earlier edit session and
    /// failed reads are dropped.
    pub fn apply_avatar_uploads(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(read) = self.upload_rx.try_recv() {
            let Some(session) = self.editing.as_mut().filter(|s| s.id == read.session) else {
                tracing::debug!("[PersonaSettings] Dropping avatar from closed session {}", read.session);
                continue;
            };
            match read.result {
                Ok(data_url) => {
                    session.draft.avatar = Some(data_url);
                    applied += 1;
                }
                Err(e) => tracing::warn!("[PersonaSettings] Avatar read failed: {}", e),
            }
        }
        applied
    }

    // ============================================================================
    // Settings and data management
    // ============================================================================

    pub async fn set_auto_reaction(&self, settings: &AppSettings, enabled: bool) -> Result<()> {
        let updated = AppSettings {
            auto_reaction: enabled,
            ..settings.clone()
        };
        self.store.replace_settings(updated).await
    }

    pub async fn set_multi_persona_reaction(&self, settings: &AppSettings, enabled: bool) -> Result<()> {
        let updated = AppSettings {
            multi_persona_reaction: enabled,
            ..settings.clone()
        };
        self.store.replace_settings(updated).await
    }

    pub async fn export_data(&self) -> Result<()> {
        self.store.export_data().await
    }

    pub async fn clear_activity(&self) -> Result<()> {
        self.store.clear_activity().await
    }

    /// Forwards to [`PersonaStore::clear_all_data`] without confirming here.
    pub async fn clear_all_data(&self) -> Result<()> {
        self.store.clear_all_data().await
    }
}

fn avatar_too_large_message(limit: u64) -> String {
    format!("Image is too large. Please choose a file under {}.", format_size(limit))
}

/// Human-readable size: whole or one-decimal MB, then KB, then bytes.
fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        if bytes % MIB == 0 {
            format!("{}MB", bytes / MIB)
        } else {
            format!("{:.1}MB", bytes as f64 / MIB as f64)
        }
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
