use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use musing_application::MemoryStore;
use musing_core::config::MusingConfig;
use musing_core::persona::Persona;
use musing_core::view::{AvatarUpload, PersonaSettingsView};
use musing_infrastructure::{FsImageReader, image_file_from_path};

use crate::dialogs::TerminalDialogs;

/// Runs a file through the avatar upload checks and prints the result.
pub async fn check(config: &MusingConfig, dialogs: TerminalDialogs, path: &Path) -> Result<()> {
    let file = image_file_from_path(path).await?;

    let mut view = PersonaSettingsView::new(
        Arc::new(MemoryStore::new()),
        Arc::new(dialogs),
        Arc::new(FsImageReader),
        config.persona.clone(),
    );
    view.open_editor(&Persona::placeholder());

    match view.start_avatar_upload(&file).await {
        AvatarUpload::Started(handle) => handle.await?,
        AvatarUpload::Rejected(reason) => bail!(reason),
    }

    if view.apply_avatar_uploads() == 0 {
        bail!("Failed to read {}", path.display());
    }
    let avatar = view
        .draft()
        .and_then(|d| d.avatar.as_deref())
        .unwrap_or_default();
    println!(
        "{}: {} ({} bytes) -> data URL of {} chars",
        path.display(),
        file.mime_type,
        file.size_bytes,
        avatar.len()
    );
    Ok(())
}
