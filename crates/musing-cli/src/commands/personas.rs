use std::sync::Arc;

use anyhow::Result;
use musing_application::MemoryStore;
use musing_core::config::MusingConfig;
use musing_core::view::PersonaSettingsView;
use musing_infrastructure::FsImageReader;

use crate::dialogs::TerminalDialogs;

/// Prints one line per default persona.
pub async fn list(config: &MusingConfig, dialogs: TerminalDialogs) -> Result<()> {
    let store = MemoryStore::new();
    let view = PersonaSettingsView::new(
        Arc::new(store.clone()),
        Arc::new(dialogs),
        Arc::new(FsImageReader),
        config.persona.clone(),
    );

    let personas = store.personas().await;
    let settings = store.settings().await;
    for card in view.cards(&personas, &settings) {
        let badge = card
            .badge
            .map(|b| b.label())
            .unwrap_or_else(|| "no connection".to_string());
        println!("{} {} ({}) [{}]", card.emoji, card.name, card.role, badge);
        println!("    {}", card.personality_excerpt);
    }
    Ok(())
}
