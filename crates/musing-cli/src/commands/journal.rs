use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use musing_application::{MemorySnapshot, MemoryStore, default_categories};
use musing_core::config::MusingConfig;
use musing_core::journal::{CategoryFilter, JournalCategory, JournalEntry, format_date};
use musing_core::view::JournalView;
use musing_core::view::journal::AWAITING_REACTION_MESSAGE;
use serde::Deserialize;

use crate::dialogs::TerminalDialogs;

/// Seed file layout accepted by `musing journal --seed`.
#[derive(Debug, Deserialize)]
struct Seed {
    #[serde(default)]
    entries: Vec<JournalEntry>,
    #[serde(default)]
    categories: Vec<JournalCategory>,
}

fn parse_seed(content: &str) -> Result<MemorySnapshot> {
    let seed: Seed = serde_json::from_str(content).context("Invalid seed file")?;
    let categories = if seed.categories.is_empty() {
        default_categories()
    } else {
        seed.categories
    };
    Ok(MemorySnapshot {
        categories,
        entries: seed.entries,
        ..Default::default()
    })
}

/// Prints the visible entries and the reconciled selection.
pub async fn show(
    config: &MusingConfig,
    dialogs: TerminalDialogs,
    seed: &Path,
    category: &str,
    limit: Option<usize>,
) -> Result<()> {
    let content = tokio::fs::read_to_string(seed)
        .await
        .with_context(|| format!("Failed to read {}", seed.display()))?;
    let store = MemoryStore::with_snapshot(parse_seed(&content)?);

    let mut view = JournalView::new(
        Arc::new(store.clone()),
        Arc::new(dialogs),
        config.journal.clone(),
    );
    if let Some(limit) = limit {
        view.set_visible_count(limit)?;
    }

    let entries = store.entries().await;
    view.set_filter(CategoryFilter::from_name(category), &entries);

    let visible = view.visible_entries(&entries);
    if visible.is_empty() {
        println!("No entries.");
        return Ok(());
    }
    for entry in &visible {
        let marker = if view.selected_id() == Some(entry.id.as_str()) { '>' } else { ' ' };
        println!(
            "{} {}  [{}] {}",
            marker,
            format_date(&entry.date),
            entry.category,
            entry.title
        );
    }
    if view.has_more(&entries) {
        println!("  … more entries hidden (limit {})", view.visible_count());
    }

    let personas = store.personas().await;
    if let Some(detail) = view.detail(&entries, &personas) {
        println!();
        println!("[{}] {}  {}", detail.category, detail.title, detail.date_label);
        println!("{}", detail.content);
        if detail.awaiting_reaction {
            println!("  {}", AWAITING_REACTION_MESSAGE);
        }
        for comment in detail.comments {
            println!(
                "  {} {} ({}): {}",
                comment.author.emoji, comment.author.name, comment.timestamp_label, comment.content
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_defaults_categories() {
        let snapshot = parse_seed(
            r#"{"entries": [{"id": "1", "title": "T", "content": "C", "category": "A", "date": "2024-01-01"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.categories.len(), 3);
        assert_eq!(snapshot.personas.len(), 3);
    }

    #[test]
    fn test_parse_seed_rejects_garbage() {
        assert!(parse_seed("not json").is_err());
    }
}
