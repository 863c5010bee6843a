use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use musing_application::MemoryStore;
use musing_core::config::MusingConfig;
use musing_core::journal::{CategoryFilter, CommentAuthor, NewComment};
use musing_core::persona::get_default_presets;
use musing_core::port::{Dialogs, PersonaStore};
use musing_core::settings::{AiProvider, ApiConnection, AppSettings};
use musing_core::view::{AvatarUpload, JournalView, PersonaSettingsView, SaveOutcome};
use musing_infrastructure::{FsImageReader, image_file_from_path};
use tempfile::TempDir;

/// Dialogs whose confirmation answer can be flipped mid-test.
struct ToggleDialogs {
    answer: AtomicBool,
}

impl ToggleDialogs {
    fn new(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
        }
    }

    fn set(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Dialogs for ToggleDialogs {
    async fn confirm(&self, _message: &str) -> bool {
        self.answer.load(Ordering::SeqCst)
    }

    async fn alert(&self, _message: &str) {}
}

fn journal_view(store: &MemoryStore, dialogs: Arc<ToggleDialogs>) -> JournalView {
    JournalView::new(
        Arc::new(store.clone()),
        dialogs,
        MusingConfig::default().journal,
    )
}

fn persona_view(store: &MemoryStore, dialogs: Arc<ToggleDialogs>) -> PersonaSettingsView {
    PersonaSettingsView::new(
        Arc::new(store.clone()),
        dialogs,
        Arc::new(FsImageReader),
        MusingConfig::default().persona,
    )
}

#[tokio::test]
async fn test_write_select_and_delete_entries() {
    let store = MemoryStore::new();
    let dialogs = Arc::new(ToggleDialogs::new(false));
    let mut view = journal_view(&store, dialogs.clone());

    view.begin_create(&store.categories().await);
    view.set_title("Morning");
    view.set_content("Coffee and a walk.");
    assert!(view.save_draft().await.unwrap());

    view.begin_create(&store.categories().await);
    view.set_category("Work");
    view.set_title("Review");
    view.set_content("Shipped the release.");
    assert!(view.save_draft().await.unwrap());

    let entries = store.entries().await;
    assert_eq!(entries.len(), 2);

    view.set_filter(CategoryFilter::from_name("General"), &entries);
    let selected = view.selected_entry(&entries).unwrap();
    assert_eq!(selected.title, "Morning");

    // Declined delete keeps everything
    assert!(!view.delete_selected(&entries).await.unwrap());
    assert_eq!(store.entries().await.len(), 2);
    assert_eq!(view.selected_id(), Some(selected.id.as_str()));

    dialogs.set(true);
    assert!(view.delete_selected(&entries).await.unwrap());
    let entries = store.entries().await;
    assert_eq!(entries.len(), 1);

    view.reconcile(&entries);
    assert_eq!(view.selected_id(), None);

    view.set_filter(CategoryFilter::All, &entries);
    assert_eq!(view.selected_entry(&entries).unwrap().title, "Review");
}

#[tokio::test]
async fn test_comments_survive_persona_deletion_via_snapshot() {
    let store = MemoryStore::new();
    let dialogs = Arc::new(ToggleDialogs::new(true));
    let mut journal = journal_view(&store, dialogs.clone());
    let mut personas_view = persona_view(&store, dialogs);

    journal.begin_create(&[]);
    journal.set_title("Rainy day");
    journal.set_content("Stayed in and read.");
    journal.save_draft().await.unwrap();

    let entries = store.entries().await;
    journal.reconcile(&entries);

    let hana = get_default_presets()[0].clone();
    let comment = NewComment {
        author: CommentAuthor::persona(&hana),
        content: "Sounds cozy.".to_string(),
    };
    assert!(journal.add_comment(&entries, comment).await.unwrap());

    let personas = store.personas().await;
    assert!(personas_view.delete_persona(&personas, &hana.id).await.unwrap());

    let entries = store.entries().await;
    let detail = journal.detail(&entries, &store.personas().await).unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].author.name, "Hana");
    assert!(!detail.comments[0].author.live);
}

#[tokio::test]
async fn test_persona_edit_requires_connection_then_saves() {
    let store = MemoryStore::new();
    store
        .replace_settings(AppSettings {
            connections: vec![ApiConnection {
                id: "gem".to_string(),
                name: "Gemini".to_string(),
                provider: AiProvider::Gemini,
                model_name: "gemini-2.5-flash".to_string(),
            }],
            ..Default::default()
        })
        .await
        .unwrap();
    let dialogs = Arc::new(ToggleDialogs::new(true));
    let mut view = persona_view(&store, dialogs);

    view.add_persona(&store.personas().await).await.unwrap();
    assert_eq!(store.personas().await.len(), 4);

    let personas = store.personas().await;
    assert!(matches!(
        view.save_draft(&personas).await.unwrap(),
        SaveOutcome::Rejected(_)
    ));
    assert_eq!(store.personas().await, personas);

    let settings = store.settings().await;
    assert!(view.select_connection(&settings, "gem"));
    assert_eq!(view.save_draft(&personas).await.unwrap(), SaveOutcome::Saved);

    let cards = view.cards(&store.personas().await, &settings);
    let badge = cards[3].badge.as_ref().unwrap();
    assert_eq!(badge.model_name, "gemini-2.5-flash");
}

#[tokio::test]
async fn test_avatar_upload_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("face.png");
    std::fs::write(&path, b"png-bytes").unwrap();

    let store = MemoryStore::new();
    let mut view = persona_view(&store, Arc::new(ToggleDialogs::new(true)));
    view.open_editor(&store.personas().await[0]);

    let file = image_file_from_path(&path).await.unwrap();
    let AvatarUpload::Started(handle) = view.start_avatar_upload(&file).await else {
        panic!("small png should be accepted");
    };
    handle.await.unwrap();

    assert_eq!(view.apply_avatar_uploads(), 1);
    let avatar = view.draft().unwrap().avatar.clone().unwrap();
    assert!(avatar.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_reset_restores_defaults_after_customization() {
    let store = MemoryStore::new();
    let mut view = persona_view(&store, Arc::new(ToggleDialogs::new(true)));
    view.add_persona(&store.personas().await).await.unwrap();
    view.cancel_edit();
    assert_eq!(store.personas().await.len(), 4);

    assert!(view.reset_to_defaults().await.unwrap());
    assert_eq!(store.personas().await, get_default_presets());
}
