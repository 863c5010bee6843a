//! Journal view state.
//!
//! Two axes of state: browsing vs. writing (create or edit), and the
//! current selection. The selection is kept valid for the active category
//! filter by [`JournalView::reconcile`], which the owner calls whenever the
//! entry list changes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::JournalConfig;
use crate::error::{MusingError, Result};
use crate::journal::{
    CategoryFilter, EntryUpdate, JournalCategory, JournalEntry, NewComment, ResolvedAuthor,
    filter_sorted, format_date, latest,
};
use crate::persona::Persona;
use crate::port::{Dialogs, JournalStore};

/// Placeholder shown under an entry that has no comments yet.
pub const AWAITING_REACTION_MESSAGE: &str = "Waiting for an AI reaction…";

pub const CONFIRM_DELETE_ENTRY_MESSAGE: &str = "Delete this entry? This cannot be undone.";

/// Bounds and wrap width for the content editor's height, in text rows.
pub const MIN_CONTENT_ROWS: usize = 4;
pub const MAX_CONTENT_ROWS: usize = 24;
pub const CONTENT_WRAP_COLUMNS: usize = 80;

/// What a save in write mode does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum WriteTarget {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "target", rename_all = "snake_case")]
pub enum JournalMode {
    Browsing,
    Writing(WriteTarget),
}

/// Uncommitted entry fields edited in write mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl EntryDraft {
    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// A comment ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: String,
    pub author: ResolvedAuthor,
    pub timestamp_label: String,
    pub content: String,
}

/// The detail pane for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub date_label: String,
    pub comments: Vec<CommentView>,
    /// True when there are no comments; the pane shows
    /// [`AWAITING_REACTION_MESSAGE`] instead
    pub awaiting_reaction: bool,
}

pub struct JournalView {
    store: Arc<dyn JournalStore>,
    dialogs: Arc<dyn Dialogs>,
    config: JournalConfig,
    filter: CategoryFilter,
    selected_id: Option<String>,
    visible_count: usize,
    mode: JournalMode,
    draft: EntryDraft,
    menu_open: bool,
    content_rows: usize,
}

impl JournalView {
    pub fn new(store: Arc<dyn JournalStore>, dialogs: Arc<dyn Dialogs>, config: JournalConfig) -> Self {
        let visible_count = config.page_size_options[0];
        Self {
            store,
            dialogs,
            config,
            filter: CategoryFilter::All,
            selected_id: None,
            visible_count,
            mode: JournalMode::Browsing,
            draft: EntryDraft::default(),
            menu_open: false,
            content_rows: MIN_CONTENT_ROWS,
        }
    }

    // ============================================================================
    // Selection and filtering
    // ============================================================================

    /// Brings the selection back in line with the filtered entries.
    ///
    /// Does nothing while writing. Otherwise an empty filtered set clears the
    /// selection, and a missing or filtered-out selection moves to the newest
    /// filtered entry. Returns whether the selection changed.
    pub fn reconcile(&mut self, entries: &[JournalEntry]) -> bool {
        if self.is_writing() {
            return false;
        }

        let filtered = filter_sorted(entries, &self.filter);
        let valid = self
            .selected_id
            .as_deref()
            .is_some_and(|id| filtered.iter().any(|e| e.id == id));
        if valid {
            return false;
        }

        let next = filtered.first().map(|e| e.id.clone());
        let changed = next != self.selected_id;
        if changed {
            tracing::debug!(
                "[JournalView] Selection {:?} -> {:?} (filter {:?})",
                self.selected_id,
                next,
                self.filter
            );
            self.menu_open = false;
        }
        self.selected_id = next;
        changed
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Changes the category filter and reconciles the selection.
    pub fn set_filter(&mut self, filter: CategoryFilter, entries: &[JournalEntry]) {
        self.filter = filter;
        self.reconcile(entries);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Selects `id` if it is in the filtered set.
    pub fn select(&mut self, id: &str, entries: &[JournalEntry]) -> bool {
        let visible = entries
            .iter()
            .any(|e| e.id == id && self.filter.matches(e));
        if visible {
            self.selected_id = Some(id.to_string());
            self.menu_open = false;
        }
        visible
    }

    /// The selected entry, if it passes the current filter.
    pub fn selected_entry<'a>(&self, entries: &'a [JournalEntry]) -> Option<&'a JournalEntry> {
        let id = self.selected_id.as_deref()?;
        entries
            .iter()
            .find(|e| e.id == id && self.filter.matches(e))
    }

    /// Filtered entries, newest first.
    pub fn filtered_entries<'a>(&self, entries: &'a [JournalEntry]) -> Vec<&'a JournalEntry> {
        filter_sorted(entries, &self.filter)
    }

    /// Filtered entries truncated to the visible count.
    pub fn visible_entries<'a>(&self, entries: &'a [JournalEntry]) -> Vec<&'a JournalEntry> {
        let mut filtered = self.filtered_entries(entries);
        filtered.truncate(self.visible_count);
        filtered
    }

    pub fn has_more(&self, entries: &[JournalEntry]) -> bool {
        entries.iter().filter(|e| self.filter.matches(e)).count() > self.visible_count
    }

    pub fn page_size_options(&self) -> [usize; 3] {
        self.config.page_size_options
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn set_visible_count(&mut self, count: usize) -> Result<()> {
        if !self.config.page_size_options.contains(&count) {
            return Err(MusingError::validation(format!(
                "Visible count {} is not one of {:?}",
                count, self.config.page_size_options
            )));
        }
        self.visible_count = count;
        Ok(())
    }

    /// The newest entry for the current filter.
    pub fn newest<'a>(&self, entries: &'a [JournalEntry]) -> Option<&'a JournalEntry> {
        latest(entries, &self.filter)
    }

    // ============================================================================
    // Write mode
    // ============================================================================

    pub fn mode(&self) -> &JournalMode {
        &self.mode
    }

    pub fn is_writing(&self) -> bool {
        matches!(self.mode, JournalMode::Writing(_))
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Enters write mode for a new entry.
    ///
    /// The category defaults to the first category, or the configured
    /// fallback name when there are none.
    pub fn begin_create(&mut self, categories: &[JournalCategory]) {
        let category = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| self.config.fallback_category.clone());
        self.enter_writing(
            WriteTarget::Create,
            EntryDraft {
                title: String::new(),
                content: String::new(),
                category,
            },
        );
    }

    /// Enters write mode prefilled from `entry`.
    pub fn begin_edit(&mut self, entry: &JournalEntry) {
        self.enter_writing(
            WriteTarget::Edit(entry.id.clone()),
            EntryDraft {
                title: entry.title.clone(),
                content: entry.content.clone(),
                category: entry.category.clone(),
            },
        );
    }

    /// Edits the selected entry, if any.
    pub fn begin_edit_selected(&mut self, entries: &[JournalEntry]) -> bool {
        match self.selected_entry(entries).cloned() {
            Some(entry) => {
                self.begin_edit(&entry);
                true
            }
            None => false,
        }
    }

    fn enter_writing(&mut self, target: WriteTarget, draft: EntryDraft) {
        self.mode = JournalMode::Writing(target);
        self.draft = draft;
        self.menu_open = false;
        self.resize_content();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.resize_content();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    /// False while the title or content is blank.
    pub fn can_save(&self) -> bool {
        self.is_writing() && self.draft.is_complete()
    }

    /// Commits the draft. Returns `false` without calling the store when the
    /// draft cannot be saved.
    ///
    /// The caller reconciles with the updated list once the store has
    /// applied the change.
    pub async fn save_draft(&mut self) -> Result<bool> {
        if !self.can_save() {
            return Ok(false);
        }

        let draft = self.draft.clone();
        match &self.mode {
            JournalMode::Writing(WriteTarget::Edit(id)) => {
                let update = EntryUpdate {
                    title: Some(draft.title),
                    content: Some(draft.content),
                    category: Some(draft.category),
                };
                self.store.update_entry(id, update).await?;
                tracing::info!("[JournalView] Updated entry {}", id);
            }
            JournalMode::Writing(WriteTarget::Create) => {
                self.store
                    .add_entry(draft.title, draft.content, draft.category)
                    .await?;
                tracing::info!("[JournalView] Added entry");
            }
            JournalMode::Browsing => return Ok(false),
        }

        self.exit_writing();
        Ok(true)
    }

    /// Leaves write mode, discarding the draft, and reconciles the selection
    /// against `entries` (the filter may have changed while writing).
    pub fn cancel_write(&mut self, entries: &[JournalEntry]) {
        self.exit_writing();
        self.reconcile(entries);
    }

    fn exit_writing(&mut self) {
        self.mode = JournalMode::Browsing;
        self.draft = EntryDraft::default();
        self.resize_content();
    }

    /// Height of the content editor in rows, tracking the draft content.
    pub fn content_rows(&self) -> usize {
        self.content_rows
    }

    fn resize_content(&mut self) {
        let rows: usize = self
            .draft
            .content
            .split('\n')
            .map(|line| line.chars().count().div_ceil(CONTENT_WRAP_COLUMNS).max(1))
            .sum();
        self.content_rows = rows.clamp(MIN_CONTENT_ROWS, MAX_CONTENT_ROWS);
    }

    // ============================================================================
    // Detail pane
    // ============================================================================

    /// Detail for the selected entry, with comment authors resolved against
    /// the current personas.
    pub fn detail(&self, entries: &[JournalEntry], personas: &[Persona]) -> Option<EntryDetail> {
        let entry = self.selected_entry(entries)?;
        let comments: Vec<CommentView> = entry
            .comments
            .iter()
            .map(|c| CommentView {
                id: c.id.clone(),
                author: c.author.resolve(personas),
                timestamp_label: format_date(&c.timestamp),
                content: c.content.clone(),
            })
            .collect();

        Some(EntryDetail {
            id: entry.id.clone(),
            category: entry.category.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            date_label: format_date(&entry.date),
            awaiting_reaction: comments.is_empty(),
            comments,
        })
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the action menu (outside click).
    pub fn dismiss_menu(&mut self) {
        self.menu_open = false;
    }

    /// Deletes the selected entry after confirmation.
    ///
    /// Only an entry that passes the current filter is deleted. Declining
    /// leaves both the entries and the selection as they were.
    pub async fn delete_selected(&mut self, entries: &[JournalEntry]) -> Result<bool> {
        let Some(id) = self.selected_entry(entries).map(|e| e.id.clone()) else {
            self.reconcile(entries);
            return Ok(false);
        };
        self.menu_open = false;

        if !self.dialogs.confirm(CONFIRM_DELETE_ENTRY_MESSAGE).await {
            return Ok(false);
        }

        self.store.delete_entry(&id).await?;
        self.selected_id = None;
        tracing::info!("[JournalView] Deleted entry {}", id);
        Ok(true)
    }

    /// Asks the store for an AI reaction to the selected entry.
    pub async fn request_ai_reaction(&self, entries: &[JournalEntry]) -> Result<bool> {
        let Some(entry) = self.selected_entry(entries) else {
            return Ok(false);
        };
        self.store.request_ai_comment(&entry.id).await?;
        Ok(true)
    }

    /// Adds a comment to the selected entry.
    pub async fn add_comment(&self, entries: &[JournalEntry], comment: NewComment) -> Result<bool> {
        let Some(entry) = self.selected_entry(entries) else {
            return Ok(false);
        };
        self.store.add_comment(&entry.id, comment).await?;
        Ok(true)
    }
}
