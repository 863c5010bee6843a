//! Recording collaborators for view tests.

use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;
use crate::journal::{EntryUpdate, NewComment};
use crate::persona::Persona;
use crate::port::{Dialogs, ImageReader, JournalStore, PersonaStore};
use crate::settings::AppSettings;

#[derive(Default)]
pub struct RecordingPersonaStore {
    personas: Mutex<Vec<Vec<Persona>>>,
    settings: Mutex<Vec<AppSettings>>,
    actions: Mutex<Vec<&'static str>>,
}

impl RecordingPersonaStore {
    pub fn last_personas(&self) -> Option<Vec<Persona>> {
        self.personas.lock().unwrap().last().cloned()
    }

    pub fn last_settings(&self) -> Option<AppSettings> {
        self.settings.lock().unwrap().last().cloned()
    }

    pub fn actions(&self) -> Vec<&'static str> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PersonaStore for RecordingPersonaStore {
    async fn replace_personas(&self, personas: Vec<Persona>) -> Result<()> {
        self.personas.lock().unwrap().push(personas);
        Ok(())
    }

    async fn replace_settings(&self, settings: AppSettings) -> Result<()> {
        self.settings.lock().unwrap().push(settings);
        Ok(())
    }

    async fn export_data(&self) -> Result<()> {
        self.actions.lock().unwrap().push("export");
        Ok(())
    }

    async fn clear_activity(&self) -> Result<()> {
        self.actions.lock().unwrap().push("clear_activity");
        Ok(())
    }

    async fn clear_all_data(&self) -> Result<()> {
        self.actions.lock().unwrap().push("clear_all");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalCall {
    Add {
        title: String,
        content: String,
        category: String,
    },
    Update {
        id: String,
        update: EntryUpdate,
    },
    Delete(String),
    AddCategory(String),
    AddComment {
        entry_id: String,
        comment: NewComment,
    },
    RequestAiComment(String),
}

#[derive(Default)]
pub struct RecordingJournalStore {
    calls: Mutex<Vec<JournalCall>>,
}

impl RecordingJournalStore {
    pub fn calls(&self) -> Vec<JournalCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: JournalCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait::async_trait]
impl JournalStore for RecordingJournalStore {
    async fn add_entry(&self, title: String, content: String, category: String) -> Result<()> {
        self.record(JournalCall::Add {
            title,
            content,
            category,
        })
    }

    async fn update_entry(&self, id: &str, update: EntryUpdate) -> Result<()> {
        self.record(JournalCall::Update {
            id: id.to_string(),
            update,
        })
    }

    async fn delete_entry(&self, id: &str) -> Result<()> {
        self.record(JournalCall::Delete(id.to_string()))
    }

    async fn add_category(&self, name: String) -> Result<()> {
        self.record(JournalCall::AddCategory(name))
    }

    async fn add_comment(&self, entry_id: &str, comment: NewComment) -> Result<()> {
        self.record(JournalCall::AddComment {
            entry_id: entry_id.to_string(),
            comment,
        })
    }

    async fn request_ai_comment(&self, entry_id: &str) -> Result<()> {
        self.record(JournalCall::RequestAiComment(entry_id.to_string()))
    }
}

/// Dialogs that answer every confirmation the same way.
pub struct ScriptedDialogs {
    answer: bool,
    confirmations: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct StubImageReader;

impl StubImageReader {
    pub const DATA_URL: &'static str = "data:image/png;base64,iVBORw0KGgo=";
}

#[async_trait::async_trait]
impl ImageReader for StubImageReader {
    async fn read_data_url(&self, _path: &Path) -> Result<String> {
        Ok(Self::DATA_URL.to_string())
    }
}
