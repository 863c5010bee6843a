//! Application settings domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// AI providers an API connection can point at.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AiProvider {
    /// Google Gemini API
    Gemini,
    /// OpenAI API
    #[serde(rename = "openai")]
    #[strum(serialize = "openai")]
    OpenAi,
    /// Anthropic Claude API
    Anthropic,
    /// Local Ollama server
    Ollama,
}

impl AiProvider {
    /// Human readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "Gemini",
            AiProvider::OpenAi => "OpenAI",
            AiProvider::Anthropic => "Anthropic",
            AiProvider::Ollama => "Ollama",
        }
    }
}

/// A configured connection to an AI provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiConnection {
    /// Unique identifier referenced by `Persona::connection_id`
    pub id: String,
    /// User-facing name of the connection
    #[serde(default)]
    pub name: String,
    /// Provider this connection talks to
    pub provider: AiProvider,
    /// Model used for requests on this connection
    pub model_name: String,
}

/// Application-wide settings, owned and persisted outside the views.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    /// Configured API connections
    #[serde(default)]
    pub connections: Vec<ApiConnection>,
    /// Request an AI reaction automatically when a new entry is saved
    #[serde(default)]
    pub auto_reaction: bool,
    /// Let every persona react instead of a single one
    #[serde(default)]
    pub multi_persona_reaction: bool,
}

impl AppSettings {
    /// Looks up a connection by ID.
    pub fn find_connection(&self, id: &str) -> Option<&ApiConnection> {
        self.connections.iter().find(|c| c.id == id)
    }
}
