//! Configuration model for Musing.
//!
//! Every field has a default so a partial (or missing) `config.toml` still
//! yields a complete configuration.

use serde::{Deserialize, Serialize};

use crate::settings::AiProvider;

/// Default limit for avatar uploads (5 MiB).
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Root configuration loaded from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MusingConfig {
    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub persona: PersonaConfig,
}

impl Default for MusingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            journal: JournalConfig::default(),
            persona: PersonaConfig::default(),
        }
    }
}

/// Journal view settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// The three entry counts the list can show; the first is the default
    #[serde(default = "default_page_size_options")]
    pub page_size_options: [usize; 3],
    /// Category used for new entries when no categories exist
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            page_size_options: default_page_size_options(),
            fallback_category: default_fallback_category(),
        }
    }
}

/// Persona settings view configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    /// Largest accepted avatar image, in bytes
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: u64,
    /// Providers a persona may be connected to
    #[serde(default = "default_supported_providers")]
    pub supported_providers: Vec<AiProvider>,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            max_avatar_bytes: default_max_avatar_bytes(),
            supported_providers: default_supported_providers(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size_options() -> [usize; 3] {
    [10, 20, 50]
}

fn default_fallback_category() -> String {
    "General".to_string()
}

fn default_max_avatar_bytes() -> u64 {
    DEFAULT_MAX_AVATAR_BYTES
}

fn default_supported_providers() -> Vec<AiProvider> {
    vec![AiProvider::Gemini, AiProvider::OpenAi]
}
