//! Persona domain model.
//!
//! Represents AI personas that react to journal entries. Each persona has
//! its own voice (personality, tone) and an optional link to the API
//! connection used to generate its reactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder values used when the user adds a new persona.
pub const NEW_PERSONA_NAME: &str = "New Persona";
pub const NEW_PERSONA_EMOJI: &str = "🙂";
pub const NEW_PERSONA_ROLE: &str = "Companion";
pub const NEW_PERSONA_PERSONALITY: &str = "Curious and supportive.";
pub const NEW_PERSONA_TONE: &str = "Casual";
pub const NEW_PERSONA_COLOR: &str = "#6B7280";

/// A persona representing an AI agent that comments on journal entries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Unique identifier (UUID format for user-created personas)
    pub id: String,
    /// Display name of the persona
    pub name: String,
    /// Emoji shown when no avatar image is set
    pub emoji: String,
    /// Role or title describing the persona
    pub role: String,
    /// Free-text personality description fed to the model
    pub personality: String,
    /// Tone of voice used in reactions
    pub tone: String,
    /// Accent color for UI theming (CSS hex)
    pub color: String,
    /// Avatar image, either a remote URL or an embedded `data:` URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// ID of the API connection used to generate this persona's reactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
}

impl Persona {
    /// Creates a persona with a fresh UUID and the fixed placeholder values.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: NEW_PERSONA_NAME.to_string(),
            emoji: NEW_PERSONA_EMOJI.to_string(),
            role: NEW_PERSONA_ROLE.to_string(),
            personality: NEW_PERSONA_PERSONALITY.to_string(),
            tone: NEW_PERSONA_TONE.to_string(),
            color: NEW_PERSONA_COLOR.to_string(),
            avatar: None,
            connection_id: None,
        }
    }

    /// Returns the connection ID if it is set and non-blank.
    pub fn connection(&self) -> Option<&str> {
        self.connection_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_generates_uuid() {
        let a = Persona::placeholder();
        let b = Persona::placeholder();
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, NEW_PERSONA_NAME);
        assert!(a.connection_id.is_none());
    }

    #[test]
    fn test_blank_connection_is_treated_as_unset() {
        let mut persona = Persona::placeholder();
        persona.connection_id = Some("   ".to_string());
        assert_eq!(persona.connection(), None);

        persona.connection_id = Some("conn-1".to_string());
        assert_eq!(persona.connection(), Some("conn-1"));
    }
}
