//! View state machines.
//!
//! Each view owns only its local editing state. The lists it displays are
//! passed in by the state owner on every call, and every mutation goes back
//! out through the collaborator traits in [`crate::port`].

pub mod journal;
pub mod persona_settings;

#[cfg(test)]
mod test_support;

pub use journal::{CommentView, EntryDetail, EntryDraft, JournalMode, JournalView, WriteTarget};
pub use persona_settings::{
    AvatarUpload, ConnectionBadge, ImageFile, PersonaCard, PersonaSettingsView, SaveOutcome,
};
