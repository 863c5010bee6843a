//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain model (`Persona`)
//! - `preset`: Default seed personas

mod model;
mod preset;

pub use model::{
    NEW_PERSONA_COLOR, NEW_PERSONA_EMOJI, NEW_PERSONA_NAME, NEW_PERSONA_PERSONALITY,
    NEW_PERSONA_ROLE, NEW_PERSONA_TONE, Persona,
};
pub use preset::get_default_presets;
