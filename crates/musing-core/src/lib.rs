//! Core domain and view logic for Musing.
//!
//! - [`persona`], [`journal`], [`settings`]: domain models
//! - [`view`]: the persona settings and journal view state machines
//! - [`port`]: collaborator traits the views delegate mutations to
//! - [`config`], [`error`]: shared configuration model and error type

pub mod config;
pub mod error;
pub mod journal;
pub mod persona;
pub mod port;
pub mod settings;
pub mod view;

pub use error::{MusingError, Result};
