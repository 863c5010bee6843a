//! Application layer for Musing.
//!
//! Provides the state owner the views delegate to.

pub mod memory_store;

pub use memory_store::{MemorySnapshot, MemoryStore, default_categories};
