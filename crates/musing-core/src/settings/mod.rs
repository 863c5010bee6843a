//! Application settings domain module.

mod model;

pub use model::{AiProvider, ApiConnection, AppSettings};
