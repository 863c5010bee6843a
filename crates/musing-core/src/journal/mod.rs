//! Journal domain module.
//!
//! # Module Structure
//!
//! - `model`: Entries, comments, categories and comment authorship
//! - `date`: Lenient date parsing and display
//! - `query`: Category filtering and newest-first ordering

pub mod date;
mod model;
pub mod query;

pub use date::{NO_DATE, format_date, parse_date};
pub use model::{
    AuthorSnapshot, Comment, CommentAuthor, EntryUpdate, JournalCategory, JournalEntry, NewComment,
    ResolvedAuthor, UNKNOWN_AUTHOR_EMOJI, UNKNOWN_AUTHOR_NAME,
};
pub use query::{CategoryFilter, filter_sorted, latest};
