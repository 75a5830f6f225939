//! External interactions and selection logic
//!
//! This module contains the non-UI workings of the app:
//! - Remote quote fetching with a TTL cache
//! - Author extraction, filtering, and random selection

pub mod selector;
pub mod source;

pub use selector::{available_authors, filter_by_author, filter_by_category, pick_random};
pub use source::QuoteSource;
