//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Session data (quotes, current quote, favorites, filter)
//! - `Quote` / `SavedQuote` - The quote wire model and its saved form
//! - `Category` - Fixed quick-filter categories
//! - `ModalStack` - Modal overlay management

pub mod category;
pub mod domain;
pub mod favorites;
pub mod modal;
pub mod quote;

// Re-export commonly used types
pub use category::Category;
pub use domain::DomainState;
pub use favorites::{FavoritesList, SavedQuote, EXPORT_FILE_NAME};
pub use quote::{fallback_quotes, AuthorFilter, Quote};
