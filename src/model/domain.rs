//! Domain state - business/data state separate from UI concerns

use super::favorites::{FavoritesList, SavedQuote};
use super::quote::{AuthorFilter, Quote};

/// Domain state containing all session data
#[derive(Debug, Default)]
pub struct DomainState {
    /// All quotes loaded from the source (remote or fallback)
    pub quotes: Vec<Quote>,

    /// Most recently selected quote, overwritten by any new selection
    pub current_quote: Option<SavedQuote>,

    /// Saved quotes for this session
    pub favorites: FavoritesList,

    /// Active author filter for the random generator
    pub author_filter: AuthorFilter,
}

impl DomainState {
    /// Create a new domain state with default values
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            current_quote: None,
            favorites: FavoritesList::new(),
            author_filter: AuthorFilter::All,
        }
    }
}
