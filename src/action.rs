//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::category::Category;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Quote Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Pick a random quote from the author-filtered set
    GenerateQuote,
    /// Pick a random quote from a fixed category
    PickCategory(Category),

    // ─────────────────────────────────────────────────────────────────────────
    // Author Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the author filter dialog
    OpenAuthorFilter,
    /// Filter generation to a single author
    SetAuthorFilter(String),
    /// Reset the filter to all authors
    ClearAuthorFilter,

    // ─────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────
    /// Save the current quote to favorites
    AddFavorite,
    /// Move to the next favorite in the list
    NextFavorite,
    /// Move to the previous favorite in the list
    PrevFavorite,
    /// Jump to the first favorite
    FirstFavorite,
    /// Jump to the last favorite
    LastFavorite,
    /// Remove the selected favorite
    RemoveFavorite,
    /// Clear all favorites
    ClearFavorites,
    /// Export favorites as CSV
    ExportFavorites,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Navigate up in modal
    ModalUp,
    /// Navigate down in modal
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::GenerateQuote => write!(f, "GenerateQuote"),
            Action::PickCategory(category) => write!(f, "PickCategory({})", category.name()),
            Action::OpenAuthorFilter => write!(f, "OpenAuthorFilter"),
            Action::SetAuthorFilter(author) => write!(f, "SetAuthorFilter({})", author),
            Action::ClearAuthorFilter => write!(f, "ClearAuthorFilter"),
            Action::AddFavorite => write!(f, "AddFavorite"),
            Action::NextFavorite => write!(f, "NextFavorite"),
            Action::PrevFavorite => write!(f, "PrevFavorite"),
            Action::FirstFavorite => write!(f, "FirstFavorite"),
            Action::LastFavorite => write!(f, "LastFavorite"),
            Action::RemoveFavorite => write!(f, "RemoveFavorite"),
            Action::ClearFavorites => write!(f, "ClearFavorites"),
            Action::ExportFavorites => write!(f, "ExportFavorites"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
