//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. All state
//! mutation funnels through `update`, so every user action is one synchronous
//! pass: read state, mutate, re-render on the next frame.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, AuthorFilterDialog, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog,
};
use crate::model::category::Category;
use crate::model::domain::DomainState;
use crate::model::favorites::SavedQuote;
use crate::model::modal::{Modal, ModalStack};
use crate::model::quote::AuthorFilter;
use crate::services::{self, QuoteSource};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;

/// Shown when a filter or category matches nothing
const NO_MATCH_MESSAGE: &str = "No quotes found with the selected filters.";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Session data (quotes, current quote, favorites, filter)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Remote quote source with its cache window
    pub source: QuoteSource,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub author_dialog: AuthorFilterDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance; quotes are loaded in `init`
    pub fn new() -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            source: QuoteSource::new(),
            should_quit: false,
            error: None,
            status_message: None,
            home: HomeComponent::new(),
            author_dialog: AuthorFilterDialog::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error = None;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.status_message = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quote Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Pick a random quote from the author-filtered set
    fn generate_quote(&mut self) {
        let filtered = services::filter_by_author(&self.domain.quotes, &self.domain.author_filter);
        match services::pick_random(&filtered, &mut rand::thread_rng()) {
            Some(quote) => {
                self.domain.current_quote = Some(SavedQuote::capture(quote));
                self.error = None;
                self.status_message = None;
            }
            None => self.set_error(NO_MATCH_MESSAGE),
        }
    }

    /// Pick a random quote from a fixed category.
    /// Does not touch the author filter.
    fn pick_category(&mut self, category: Category) {
        let filtered = services::filter_by_category(&self.domain.quotes, category);
        match services::pick_random(&filtered, &mut rand::thread_rng()) {
            Some(quote) => {
                self.domain.current_quote = Some(SavedQuote::capture(quote));
                self.error = None;
                self.status_message = None;
            }
            None => self.set_error(NO_MATCH_MESSAGE),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────

    fn add_favorite(&mut self) {
        let Some(current) = self.domain.current_quote.clone() else {
            self.set_error("Generate a quote before saving it.");
            return;
        };

        if self.domain.favorites.add(current) {
            self.set_status("Quote added to favorites!");
        } else {
            self.set_status("This quote is already in your favorites!");
        }
    }

    fn remove_favorite(&mut self) {
        let Some(index) = self.home.selected_favorite() else {
            return;
        };

        self.domain.favorites.remove(index);
        self.home.clamp_selection(self.domain.favorites.len());
        self.set_status("Removed from favorites.");
    }

    fn clear_favorites(&mut self) {
        self.domain.favorites.clear();
        self.home.clamp_selection(0);
        self.set_status("All favorites cleared!");
    }

    fn export_favorites(&mut self) {
        if self.domain.favorites.is_empty() {
            self.set_status("No favorites to export yet.");
            return;
        }

        match self.domain.favorites.export(Path::new(".")) {
            Ok(path) => {
                let count = self.domain.favorites.len();
                self.set_status(format!("Exported {} favorites to {}", count, path.display()));
            }
            Err(e) => self.set_error(format!("Export failed: {}", e)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // One fetch per cache window; falls back to the fixed list on failure
        self.domain.quotes = self.source.fetch();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::AuthorFilter { .. } => self.author_dialog.handle_key_event(key),
                Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            }
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Quote Selection
            // ─────────────────────────────────────────────────────────────────
            Action::GenerateQuote => self.generate_quote(),
            Action::PickCategory(category) => self.pick_category(category),

            // ─────────────────────────────────────────────────────────────────
            // Author Filter
            // ─────────────────────────────────────────────────────────────────
            Action::OpenAuthorFilter => {
                let authors = services::available_authors(&self.domain.quotes);
                self.author_dialog
                    .set_authors(authors, &self.domain.author_filter);
                self.modals.push(Modal::AuthorFilter {
                    selected_index: self.author_dialog.selected_index,
                });
            }
            Action::SetAuthorFilter(author) => {
                self.domain.author_filter = AuthorFilter::Author(author);
                self.modals.pop();
                self.error = None;
            }
            Action::ClearAuthorFilter => {
                self.domain.author_filter = AuthorFilter::All;
                self.modals.pop();
                self.error = None;
            }

            // ─────────────────────────────────────────────────────────────────
            // Favorites
            // ─────────────────────────────────────────────────────────────────
            Action::AddFavorite => self.add_favorite(),
            Action::NextFavorite => self.home.next(self.domain.favorites.len()),
            Action::PrevFavorite => self.home.previous(self.domain.favorites.len()),
            Action::FirstFavorite => self.home.select_first(self.domain.favorites.len()),
            Action::LastFavorite => self.home.select_last(self.domain.favorites.len()),
            Action::RemoveFavorite => self.remove_favorite(),
            Action::ClearFavorites => self.clear_favorites(),
            Action::ExportFavorites => self.export_favorites(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                // The author dialog tracks its own selection; mirror it on the
                // modal entry so the stack stays truthful
                if let Some(Modal::AuthorFilter { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.author_dialog.selected_index;
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let filtered_count =
            services::filter_by_author(&self.domain.quotes, &self.domain.author_filter).len();

        let ctx = HomeRenderContext {
            quote_count: self.domain.quotes.len(),
            filtered_count,
            author_filter: &self.domain.author_filter,
            current_quote: self.domain.current_quote.as_ref(),
            favorites: &self.domain.favorites,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };

        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::AuthorFilter { .. } => self.author_dialog.draw(frame, area)?,
                Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quote::{fallback_quotes, Quote};

    /// App with the fallback list loaded, no network involved
    fn app_with_fallback() -> App {
        let mut app = App::new();
        app.domain.quotes = fallback_quotes();
        app
    }

    #[test]
    fn test_generate_sets_current_quote() {
        let mut app = app_with_fallback();
        app.update(Action::GenerateQuote).unwrap();

        let current = app.domain.current_quote.expect("quote should be selected");
        assert!(app
            .domain
            .quotes
            .iter()
            .any(|q| q.text == current.text && q.display_author() == current.author));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_generate_with_no_quotes_sets_error() {
        let mut app = App::new();
        app.update(Action::GenerateQuote).unwrap();

        assert!(app.domain.current_quote.is_none());
        assert_eq!(app.error.as_deref(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_generate_respects_author_filter() {
        let mut app = app_with_fallback();
        app.domain.author_filter = AuthorFilter::Author("Steve Jobs".to_string());

        for _ in 0..10 {
            app.update(Action::GenerateQuote).unwrap();
            let current = app.domain.current_quote.as_ref().unwrap();
            assert_eq!(current.author, "Steve Jobs");
        }
    }

    #[test]
    fn test_category_pick_without_matches_sets_error() {
        let mut app = app_with_fallback();
        // No Tony Robbins quotes in the fallback list
        app.update(Action::PickCategory(Category::Motivation))
            .unwrap();
        assert_eq!(app.error.as_deref(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_category_pick_matches_mapped_author() {
        let mut app = app_with_fallback();
        app.update(Action::PickCategory(Category::Wisdom)).unwrap();

        let current = app.domain.current_quote.unwrap();
        assert_eq!(current.author, "Albert Einstein");
    }

    #[test]
    fn test_add_favorite_twice_is_idempotent() {
        let mut app = app_with_fallback();
        app.domain.current_quote = Some(SavedQuote {
            text: "T".to_string(),
            author: "A".to_string(),
            timestamp: "2024-01-01 00:00:00".to_string(),
        });

        app.update(Action::AddFavorite).unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Quote added to favorites!"));

        app.update(Action::AddFavorite).unwrap();
        assert_eq!(
            app.status_message.as_deref(),
            Some("This quote is already in your favorites!")
        );
        assert_eq!(app.domain.favorites.len(), 1);
    }

    #[test]
    fn test_add_favorite_without_current_is_an_error() {
        let mut app = app_with_fallback();
        app.update(Action::AddFavorite).unwrap();
        assert!(app.error.is_some());
        assert!(app.domain.favorites.is_empty());
    }

    #[test]
    fn test_remove_selected_favorite() {
        let mut app = app_with_fallback();
        for text in ["one", "two"] {
            app.domain.current_quote = Some(SavedQuote {
                text: text.to_string(),
                author: "A".to_string(),
                timestamp: "2024-01-01 00:00:00".to_string(),
            });
            app.update(Action::AddFavorite).unwrap();
        }

        app.update(Action::FirstFavorite).unwrap();
        app.update(Action::RemoveFavorite).unwrap();

        assert_eq!(app.domain.favorites.len(), 1);
        assert_eq!(app.domain.favorites.get(0).unwrap().text, "two");
        // Selection stays on the remaining entry
        assert_eq!(app.home.selected_favorite(), Some(0));
    }

    #[test]
    fn test_clear_favorites() {
        let mut app = app_with_fallback();
        app.domain.current_quote = Some(SavedQuote {
            text: "T".to_string(),
            author: "A".to_string(),
            timestamp: "2024-01-01 00:00:00".to_string(),
        });
        app.update(Action::AddFavorite).unwrap();

        app.update(Action::ClearFavorites).unwrap();
        assert!(app.domain.favorites.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("All favorites cleared!"));
        assert_eq!(app.home.selected_favorite(), None);
    }

    #[test]
    fn test_author_filter_dialog_round_trip() {
        let mut app = App::new();
        app.domain.quotes = vec![
            Quote::new("a", "B Author"),
            Quote::new("b", "A Author"),
        ];

        app.update(Action::OpenAuthorFilter).unwrap();
        assert!(matches!(
            app.modals.top(),
            Some(Modal::AuthorFilter { .. })
        ));
        assert_eq!(app.author_dialog.authors, vec!["A Author", "B Author"]);

        app.update(Action::SetAuthorFilter("A Author".to_string()))
            .unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(
            app.domain.author_filter,
            AuthorFilter::Author("A Author".to_string())
        );

        app.update(Action::OpenAuthorFilter).unwrap();
        app.update(Action::ClearAuthorFilter).unwrap();
        assert!(app.domain.author_filter.is_all());
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = app_with_fallback();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
