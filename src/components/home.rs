//! Home component - Main application screen
//!
//! Displays the current quote, the category bar, and the favorites list.
//! Owns favorites navigation state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::category::Category;
use crate::model::favorites::FavoritesList;
use crate::model::quote::AuthorFilter;
use crate::model::SavedQuote;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
/// Owns favorites-list navigation state
pub struct HomeComponent {
    /// Favorites list selection state
    pub favorites_state: ListState,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            favorites_state: ListState::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Favorites Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Index of the selected favorite, if any
    pub fn selected_favorite(&self) -> Option<usize> {
        self.favorites_state.selected()
    }

    /// Select next favorite, wrapping to the first
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            self.favorites_state.select(None);
            return;
        }
        let next = match self.favorites_state.selected() {
            Some(current) if current + 1 < count => current + 1,
            Some(_) => 0,
            None => 0,
        };
        self.favorites_state.select(Some(next));
    }

    /// Select previous favorite, wrapping to the last
    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            self.favorites_state.select(None);
            return;
        }
        let prev = match self.favorites_state.selected() {
            Some(0) | None => count - 1,
            Some(current) => current - 1,
        };
        self.favorites_state.select(Some(prev));
    }

    /// Jump to the first favorite
    pub fn select_first(&mut self, count: usize) {
        if count == 0 {
            self.favorites_state.select(None);
        } else {
            self.favorites_state.select(Some(0));
        }
    }

    /// Jump to the last favorite
    pub fn select_last(&mut self, count: usize) {
        if count == 0 {
            self.favorites_state.select(None);
        } else {
            self.favorites_state.select(Some(count - 1));
        }
    }

    /// Keep the selection valid after a removal or clear
    pub fn clamp_selection(&mut self, count: usize) {
        match self.favorites_state.selected() {
            Some(_) if count == 0 => self.favorites_state.select(None),
            Some(current) if current >= count => self.favorites_state.select(Some(count - 1)),
            _ => {}
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Quote selection
            KeyCode::Enter | KeyCode::Char('n') => Some(Action::GenerateQuote),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c.to_digit(10).unwrap_or(0) as usize;
                Category::from_key_index(index).map(Action::PickCategory)
            }

            // Author filter
            KeyCode::Char('a') => Some(Action::OpenAuthorFilter),

            // Favorites
            KeyCode::Char('s') => Some(Action::AddFavorite),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextFavorite),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevFavorite),
            KeyCode::Char('g') => Some(Action::FirstFavorite),
            KeyCode::Char('G') => Some(Action::LastFavorite),
            KeyCode::Char('x') | KeyCode::Delete => Some(Action::RemoveFavorite),
            KeyCode::Char('C') => Some(Action::ClearFavorites),
            KeyCode::Char('e') => Some(Action::ExportFavorites),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the favorites list;
        // App calls the navigation methods directly
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub quote_count: usize,
    pub filtered_count: usize,
    pub author_filter: &'a AuthorFilter,
    pub current_quote: Option<&'a SavedQuote>,
    pub favorites: &'a FavoritesList,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_info_box(frame, layout.info, ctx);
    render_favorites(frame, layout.favorites, home, ctx);
    render_quote_panel(frame, layout.quote, ctx);
    render_category_bar(frame, layout.categories);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_info_box(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let lines = vec![
        Line::from(vec![
            Span::styled("quotes:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} loaded, {} in filter", ctx.quote_count, ctx.filtered_count),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("author:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ctx.author_filter.label().to_string(),
                if ctx.author_filter.is_all() {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                },
            ),
        ]),
        Line::from(vec![
            Span::styled("favorites: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", ctx.favorites.len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Session ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_favorites(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let title = format!(" Favorites ({}) ", ctx.favorites.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));

    if ctx.favorites.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "You haven't added any favorites yet.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press s on a quote you like!",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    // Two lines per entry: the quote text, then attribution + save time
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = ctx
        .favorites
        .entries()
        .iter()
        .map(|entry| {
            let text = truncate_to_width(&entry.text, text_width);
            ListItem::new(vec![
                Line::from(Span::styled(text, Style::default().fg(Color::White))),
                Line::from(Span::styled(
                    format!("  — {} · saved {}", entry.author, entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.favorites_state);
}

fn render_quote_panel(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quote ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Cyan));

    let inner_width = area.width.saturating_sub(2) as usize;

    let lines = match ctx.current_quote {
        Some(quote) => {
            let attribution = format!("— {}", quote.author);
            // Right-align the attribution under the quote text
            let pad = inner_width.saturating_sub(attribution.width() + 1);
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("\u{201c}{}\u{201d}", quote.text),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}{}", " ".repeat(pad), attribution),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to generate a random quote,",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "or 1-6 to pick from a category.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_category_bar(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, category) in Category::all().iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}  ", category.name()),
            Style::default().fg(Color::White),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Categories ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(bar, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = ctx.status_message {
        Line::from(Span::styled(
            format!(" ✓ {}", message),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            format!(" Filter: {}", ctx.author_filter.label()),
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let shortcuts = [
        ("Enter", "Generate"),
        ("1-6", "Category"),
        ("a", "Author"),
        ("s", "Save"),
        ("x", "Remove"),
        ("e", "Export"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in shortcuts {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{}  ", label)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Truncate a string to the given display width, appending an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.to_string().width();
        if width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut home = HomeComponent::new();
        home.next(3);
        assert_eq!(home.selected_favorite(), Some(0));
        home.next(3);
        home.next(3);
        home.next(3);
        assert_eq!(home.selected_favorite(), Some(0));

        home.previous(3);
        assert_eq!(home.selected_favorite(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut home = HomeComponent::new();
        home.next(0);
        assert_eq!(home.selected_favorite(), None);
        home.previous(0);
        assert_eq!(home.selected_favorite(), None);
    }

    #[test]
    fn test_clamp_selection_after_removal() {
        let mut home = HomeComponent::new();
        home.select_last(3);
        assert_eq!(home.selected_favorite(), Some(2));

        // Last entry removed
        home.clamp_selection(2);
        assert_eq!(home.selected_favorite(), Some(1));

        // List cleared
        home.clamp_selection(0);
        assert_eq!(home.selected_favorite(), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let truncated = truncate_to_width("a longer quote text", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }
}
