//! Author filter dialog component
//!
//! Allows selecting the author the random generator draws from.

use crate::action::Action;
use crate::component::Component;
use crate::model::quote::{AuthorFilter, ALL_AUTHORS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Author filter dialog
pub struct AuthorFilterDialog {
    /// Distinct authors available in the loaded quotes
    pub authors: Vec<String>,
    /// Selected row index; row 0 is "All Authors"
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Filter active when the dialog opened
    pub current_filter: AuthorFilter,
}

impl Default for AuthorFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            authors: Vec::new(),
            selected_index: 0,
            list_state,
            current_filter: AuthorFilter::All,
        }
    }

    /// Set the available authors and pre-select the active filter
    pub fn set_authors(&mut self, authors: Vec<String>, current_filter: &AuthorFilter) {
        self.authors = authors;
        self.current_filter = current_filter.clone();

        self.selected_index = match current_filter {
            AuthorFilter::All => 0,
            AuthorFilter::Author(name) => self
                .authors
                .iter()
                .position(|a| a == name)
                .map(|idx| idx + 1) // +1 because of the "All Authors" row
                .unwrap_or(0),
        };
        self.list_state.select(Some(self.selected_index));
    }

    /// Get the selected author (None means "All Authors")
    pub fn get_selected_author(&self) -> Option<&str> {
        if self.selected_index == 0 {
            None
        } else {
            self.authors
                .get(self.selected_index - 1)
                .map(|a| a.as_str())
        }
    }

    fn select_next(&mut self) {
        // Rows: "All Authors" + one per author
        if self.selected_index < self.authors.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for AuthorFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('a') => Some(Action::CloseModal),
            KeyCode::Enter => match self.get_selected_author() {
                Some(author) => Some(Action::SetAuthorFilter(author.to_string())),
                None => Some(Action::ClearAuthorFilter),
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear entire background
        frame.render_widget(Clear, area);

        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let content_height = if self.authors.is_empty() {
            6
        } else {
            self.authors.len() as u16 + 3
        };
        let popup_height = (content_height + 6)
            .min(area.height.saturating_sub(4))
            .max(12);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Author list / empty message
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header = Paragraph::new(Line::from(vec![Span::styled(
            format!("Current: {}", self.current_filter.label()),
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Author ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        if self.authors.is_empty() {
            let empty_message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No named authors in the loaded quotes",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Quotes without an author are listed as Unknown",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty_message, main_chunks[1]);
        } else {
            // "All Authors" row first, then the sorted author list
            let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
                Span::styled(
                    if self.current_filter.is_all() {
                        "● "
                    } else {
                        "  "
                    },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(ALL_AUTHORS, Style::default().fg(Color::DarkGray)),
            ]))];

            for author in &self.authors {
                let is_current =
                    matches!(&self.current_filter, AuthorFilter::Author(a) if a == author);
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        author.clone(),
                        if is_current {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ])));
            }

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/a ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog_with(authors: &[&str], filter: AuthorFilter) -> AuthorFilterDialog {
        let mut dialog = AuthorFilterDialog::new();
        dialog.set_authors(authors.iter().map(|s| s.to_string()).collect(), &filter);
        dialog
    }

    #[test]
    fn test_row_zero_is_all_authors() {
        let dialog = dialog_with(&["A", "B"], AuthorFilter::All);
        assert_eq!(dialog.selected_index, 0);
        assert_eq!(dialog.get_selected_author(), None);
    }

    #[test]
    fn test_preselects_active_filter() {
        let dialog = dialog_with(&["A", "B"], AuthorFilter::Author("B".to_string()));
        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.get_selected_author(), Some("B"));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut dialog = dialog_with(&["A"], AuthorFilter::All);
        dialog.select_prev();
        assert_eq!(dialog.selected_index, 0);
        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected_index, 1);
    }
}
