//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub info: Rect,
    pub favorites: Rect,
    pub quote: Rect,
    pub categories: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Left panel carries the session info box and the favorites list; right
/// panel carries the quote display with the category bar underneath.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // Main vertical layout: content + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal split: favorites (38%) and quote panel (62%)
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(main_chunks[0]);

    // Left panel: info box + favorites list
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(horizontal_chunks[0]);

    // Right panel: quote display + category bar
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(horizontal_chunks[1]);

    MainLayout {
        info: left_chunks[0],
        favorites: left_chunks[1],
        quote: right_chunks[0],
        categories: right_chunks[1],
        status: main_chunks[1],
        help: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_in_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 50, 10);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 5);
        let popup = centered_popup(area, 50, 10);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_main_layout_covers_screen_height() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_main_layout(area);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 3);
        assert_eq!(
            layout.info.height + layout.favorites.height,
            layout.quote.height + layout.categories.height
        );
    }
}
