//! Screen layout definitions for the TUI
//!
//! The shell splits the screen into a fixed-width sidebar, the page content
//! area, and a one-line status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the sidebar column, including its border
pub const SIDEBAR_WIDTH: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Sidebar menu column
    pub sidebar: Rect,

    /// Active page content
    pub content: Rect,

    /// One-line status/notice bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Min(3),    // Sidebar + content
        Constraint::Length(1), // Status line
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(20),
    ])
    .split(rows[0]);

    ScreenAreas {
        sidebar: columns[0],
        content: columns[1],
        status: rows[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shape() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.content.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 29);
    }

    #[test]
    fn test_layout_areas_cover_height() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);
        assert_eq!(areas.sidebar.height + areas.status.height, area.height);
        assert_eq!(areas.sidebar.height, areas.content.height);
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let area = Rect::new(0, 0, 10, 4);
        let areas = create(area);
        assert!(areas.content.width <= area.width);
    }
}
