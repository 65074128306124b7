//! Screen regions and popup placement

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub active: Rect,
    pub completed: Rect,
    pub status: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Header (3 lines), active tasks, completed tasks, status bar (1 line)
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let [header, active, completed, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Percentage(60),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        MainAreas {
            header,
            active,
            completed,
            status,
        }
    }

    /// Popup taking a percentage of `area` in both directions
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
    }

    /// Popup with a percentage width and a fixed number of lines
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Length(height_lines))
    }

    fn center(area: Rect, width: Constraint, height: Constraint) -> Rect {
        let [row] = Layout::vertical([height]).flex(Flex::Center).areas(area);
        let [popup] = Layout::horizontal([width]).flex(Flex::Center).areas(row);
        popup
    }
}
