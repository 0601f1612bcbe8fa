//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title + subtitle + bottom border
const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and subtitle
    pub header: Rect,

    /// Tab switcher row
    pub tabs: Rect,

    /// Active form
    pub body: Rect,

    /// Backend URL and key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.tabs.y, 4);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.body.y, 5);
        assert_eq!(layout.body.height, 18);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let l = create(area);
        assert_eq!(
            l.header.height + l.tabs.height + l.body.height + l.footer.height,
            area.height
        );
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(40, 10, area);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 6);
        let popup = centered_rect(52, 9, area);
        assert_eq!(popup, area);
    }
}
