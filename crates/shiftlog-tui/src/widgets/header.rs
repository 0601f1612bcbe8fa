//! Application header: title and subtitle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Production Daily Count";
pub const APP_SUBTITLE: &str = "Data is saved to the backend and exported per shift";

#[derive(Debug, Default)]
pub struct AppHeader;

impl AppHeader {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for AppHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![Span::raw(" "), Span::styled(APP_TITLE, styles::accent_bold())]),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(APP_SUBTITLE, styles::text_secondary()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_subtitle() {
        let mut term = TestTerminal::new();
        term.render_widget(AppHeader::new(), Rect::new(0, 0, 80, 4));

        assert!(term.buffer_contains("Production Daily Count"));
        assert!(term.buffer_contains("Data is saved to the backend and exported per shift"));
    }

    #[test]
    fn test_header_tolerates_tiny_area() {
        let mut term = TestTerminal::with_size(10, 2);
        term.render_widget(AppHeader::new(), Rect::new(0, 0, 10, 2));
        assert!(!term.buffer_contains("Production"));
    }
}
