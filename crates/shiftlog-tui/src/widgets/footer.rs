//! Footer: backend URL and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const KEY_HINTS: [(&str, &str); 5] = [
    ("F1-F3", "Tabs"),
    ("Tab", "Next"),
    ("←→", "Choose"),
    ("^S", "Submit"),
    ("^Q", "Quit"),
];

pub struct Footer<'a> {
    backend_url: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(backend_url: &'a str) -> Self {
        Self { backend_url }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" ● ", styles::accent()),
            Span::styled(self.backend_url, styles::text_secondary()),
            Span::styled(" │", styles::text_muted()),
        ];
        for (key, action) in KEY_HINTS {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_shows_backend_url_and_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(Footer::new("http://localhost:8000"), Rect::new(0, 0, 80, 1));

        let line = term.line_containing("http://localhost:8000").unwrap();
        assert!(line.contains("^S Submit"));
        assert!(line.contains("^Q Quit"));
    }
}
