//! Tab switcher row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use shiftlog_app::Tab;

use crate::theme::styles;

pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let key = format!("F{}", tab.index() + 1);
            if *tab == self.active {
                spans.push(Span::styled(
                    format!(" {} {} ", key, tab.label()),
                    styles::focused_selected(),
                ));
            } else {
                spans.push(Span::styled(format!(" {} ", key), styles::keybinding()));
                spans.push(Span::styled(
                    format!("{} ", tab.label()),
                    styles::text_secondary(),
                ));
            }
        }
        spans
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.tab_spans())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Style;

    #[test]
    fn test_tab_bar_renders_all_labels() {
        let mut term = TestTerminal::new();
        term.render_widget(TabBar::new(Tab::Production), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("F1 Production"));
        assert!(term.buffer_contains("F2 Packing"));
        assert!(term.buffer_contains("F3 Downtimes"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let bar = TabBar::new(Tab::Packing);
        let highlighted: Vec<String> = bar
            .tab_spans()
            .into_iter()
            .filter(|s| s.style == styles::focused_selected())
            .map(|s| s.content.into_owned())
            .collect();

        assert_eq!(highlighted, vec![" F2 Packing ".to_string()]);
        assert_ne!(styles::focused_selected(), Style::default());
    }
}
