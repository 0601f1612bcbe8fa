//! Startup splash overlay

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Clear, Gauge, Paragraph, Widget},
};

use super::header::APP_TITLE;
use crate::theme::{palette, styles};

pub const LOADING_TEXT: &str = "Loading your dashboard...";

/// Preferred overlay size
pub const SPLASH_WIDTH: u16 = 52;
pub const SPLASH_HEIGHT: u16 = 9;

/// Title, loading text and a progress bar filled over the splash duration
pub struct SplashOverlay {
    progress: f64,
}

impl SplashOverlay {
    /// `progress` is clamped to `0.0..=1.0`
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
        }
    }
}

impl Widget for SplashOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::glass_block(true).style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 5 || inner.width < 4 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(APP_TITLE)
            .style(styles::accent_bold())
            .alignment(Alignment::Center)
            .render(rows[1], buf);
        Paragraph::new(LOADING_TEXT)
            .style(styles::text_secondary())
            .alignment(Alignment::Center)
            .render(rows[3], buf);

        let bar = Rect {
            x: rows[5].x + 2,
            width: rows[5].width.saturating_sub(4),
            ..rows[5]
        };
        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::POPUP_BG))
            .ratio(self.progress)
            .label("")
            .use_unicode(true)
            .render(bar, buf);
    }
}
