//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use shiftlog_app::AppState;

use crate::theme::palette;
use crate::widgets::splash::{SPLASH_HEIGHT, SPLASH_WIDTH};
use crate::{layout, widgets};

/// Render the complete UI.
///
/// The header, tab switcher and active form are always drawn; the splash
/// overlay is drawn on top while it is visible.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::AppHeader::new(), areas.header);
    frame.render_widget(widgets::TabBar::new(state.active_tab), areas.tabs);
    frame.render_widget(
        widgets::FormView::new(state.form.entry()).title(state.active_tab.label()),
        areas.body,
    );
    frame.render_widget(widgets::Footer::new(&state.backend_url), areas.footer);

    if state.splash.is_visible() {
        let popup = layout::centered_rect(SPLASH_WIDTH, SPLASH_HEIGHT, area);
        frame.render_widget(widgets::SplashOverlay::new(state.splash.progress()), popup);
    }
}
