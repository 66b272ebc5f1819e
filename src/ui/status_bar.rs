use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(
        Paragraph::new(status_line(state, &state.clock, area.width)),
        area,
    );
}

fn status_line(state: &AppState, clock: &str, width: u16) -> Line<'static> {
    let left = format!(" {} ", state.status_line());
    let right = format!(" {} ", clock);

    // Pad to fill remaining space
    let used = left.width() + right.width();
    let remaining = usize::from(width).saturating_sub(used);

    Line::from(vec![
        Span::styled(left, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(right, Theme::status_clock()),
    ])
}
