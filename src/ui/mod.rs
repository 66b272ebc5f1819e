mod display;
mod keypad;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

const HELP_KEYS: &[(&str, &str)] = &[
    ("0-9 *", "dial"),
    ("c/Del", "clear"),
    ("click", "press"),
    ("?", "help"),
    ("q/Esc", "quit"),
];

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area(), state.config.ui.show_help);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    if let Some(help) = app_layout.help {
        render_help(frame, help);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, desc) in HELP_KEYS {
        spans.push(Span::styled(format!(" {}", key), Theme::help_key()));
        spans.push(Span::styled(format!(" {} ", desc), Theme::help_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
