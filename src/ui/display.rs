use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Phone ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Leave one column for the cursor after the last digit
    let room = usize::from(inner.width.saturating_sub(1));
    let (visible, width) = visible_tail(state.controller.display_text(), room);

    frame.render_widget(
        Paragraph::new(Span::styled(visible, Theme::display_text())),
        inner,
    );

    let cursor_x = inner.x + width as u16;
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
}

/// The longest suffix of `text` that fits in `max_width` terminal columns,
/// along with its width. Only the rendering is clipped; the text is not.
pub fn visible_tail(text: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    (&text[start..], width)
}
