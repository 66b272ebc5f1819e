use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Keypad widget size: 3 columns of 7 and 4 rows of 3, plus the border.
pub const KEYPAD_WIDTH: u16 = 23;
pub const KEYPAD_HEIGHT: u16 = 14;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub help: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_help: bool) -> AppLayout {
    let help_height = if show_help { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Display
            Constraint::Min(6),              // Keypad
            Constraint::Length(help_height), // Help line
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    AppLayout {
        display: chunks[0],
        keypad: center(chunks[1], KEYPAD_WIDTH, KEYPAD_HEIGHT),
        help: show_help.then_some(chunks[2]),
        status_bar: chunks[3],
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn center(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}
