use crate::app::state::AppState;
use crate::keypad::grid::button_size;
use crate::keypad::{ButtonToken, Keypad, KeyAction};
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let widget = KeypadWidget {
        keypad: &state.keypad,
        highlighted: state.highlighted(),
    };
    frame.render_widget(widget, area);
}

/// The 4x3 button grid. Cell geometry matches [`Keypad::hit_test`].
pub struct KeypadWidget<'a> {
    pub keypad: &'a Keypad,
    pub highlighted: Option<ButtonToken>,
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border())
            .render(area, buf);

        let (btn_width, btn_height) = button_size(area);
        // Too small to draw "[x]" labels
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for ((row, col), token) in self.keypad.buttons_with_positions() {
            let style = if self.highlighted == Some(token) {
                Theme::pressed_button()
            } else {
                button_style(token)
            };

            let label = format!("[{}]", token.label());
            let x = inner_x + col as u16 * btn_width + (btn_width - label.len() as u16) / 2;
            let y = inner_y + row as u16 * btn_height + btn_height / 2;
            buf.set_span(x, y, &Span::styled(label, style), btn_width);
        }
    }
}

fn button_style(token: ButtonToken) -> Style {
    match token.action() {
        KeyAction::Reset => Theme::clear_button(),
        KeyAction::Append('*') => Theme::star_button(),
        KeyAction::Append(_) => Theme::digit_button(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::{KEYPAD_HEIGHT, KEYPAD_WIDTH};

    fn draw(highlighted: Option<ButtonToken>) -> Buffer {
        let area = Rect::new(0, 0, KEYPAD_WIDTH, KEYPAD_HEIGHT);
        let mut buf = Buffer::empty(area);
        KeypadWidget {
            keypad: &Keypad,
            highlighted,
        }
        .render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_rows_are_phone_layout() {
        let buf = draw(None);
        // Button rows are 3 tall with the label in the middle line
        assert!(row_text(&buf, 2).contains("[1]    [2]    [3]"));
        assert!(row_text(&buf, 5).contains("[4]    [5]    [6]"));
        assert!(row_text(&buf, 8).contains("[7]    [8]    [9]"));
        assert!(row_text(&buf, 11).contains("[*]    [0]    [C]"));
    }

    #[test]
    fn test_highlighted_button_is_styled() {
        let buf = draw(Some(ButtonToken::Five));
        // "[5]" starts at column 10 of the middle row, "[4]" at column 3
        assert_eq!(buf[(11, 5)].symbol(), "5");
        assert_eq!(buf[(11, 5)].bg, Color::Yellow);
        assert_eq!(buf[(4, 5)].symbol(), "4");
        assert_ne!(buf[(4, 5)].bg, Color::Yellow);
    }

    #[test]
    fn test_tiny_area_draws_no_labels() {
        let area = Rect::new(0, 0, 8, 6);
        let mut buf = Buffer::empty(area);
        KeypadWidget {
            keypad: &Keypad,
            highlighted: None,
        }
        .render(area, &mut buf);
        let all: String = (0..6).map(|y| row_text(&buf, y)).collect();
        assert!(!all.contains("[1]"));
    }
}
