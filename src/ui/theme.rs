use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn digit_button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn star_button() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn clear_button() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn pressed_button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn help_text() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_clock() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
