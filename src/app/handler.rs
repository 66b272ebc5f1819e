use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::keypad::ButtonToken;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(w, h) => {
            state.viewport = Rect::new(0, 0, w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => {
            state.press(ButtonToken::Clear);
            vec![]
        }
        KeyCode::Char('?') => {
            state.config.ui.show_help = !state.config.ui.show_help;
            state.dirty = true;
            vec![]
        }
        KeyCode::Char(c) => {
            match ButtonToken::try_from(c) {
                Ok(token) => state.press(token),
                Err(e) => tracing::trace!(error = %e, "key ignored"),
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let area = layout::compute_layout(state.viewport, state.config.ui.show_help).keypad;
    if let Some(token) = state.keypad.hit_test(area, mouse.column, mouse.row) {
        state.press(token);
    }
}
