use crate::config::AppConfig;
use crate::keypad::{ButtonToken, Keypad, KeypadTextController};
use chrono::Local;
use ratatui::layout::Rect;

/// A button drawn as pressed until `ticks_left` runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub token: ButtonToken,
    pub ticks_left: u8,
}

pub struct AppState {
    pub config: AppConfig,
    pub controller: KeypadTextController,
    pub keypad: Keypad,
    pub highlight: Option<Highlight>,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    /// Status bar clock as last rendered.
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Rect) -> Self {
        let clock = config.ui.format_clock(&Local::now());
        Self {
            config,
            controller: KeypadTextController::new(),
            keypad: Keypad,
            highlight: None,
            viewport,
            clock,
            should_quit: false,
            dirty: true,
        }
    }

    /// Forward a button press to the controller and light the button up.
    pub fn press(&mut self, token: ButtonToken) {
        self.controller.press(token);
        tracing::debug!(?token, text = self.controller.display_text(), "button pressed");
        let ticks = self.config.ui.highlight_ticks;
        self.highlight = (ticks > 0).then_some(Highlight {
            token,
            ticks_left: ticks,
        });
        self.dirty = true;
    }

    pub fn highlighted(&self) -> Option<ButtonToken> {
        self.highlight.map(|h| h.token)
    }

    /// Count the highlight down by one tick and refresh the clock.
    pub fn tick(&mut self) {
        let clock = self.config.ui.format_clock(&Local::now());
        if clock != self.clock {
            self.clock = clock;
            self.dirty = true;
        }

        if let Some(h) = self.highlight.as_mut() {
            h.ticks_left = h.ticks_left.saturating_sub(1);
            if h.ticks_left == 0 {
                self.highlight = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        let count = self.controller.entered().chars().count();
        match count {
            0 => "Ready".to_string(),
            1 => "1 symbol".to_string(),
            n => format!("{} symbols", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::controller::PROMPT;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_press_updates_text_and_highlight() {
        let mut s = state();
        s.dirty = false;
        s.press(ButtonToken::Four);
        assert_eq!(s.controller.display_text(), "電話號碼：4");
        assert_eq!(s.highlighted(), Some(ButtonToken::Four));
        assert!(s.dirty);
    }

    #[test]
    fn test_highlight_expires_after_configured_ticks() {
        let mut s = state();
        s.press(ButtonToken::Star);
        for _ in 0..3 {
            s.tick();
            assert_eq!(s.highlighted(), Some(ButtonToken::Star));
        }
        s.dirty = false;
        s.tick();
        assert_eq!(s.highlighted(), None);
        assert!(s.dirty);
    }

    #[test]
    fn test_tick_redraws_when_clock_changes() {
        let mut s = state();
        s.clock = "--:--".to_string();
        s.dirty = false;
        s.tick();
        assert!(s.dirty);
        assert_ne!(s.clock, "--:--");
    }

    #[test]
    fn test_invalid_clock_format_does_not_panic() {
        let mut cfg = AppConfig::default();
        cfg.ui.clock_format = "%Q".to_string();
        let mut s = AppState::new(cfg, Rect::new(0, 0, 80, 24));
        s.tick();
        assert_eq!(s.clock.len(), "12:30".len());
    }

    #[test]
    fn test_zero_highlight_ticks_disables_highlight() {
        let mut cfg = AppConfig::default();
        cfg.ui.highlight_ticks = 0;
        let mut s = AppState::new(cfg, Rect::new(0, 0, 80, 24));
        s.press(ButtonToken::One);
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_status_line_counts_symbols() {
        let mut s = state();
        assert_eq!(s.status_line(), "Ready");
        s.press(ButtonToken::One);
        assert_eq!(s.status_line(), "1 symbol");
        s.press(ButtonToken::Star);
        assert_eq!(s.status_line(), "2 symbols");
        s.press(ButtonToken::Clear);
        assert_eq!(s.status_line(), "Ready");
        assert_eq!(s.controller.display_text(), PROMPT);
    }
}
