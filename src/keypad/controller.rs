//! The text a keypad edits.
//!
//! Two transitions only: append one symbol, or reset to [`PROMPT`]. Both
//! are total. There is no length cap; the display grows for as long as
//! digits keep coming.

use super::token::{ButtonToken, KeyAction};

/// Text shown before any digits ("Phone number:").
pub const PROMPT: &str = "電話號碼：";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadTextController {
    text: String,
}

impl Default for KeypadTextController {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadTextController {
    pub fn new() -> Self {
        Self {
            text: PROMPT.to_string(),
        }
    }

    /// Apply one button press.
    pub fn press(&mut self, token: ButtonToken) {
        match token.action() {
            KeyAction::Append(c) => self.on_digit_or_symbol(c),
            KeyAction::Reset => self.on_clear(),
        }
    }

    /// Append a digit or `*`. Anything else is dropped without touching
    /// the display.
    pub fn on_digit_or_symbol(&mut self, symbol: char) {
        if let Err(e) = ButtonToken::try_from(symbol) {
            tracing::debug!(error = %e, "ignoring keypad input");
            return;
        }
        self.text.push(symbol);
    }

    pub fn on_clear(&mut self) {
        self.text.clear();
        self.text.push_str(PROMPT);
    }

    pub fn display_text(&self) -> &str {
        &self.text
    }

    /// Symbols entered since the last clear.
    pub fn entered(&self) -> &str {
        // The prompt is only ever replaced wholesale, so the prefix is always there.
        self.text.strip_prefix(PROMPT).unwrap_or(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn symbol_strategy() -> impl Strategy<Value = char> {
        prop_oneof![prop::char::range('0', '9'), Just('*')]
    }

    #[test]
    fn test_initial_state_is_prompt() {
        let ctl = KeypadTextController::new();
        assert_eq!(ctl.display_text(), "電話號碼：");
        assert_eq!(ctl.entered(), "");
    }

    #[test]
    fn test_scenario_digits_append_in_order() {
        let mut ctl = KeypadTextController::new();
        ctl.on_digit_or_symbol('1');
        ctl.on_digit_or_symbol('2');
        ctl.on_digit_or_symbol('3');
        assert_eq!(ctl.display_text(), "電話號碼：123");
        assert_eq!(ctl.entered(), "123");
    }

    #[test]
    fn test_scenario_clear_after_star() {
        let mut ctl = KeypadTextController::new();
        ctl.on_digit_or_symbol('9');
        ctl.on_digit_or_symbol('*');
        assert_eq!(ctl.display_text(), "電話號碼：9*");
        ctl.on_clear();
        assert_eq!(ctl.display_text(), "電話號碼：");
    }

    #[test]
    fn test_fifty_digits_are_not_truncated() {
        let mut ctl = KeypadTextController::new();
        for i in 0..50u32 {
            let c = char::from_digit(i % 10, 10).unwrap();
            ctl.on_digit_or_symbol(c);
        }
        assert_eq!(
            ctl.display_text().chars().count(),
            PROMPT.chars().count() + 50
        );
        assert_eq!(ctl.entered().len(), 50);
    }

    #[test]
    fn test_unrecognized_symbol_is_noop() {
        let mut ctl = KeypadTextController::new();
        ctl.on_digit_or_symbol('5');
        let before = ctl.clone();
        for c in ['#', 'x', '\n', '＊'] {
            ctl.on_digit_or_symbol(c);
        }
        assert_eq!(ctl, before);
    }

    #[test]
    fn test_press_dispatches_every_token() {
        let mut ctl = KeypadTextController::new();
        for token in ButtonToken::ALL {
            ctl.press(token);
        }
        // Clear is last in ALL, so everything before it is wiped.
        assert_eq!(ctl.display_text(), PROMPT);

        ctl.press(ButtonToken::Star);
        ctl.press(ButtonToken::Zero);
        assert_eq!(ctl.display_text(), "電話號碼：*0");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = KeypadTextController::new();
        once.on_digit_or_symbol('7');
        let mut twice = once.clone();
        once.on_clear();
        twice.on_clear();
        twice.on_clear();
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn prop_symbols_concatenate_after_prompt(
            symbols in prop::collection::vec(symbol_strategy(), 0..200)
        ) {
            let mut ctl = KeypadTextController::new();
            for &c in &symbols {
                ctl.on_digit_or_symbol(c);
            }
            let expected: String = PROMPT.chars().chain(symbols.iter().copied()).collect();
            prop_assert_eq!(ctl.display_text(), expected.as_str());
        }

        #[test]
        fn prop_clear_always_restores_prompt(
            before in prop::collection::vec(symbol_strategy(), 0..64)
        ) {
            let mut ctl = KeypadTextController::new();
            for c in before {
                ctl.on_digit_or_symbol(c);
            }
            ctl.on_clear();
            prop_assert_eq!(ctl.display_text(), PROMPT);
        }
    }
}
