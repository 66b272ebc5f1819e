use thiserror::Error;

/// One of the twelve keypad buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonToken {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Star,
    Clear,
}

/// What pressing a button does to the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Append(char),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no keypad button for {0:?}")]
    Unrecognized(char),
}

impl ButtonToken {
    #[cfg(test)]
    pub const ALL: [ButtonToken; 12] = [
        ButtonToken::Zero,
        ButtonToken::One,
        ButtonToken::Two,
        ButtonToken::Three,
        ButtonToken::Four,
        ButtonToken::Five,
        ButtonToken::Six,
        ButtonToken::Seven,
        ButtonToken::Eight,
        ButtonToken::Nine,
        ButtonToken::Star,
        ButtonToken::Clear,
    ];

    pub fn action(self) -> KeyAction {
        match self {
            ButtonToken::Zero => KeyAction::Append('0'),
            ButtonToken::One => KeyAction::Append('1'),
            ButtonToken::Two => KeyAction::Append('2'),
            ButtonToken::Three => KeyAction::Append('3'),
            ButtonToken::Four => KeyAction::Append('4'),
            ButtonToken::Five => KeyAction::Append('5'),
            ButtonToken::Six => KeyAction::Append('6'),
            ButtonToken::Seven => KeyAction::Append('7'),
            ButtonToken::Eight => KeyAction::Append('8'),
            ButtonToken::Nine => KeyAction::Append('9'),
            ButtonToken::Star => KeyAction::Append('*'),
            ButtonToken::Clear => KeyAction::Reset,
        }
    }

    /// Text drawn on the button face.
    pub fn label(self) -> &'static str {
        match self {
            ButtonToken::Zero => "0",
            ButtonToken::One => "1",
            ButtonToken::Two => "2",
            ButtonToken::Three => "3",
            ButtonToken::Four => "4",
            ButtonToken::Five => "5",
            ButtonToken::Six => "6",
            ButtonToken::Seven => "7",
            ButtonToken::Eight => "8",
            ButtonToken::Nine => "9",
            ButtonToken::Star => "*",
            ButtonToken::Clear => "C",
        }
    }
}

impl TryFrom<char> for ButtonToken {
    type Error = TokenError;

    /// Only symbols that end up in the display text convert; the clear
    /// button has no character of its own.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(ButtonToken::Zero),
            '1' => Ok(ButtonToken::One),
            '2' => Ok(ButtonToken::Two),
            '3' => Ok(ButtonToken::Three),
            '4' => Ok(ButtonToken::Four),
            '5' => Ok(ButtonToken::Five),
            '6' => Ok(ButtonToken::Six),
            '7' => Ok(ButtonToken::Seven),
            '8' => Ok(ButtonToken::Eight),
            '9' => Ok(ButtonToken::Nine),
            '*' => Ok(ButtonToken::Star),
            other => Err(TokenError::Unrecognized(other)),
        }
    }
}
