//! Phone keypad layout.
//!
//! ```text
//! [1] [2] [3]
//! [4] [5] [6]
//! [7] [8] [9]
//! [*] [0] [C]
//! ```

use super::token::ButtonToken;
use ratatui::layout::Rect;

pub const ROWS: usize = 4;
pub const COLS: usize = 3;

static LAYOUT: [[ButtonToken; COLS]; ROWS] = [
    [ButtonToken::One, ButtonToken::Two, ButtonToken::Three],
    [ButtonToken::Four, ButtonToken::Five, ButtonToken::Six],
    [ButtonToken::Seven, ButtonToken::Eight, ButtonToken::Nine],
    [ButtonToken::Star, ButtonToken::Zero, ButtonToken::Clear],
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Keypad;

impl Keypad {
    pub fn button_at(&self, row: usize, col: usize) -> Option<ButtonToken> {
        LAYOUT.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Buttons in row-major order with their `(row, col)`.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), ButtonToken)> {
        LAYOUT.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, token)| ((row, col), *token))
        })
    }

    /// Map a click at `(x, y)` to the button drawn there. `area` is the
    /// whole keypad widget including its one-cell border.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonToken> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = button_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.button_at(row, col)
    }
}

/// Width and height of a single button cell inside a bordered `area`.
pub fn button_size(area: Rect) -> (u16, u16) {
    let inner_w = area.width.saturating_sub(2);
    let inner_h = area.height.saturating_sub(2);
    (inner_w / COLS as u16, inner_h / ROWS as u16)
}
