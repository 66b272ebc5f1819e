//! Keypad core: the button set, its grid, and the text it edits.
//!
//! Nothing in here knows about the terminal. The host forwards button
//! presses as [`ButtonToken`]s and renders [`KeypadTextController::display_text`]
//! after each one.

pub mod controller;
pub mod grid;
pub mod token;

pub use controller::KeypadTextController;
pub use grid::Keypad;
pub use token::{ButtonToken, KeyAction};
