//! Game rules for Gobang
//!
//! Five or more stones of one color in an unbroken horizontal, vertical or
//! diagonal line wins. There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, winning_line, MIN_MOVES_FOR_WIN, WINDOW_RADIUS, WIN_LENGTH};
