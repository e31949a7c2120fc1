//! Five-in-a-row detection
//!
//! Only lines through the last applied move are scanned. Each line is a
//! 9-cell window centered on that move; cells off the board break a run.

use crate::board::{Board, Pos};
use crate::history::Move;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Cells scanned on each side of the last move
pub const WINDOW_RADIUS: i32 = WIN_LENGTH as i32 - 1;

/// Fewest applied moves before either color can have five
/// (Black's fifth stone is the ninth move).
pub const MIN_MOVES_FOR_WIN: usize = 2 * WIN_LENGTH - 1;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Anti-diagonal NE
];

/// Check whether `last_move` completed five (or more) in a row.
pub fn check_win(board: &Board, last_move: Move) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| longest_run(board, last_move, dx, dy).len() >= WIN_LENGTH)
}

/// Positions of the winning run through `last_move`, if any.
pub fn winning_line(board: &Board, last_move: Move) -> Option<Vec<Pos>> {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| longest_run(board, last_move, dx, dy))
        .find(|run| run.len() >= WIN_LENGTH)
}

/// Longest unbroken run of `last_move.color` inside the window along one
/// direction.
fn longest_run(board: &Board, last_move: Move, dx: i32, dy: i32) -> Vec<Pos> {
    let size = board.size();
    let mut best: Vec<Pos> = Vec::new();
    let mut run: Vec<Pos> = Vec::with_capacity(2 * WINDOW_RADIUS as usize + 1);

    for step in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let matching = last_move
            .pos
            .offset(dx, dy, step, size)
            .filter(|&p| matches!(board.get(p), Ok(s) if s == last_move.color));

        match matching {
            Some(p) => {
                run.push(p);
                if run.len() > best.len() {
                    best.clone_from(&run);
                }
            }
            None => run.clear(),
        }
    }
    best
}
