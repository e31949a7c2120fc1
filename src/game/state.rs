//! Mutable game state: board, move log, turn and presentation mode

use tracing::debug;

use super::{RenderMode, Snapshot};
use crate::board::{Board, Stone};
use crate::error::BoardError;
use crate::history::{Move, MoveHistory};

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub history: MoveHistory,
    pub current_turn: Stone,
    pub render_mode: RenderMode,
}

impl GameState {
    pub fn new(board_size: usize, render_mode: RenderMode) -> Self {
        Self {
            board: Board::new(board_size),
            history: MoveHistory::with_capacity(board_size * board_size),
            current_turn: Stone::Black,
            render_mode,
        }
    }

    /// Clear the board and the log; Black moves next.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current_turn = Stone::Black;
    }

    /// Place the current color at `(x, y)`.
    ///
    /// Returns `None` without touching anything when the coordinate is off
    /// the board or the cell is occupied.
    pub fn place_stone(&mut self, x: i32, y: i32) -> Option<Move> {
        let Some(pos) = self.board.checked_pos(x, y) else {
            debug!(x, y, "rejected move: out of bounds");
            return None;
        };
        if !self.board.is_empty(pos) {
            debug!(x, y, "rejected move: cell occupied");
            return None;
        }

        let mv = Move::new(pos, self.current_turn);
        self.board.set(pos, mv.color).ok()?;
        self.history.record(mv);
        self.current_turn = mv.color.opponent();
        Some(mv)
    }

    /// Take back the last applied move. The undone color moves next.
    pub fn undo(&mut self) -> Result<Option<Move>, BoardError> {
        let Some(mv) = self.history.undo() else {
            return Ok(None);
        };
        self.board.set(mv.pos, Stone::Empty)?;
        self.current_turn = mv.color;
        Ok(Some(mv))
    }

    /// Re-apply the next redo entry with its stored color.
    pub fn redo(&mut self) -> Result<Option<Move>, BoardError> {
        let Some(mv) = self.history.redo() else {
            return Ok(None);
        };
        self.board.set(mv.pos, mv.color)?;
        self.current_turn = mv.color.opponent();
        Ok(Some(mv))
    }

    pub fn toggle_render_mode(&mut self) -> RenderMode {
        self.render_mode = self.render_mode.toggled();
        self.render_mode
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            next_turn: self.current_turn,
            render_mode: self.render_mode,
            last_move: self.history.last_applied(),
            move_count: self.history.applied(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_BOARD_SIZE, RenderMode::default())
    }
}
