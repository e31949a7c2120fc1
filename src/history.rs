//! Linear move log with undo/redo
//!
//! Moves live in an arena (`moves`) whose first `len` slots are the
//! logical history. `applied` counts how many of those are currently on
//! the board, so the last applied move sits at `applied - 1` and the
//! slots in `applied..len` are redo entries.
//!
//! Recording a move after an undo shrinks `len` down to `applied` before
//! writing, so the redo branch is dropped without freeing arena slots.

use tracing::debug;

use crate::board::{Pos, Stone};

/// A stone placed by one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub color: Stone,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, color: Stone) -> Self {
        Self { pos, color }
    }
}

/// Pointer-addressed move log. Never inspects the board.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
    len: usize,
    applied: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
            len: 0,
            applied: 0,
        }
    }

    /// Append a move, discarding any redo entries first.
    pub fn record(&mut self, mv: Move) {
        if self.applied < self.len {
            debug!(dropped = self.len - self.applied, "discarding redo branch");
        }
        self.len = self.applied;
        if self.len < self.moves.len() {
            self.moves[self.len] = mv;
        } else {
            self.moves.push(mv);
        }
        self.len += 1;
        self.applied = self.len;
    }

    /// Step back one move. Returns the move that should be removed from
    /// the board, or `None` when nothing is applied.
    pub fn undo(&mut self) -> Option<Move> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        Some(self.moves[self.applied])
    }

    /// Step forward one move. Returns the move that should be placed back
    /// on the board, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        if self.applied == self.len {
            return None;
        }
        let mv = self.moves[self.applied];
        self.applied += 1;
        Some(mv)
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.applied = 0;
    }

    /// Index of the last applied move, `None` for an empty board
    #[inline]
    pub fn pointer(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Number of recorded moves, including redo entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of moves currently on the board
    #[inline]
    pub fn applied(&self) -> usize {
        self.applied
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.applied < self.len
    }

    /// Most recently applied move
    pub fn last_applied(&self) -> Option<Move> {
        self.pointer().map(|i| self.moves[i])
    }

    /// Moves currently on the board, oldest first
    pub fn applied_moves(&self) -> &[Move] {
        &self.moves[..self.applied]
    }

    /// All recorded moves, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}
