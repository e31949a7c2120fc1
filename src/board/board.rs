//! Bounds-checked N x N grid

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::BoardError;

/// Game board: row-major grid of cells, size fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Resolve signed input coordinates to a position on this board
    #[inline]
    pub fn checked_pos(&self, x: i32, y: i32) -> Option<Pos> {
        if Pos::is_valid(x as i64, y as i64, self.size) {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    fn index(&self, pos: Pos) -> Result<usize, BoardError> {
        if self.contains(pos) {
            Ok(pos.to_index(self.size))
        } else {
            Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                size: self.size,
            })
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<Stone, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    /// Set a cell to a color or back to `Empty`.
    /// Legality of the move is the caller's concern.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        let idx = self.index(pos)?;
        self.cells[idx] = stone;
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Ok(Stone::Empty))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|s| s.is_empty())
    }

    /// Iterate every occupied cell
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(idx, &s)| (Pos::from_index(idx, self.size), s))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(15);
        assert_eq!(board.size(), 15);
        assert!(board.is_board_empty());
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(15);
        board.set(Pos::new(3, 7), Stone::White).unwrap();
        assert_eq!(board.get(Pos::new(3, 7)).unwrap(), Stone::White);
        assert_eq!(board.get(Pos::new(7, 3)).unwrap(), Stone::Empty);

        board.set(Pos::new(3, 7), Stone::Empty).unwrap();
        assert!(board.is_empty(Pos::new(3, 7)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(15);
        let err = board.get(Pos::new(15, 0)).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { x: 15, y: 0, size: 15 });
        assert!(board.get(Pos::new(0, 15)).is_err());
    }

    #[test]
    fn test_set_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::new(9);
        assert!(board.set(Pos::new(9, 9), Stone::Black).is_err());
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_out_of_bounds_is_not_empty() {
        let board = Board::new(9);
        assert!(!board.is_empty(Pos::new(100, 0)));
    }

    #[test]
    fn test_reset_clears_all() {
        let mut board = Board::new(15);
        board.set(Pos::new(0, 0), Stone::Black).unwrap();
        board.set(Pos::new(14, 14), Stone::White).unwrap();
        assert_eq!(board.stone_count(), 2);

        board.reset();
        assert!(board.is_board_empty());
        assert_eq!(board.size(), 15);
    }

    #[test]
    fn test_checked_pos() {
        let board = Board::new(15);
        assert_eq!(board.checked_pos(0, 0), Some(Pos::new(0, 0)));
        assert_eq!(board.checked_pos(14, 3), Some(Pos::new(14, 3)));
        assert_eq!(board.checked_pos(-1, 3), None);
        assert_eq!(board.checked_pos(3, 15), None);
    }

    #[test]
    fn test_stones_iterator() {
        let mut board = Board::new(5);
        board.set(Pos::new(1, 0), Stone::Black).unwrap();
        board.set(Pos::new(0, 2), Stone::White).unwrap();
        let stones: Vec<_> = board.stones().collect();
        assert_eq!(
            stones,
            vec![(Pos::new(1, 0), Stone::Black), (Pos::new(0, 2), Stone::White)]
        );
    }
}
