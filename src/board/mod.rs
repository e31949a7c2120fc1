//! Board representation for Gobang

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board that can hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board whose columns can be labeled A-Z
pub const MAX_BOARD_SIZE: usize = 26;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid coordinate: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y * size + self.x
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: idx % size,
            y: idx / size,
        }
    }

    /// Step `steps` times along `(dx, dy)`, returning `None` when the
    /// result would leave a board of the given size.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32, size: usize) -> Option<Pos> {
        let x = self.x as i64 + (dx * steps) as i64;
        let y = self.y as i64 + (dy * steps) as i64;
        if Self::is_valid(x, y, size) {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(x: i64, y: i64, size: usize) -> bool {
        x >= 0 && x < size as i64 && y >= 0 && y < size as i64
    }
}
