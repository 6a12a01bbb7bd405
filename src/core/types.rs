//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation step counter
pub type Step = u32;

/// Cell coordinate on the lattice (0-indexed row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Walker start cell
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// Apply an offset, returning `None` if the result leaves a `size`×`size` lattice
    pub fn offset(&self, offset: Offset, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(offset.dr)?;
        let col = self.col.checked_add_signed(offset.dc)?;
        if row < size && col < size {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Row-major flat index
    #[inline]
    pub fn to_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relative move (row delta, column delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dr: isize,
    pub dc: isize,
}

impl Offset {
    pub const fn new(dr: isize, dc: isize) -> Self {
        Self { dr, dc }
    }
}

/// Jump directions, checked in this order
pub const DIAGONAL_OFFSETS: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(1, 1),
];

/// Step directions, checked in this order
pub const ORTHOGONAL_OFFSETS: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(0, 1),
];
