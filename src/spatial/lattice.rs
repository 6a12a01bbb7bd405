//! Square occupancy lattice

use crate::core::error::{NeoPawnError, Result};
use crate::core::types::Position;

/// N×N grid of binary cells; `true` means a piece sits there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
    cells: Vec<bool>,
}

impl Lattice {
    /// Empty lattice of side `size`
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(NeoPawnError::InvalidDimension(size));
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Lattice with pieces at exactly the given positions
    ///
    /// Duplicate positions collapse into a single piece.
    pub fn from_pieces(size: usize, pieces: &[Position]) -> Result<Self> {
        let mut lattice = Self::new(size)?;
        for &pos in pieces {
            if !lattice.contains(pos) {
                return Err(NeoPawnError::OutOfBounds(pos));
            }
            lattice.place(pos);
        }
        Ok(lattice)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Whether a piece sits at `pos`; out-of-bounds cells hold nothing
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[pos.to_index(self.size)]
    }

    /// In-bounds cell without a piece
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && !self.cells[pos.to_index(self.size)]
    }

    #[inline]
    pub fn place(&mut self, pos: Position) {
        if self.contains(pos) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = true;
        }
    }

    /// Remove the piece at `pos`, returning whether one was there
    #[inline]
    pub fn consume(&mut self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let idx = pos.to_index(self.size);
        std::mem::replace(&mut self.cells[idx], false)
    }

    /// Number of cells still holding a piece
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn pieces(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| Position::from_index(i, size))
    }
}
