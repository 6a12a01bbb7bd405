//! Move selection - the walker's single decision rule
//!
//! Priority order, evaluated once per step:
//! 1. Jump diagonally onto a piece (uniformly among occupied diagonals)
//! 2. Step orthogonally onto an empty cell (uniformly among empty neighbors)
//! 3. Otherwise the walker is trapped and stays put
//!
//! The selector only decides. Consuming the jumped-on piece is the caller's job.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::types::{Offset, Position, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
use crate::spatial::lattice::Lattice;

/// Outcome of one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub next: Position,
    pub was_jump: bool,
    pub trapped: bool,
}

impl MoveDecision {
    fn jump(next: Position) -> Self {
        Self {
            next,
            was_jump: true,
            trapped: false,
        }
    }

    fn step(next: Position) -> Self {
        Self {
            next,
            was_jump: false,
            trapped: false,
        }
    }

    fn trapped(at: Position) -> Self {
        Self {
            next: at,
            was_jump: false,
            trapped: true,
        }
    }
}

/// Neighbors of `position` reachable through `offsets` that satisfy `keep`, in offset order
fn neighbors_where(
    position: Position,
    lattice: &Lattice,
    offsets: &[Offset],
    keep: impl Fn(Position) -> bool,
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&o| position.offset(o, lattice.size()))
        .filter(|&p| keep(p))
        .collect()
}

/// Occupied diagonal neighbors, in jump-check order
pub fn jump_targets(position: Position, lattice: &Lattice) -> Vec<Position> {
    neighbors_where(position, lattice, &DIAGONAL_OFFSETS, |p| lattice.is_occupied(p))
}

/// Empty orthogonal neighbors, in step-check order
pub fn step_targets(position: Position, lattice: &Lattice) -> Vec<Position> {
    neighbors_where(position, lattice, &ORTHOGONAL_OFFSETS, |p| lattice.is_empty(p))
}

/// Decide where the walker at `position` goes next
pub fn decide<R: Rng + ?Sized>(
    position: Position,
    lattice: &Lattice,
    rng: &mut R,
) -> MoveDecision {
    if let Some(&target) = jump_targets(position, lattice).choose(rng) {
        return MoveDecision::jump(target);
    }

    match step_targets(position, lattice).choose(rng) {
        Some(&target) => MoveDecision::step(target),
        None => MoveDecision::trapped(position),
    }
}
