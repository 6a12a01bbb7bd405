//! NeoPawn - random-walk pawn simulation
//!
//! A walker starts in the corner of an N×N lattice scattered with M pieces.
//! Each step it jumps diagonally onto a piece if it can, eating it, and
//! otherwise steps orthogonally onto an empty cell. A run reports how many
//! steps the walker needed to eat every piece.

pub mod core;
pub mod simulation;
pub mod spatial;

pub use crate::core::{NeoPawnError, Position, Result, SimulationConfig, TrapAccounting};
pub use crate::simulation::{run, time_finder, RunOutcome, Simulation};
pub use crate::spatial::Lattice;
