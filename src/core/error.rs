use thiserror::Error;

use crate::core::types::Position;

#[derive(Error, Debug)]
pub enum NeoPawnError {
    #[error("Invalid lattice dimension: {0} (must be at least 1)")]
    InvalidDimension(usize),

    #[error("Cannot place {pieces} pieces on a lattice of {cells} cells")]
    TooManyPieces { pieces: usize, cells: usize },

    #[error("Step budget must be at least 1")]
    InvalidStepBudget,

    #[error("Position {0} is outside the lattice")]
    OutOfBounds(Position),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeoPawnError>;
