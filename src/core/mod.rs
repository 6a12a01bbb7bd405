pub mod config;
pub mod error;
pub mod types;

pub use config::{SimulationConfig, TrapAccounting};
pub use error::{NeoPawnError, Result};
pub use types::{Offset, Position, Step};
