//! Run configuration with documented defaults
//!
//! Defaults reproduce the reference invocation: a 10×10 lattice holding
//! 10 pieces with a budget of 1000 steps.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{NeoPawnError, Result};
use crate::core::types::Step;

/// How trapped steps affect the reported step count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapAccounting {
    /// Trapped steps are counted once, like any other loop iteration
    Ignore,
    /// Every trapped step is added again on completion
    #[default]
    Accumulate,
}

impl TrapAccounting {
    /// Steps reported for a run that finished on `step` after `traps` trapped steps
    pub fn reported_steps(self, step: Step, traps: Step) -> Step {
        match self {
            TrapAccounting::Ignore => step,
            TrapAccounting::Accumulate => step.saturating_add(traps),
        }
    }
}

impl std::str::FromStr for TrapAccounting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(TrapAccounting::Ignore),
            "accumulate" => Ok(TrapAccounting::Accumulate),
            other => Err(format!("unknown trap accounting '{}'", other)),
        }
    }
}

/// Configuration for a single walker run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length N of the square lattice
    pub lattice_size: usize,

    /// Number of pieces M placed at distinct random cells
    ///
    /// Must not exceed N². A piece may land on the start cell (0, 0).
    pub piece_count: usize,

    /// Step budget before the run is abandoned
    pub max_steps: Step,

    /// Seed for the run's generator; `None` draws from OS entropy
    pub seed: Option<u64>,

    pub trap_accounting: TrapAccounting,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lattice_size: 10,
            piece_count: 10,
            max_steps: 1000,
            seed: None,
            trap_accounting: TrapAccounting::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(lattice_size: usize, piece_count: usize, max_steps: Step) -> Self {
        Self {
            lattice_size,
            piece_count,
            max_steps,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of lattice cells (N²)
    pub fn cell_count(&self) -> usize {
        self.lattice_size.saturating_mul(self.lattice_size)
    }

    /// Reject inputs the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.lattice_size == 0 {
            return Err(NeoPawnError::InvalidDimension(self.lattice_size));
        }

        if self.piece_count > self.cell_count() {
            return Err(NeoPawnError::TooManyPieces {
                pieces: self.piece_count,
                cells: self.cell_count(),
            });
        }

        if self.max_steps == 0 {
            return Err(NeoPawnError::InvalidStepBudget);
        }

        Ok(())
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
