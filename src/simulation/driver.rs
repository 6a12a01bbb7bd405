//! Step loop - drives one walker run to completion or budget exhaustion
//!
//! Each step:
//! decide -> move (or stay if trapped) -> consume jumped-on piece -> check completion
//!
//! The walker starts at (0, 0) even when a piece was placed there. That piece
//! stays on the board and counts toward the total until the walker jumps back onto it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{Position, Step};
use crate::simulation::move_select::decide;
use crate::simulation::output::{RunOutcome, UNFINISHED_NOTICE};
use crate::spatial::lattice::Lattice;
use crate::spatial::placement::scatter_pieces;

/// What happened during a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Diagonal jump that ate the piece at `to`
    Jumped { to: Position },
    /// Orthogonal move onto an empty cell
    Moved { to: Position },
    /// No legal move; the walker stayed at `at`
    Trapped { at: Position },
}

/// State of one walker run
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    lattice: Lattice,
    position: Position,
    pieces_remaining: usize,
    steps_taken: Step,
    traps: Step,
}

impl Simulation {
    /// Validate `config` and scatter its pieces using `rng`
    pub fn new<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let lattice = scatter_pieces(config.lattice_size, config.piece_count, rng)?;
        Ok(Self::from_parts(config, lattice))
    }

    /// Start from a prepared lattice; size and piece count are taken from it
    pub fn with_lattice(mut config: SimulationConfig, lattice: Lattice) -> Result<Self> {
        config.lattice_size = lattice.size();
        config.piece_count = lattice.piece_count();
        config.validate()?;
        Ok(Self::from_parts(config, lattice))
    }

    fn from_parts(config: SimulationConfig, lattice: Lattice) -> Self {
        let pieces_remaining = lattice.piece_count();
        Self {
            config,
            lattice,
            position: Position::ORIGIN,
            pieces_remaining,
            steps_taken: 0,
            traps: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pieces_remaining(&self) -> usize {
        self.pieces_remaining
    }

    pub fn steps_taken(&self) -> Step {
        self.steps_taken
    }

    pub fn traps(&self) -> Step {
        self.traps
    }

    pub fn is_finished(&self) -> bool {
        self.pieces_remaining == 0
    }

    /// Advance the walker by one step
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepEvent {
        let decision = decide(self.position, &self.lattice, rng);
        self.steps_taken += 1;

        let event = if decision.trapped {
            self.traps += 1;
            tracing::trace!(step = self.steps_taken, at = %self.position, "walker trapped");
            StepEvent::Trapped { at: self.position }
        } else {
            self.position = decision.next;
            if decision.was_jump {
                let consumed = self.lattice.consume(decision.next);
                debug_assert!(consumed, "jump target {} held no piece", decision.next);
                self.pieces_remaining -= 1;
                StepEvent::Jumped { to: decision.next }
            } else {
                StepEvent::Moved { to: decision.next }
            }
        };

        tracing::debug!(
            step = self.steps_taken,
            ?event,
            pieces_remaining = self.pieces_remaining,
            "step"
        );

        event
    }

    /// Step until every piece is eaten or the budget is spent
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RunOutcome {
        let max_steps = self.config.max_steps;

        while !self.is_finished() && self.steps_taken < max_steps {
            self.step(rng);
        }

        if self.is_finished() {
            let steps = self
                .config
                .trap_accounting
                .reported_steps(self.steps_taken, self.traps);
            tracing::info!(steps, traps = self.traps, "all pieces eaten");
            self.outcome(steps, true)
        } else {
            tracing::warn!(
                max_steps,
                pieces_remaining = self.pieces_remaining,
                "{}",
                UNFINISHED_NOTICE
            );
            self.outcome(max_steps, false)
        }
    }

    fn outcome(&self, steps: Step, completed: bool) -> RunOutcome {
        RunOutcome {
            lattice_size: self.config.lattice_size,
            piece_count: self.config.piece_count,
            max_steps: self.config.max_steps,
            seed: self.config.seed,
            steps,
            traps: self.traps,
            pieces_remaining: self.pieces_remaining,
            completed,
        }
    }
}

/// Run a full simulation with a caller-supplied generator
pub fn run_with_rng<R: Rng + ?Sized>(
    config: SimulationConfig,
    rng: &mut R,
) -> Result<RunOutcome> {
    tracing::info!(
        n = config.lattice_size,
        m = config.piece_count,
        max_steps = config.max_steps,
        "starting walker run"
    );
    let mut sim = Simulation::new(config, rng)?;
    Ok(sim.run(rng))
}

/// Run a full simulation, seeding from `config.seed` or from entropy
///
/// The seed actually used is recorded in the outcome so any run can be replayed.
pub fn run(mut config: SimulationConfig) -> Result<RunOutcome> {
    let seed = config.seed.unwrap_or_else(|| rand::random());
    config.seed = Some(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    run_with_rng(config, &mut rng)
}

/// Steps an unseeded walker needs to eat `m` pieces on an `n`×`n` lattice
///
/// Prints a notice to stdout and returns `max_steps` when the budget runs out.
pub fn time_finder(n: usize, m: usize, max_steps: Step) -> Result<Step> {
    let outcome = run(SimulationConfig::with_size(n, m, max_steps))?;
    if outcome.failed() {
        println!("{}", UNFINISHED_NOTICE);
    }
    Ok(outcome.steps)
}
