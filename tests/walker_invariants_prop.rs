#![forbid(unsafe_code)]

//! Property tests for the step loop
//!
//! Invariants covered:
//! - The piece counter always equals the number of occupied cells.
//! - The walker never leaves the lattice.
//! - Jumps are diagonal and eat a piece; moves are orthogonal onto empty cells.
//! - A trapped walker stays where it is.

use neopawn::core::config::SimulationConfig;
use neopawn::simulation::{Simulation, StepEvent};
use neopawn::Position;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn is_diagonal(a: Position, b: Position) -> bool {
    a.row.abs_diff(b.row) == 1 && a.col.abs_diff(b.col) == 1
}

fn is_orthogonal(a: Position, b: Position) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

proptest! {
    #[test]
    fn step_loop_respects_invariants(
        seed in any::<u64>(),
        n in 1usize..9,
        m_pick in any::<usize>(),
        steps in 1u32..300,
    ) {
        let m = m_pick % (n * n + 1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = SimulationConfig::with_size(n, m, steps);
        let mut sim = Simulation::new(config, &mut rng).unwrap();

        prop_assert_eq!(sim.pieces_remaining(), m);
        prop_assert_eq!(sim.position(), Position::ORIGIN);

        for _ in 0..steps {
            if sim.is_finished() {
                break;
            }

            let before = sim.position();
            let pieces_before = sim.pieces_remaining();
            let lattice_before = sim.lattice().clone();

            match sim.step(&mut rng) {
                StepEvent::Jumped { to } => {
                    prop_assert!(is_diagonal(before, to));
                    prop_assert!(lattice_before.is_occupied(to));
                    prop_assert!(sim.lattice().is_empty(to));
                    prop_assert_eq!(sim.pieces_remaining(), pieces_before - 1);
                }
                StepEvent::Moved { to } => {
                    prop_assert!(is_orthogonal(before, to));
                    prop_assert!(lattice_before.is_empty(to));
                    prop_assert_eq!(sim.lattice(), &lattice_before);
                }
                StepEvent::Trapped { at } => {
                    prop_assert_eq!(at, before);
                    prop_assert_eq!(sim.position(), before);
                    prop_assert_eq!(sim.lattice(), &lattice_before);
                }
            }

            prop_assert_eq!(sim.pieces_remaining(), sim.lattice().piece_count());
            prop_assert!(sim.lattice().contains(sim.position()));
        }
    }

    #[test]
    fn run_outcome_is_consistent(
        seed in any::<u64>(),
        n in 1usize..9,
        m_pick in any::<usize>(),
        max_steps in 1u32..500,
    ) {
        let m = m_pick % (n * n + 1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = SimulationConfig::with_size(n, m, max_steps);
        let mut sim = Simulation::new(config, &mut rng).unwrap();

        let outcome = sim.run(&mut rng);

        prop_assert_eq!(outcome.pieces_remaining, sim.lattice().piece_count());
        prop_assert!(outcome.traps <= sim.steps_taken());
        if outcome.completed {
            prop_assert_eq!(outcome.pieces_remaining, 0);
            prop_assert_eq!(outcome.steps, sim.steps_taken() + outcome.traps);
        } else {
            prop_assert!(outcome.pieces_remaining > 0);
            prop_assert_eq!(outcome.steps, max_steps);
            prop_assert_eq!(sim.steps_taken(), max_steps);
        }
    }
}
