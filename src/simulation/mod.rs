pub mod driver;
pub mod move_select;
pub mod output;

pub use driver::{run, run_with_rng, time_finder, Simulation, StepEvent};
pub use move_select::{decide, jump_targets, step_targets, MoveDecision};
pub use output::{RunOutcome, UNFINISHED_NOTICE};
