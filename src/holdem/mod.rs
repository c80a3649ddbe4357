/// Module for `GameState` and the outcome tallies of a simulation.
mod game_state;
/// Export `GameState` and friends
pub use self::game_state::{GameState, HandOdds, MAX_PLAYERS, MIN_PLAYERS, Outcome, OutcomeCounts};

/// Module with the monte carlo equity calculator.
mod odds;
/// Export the calculator, its builder, and the one shot helpers.
pub use self::odds::{
    DEFAULT_TRIALS, OddsCalculator, OddsCalculatorBuilder, OddsConfig, RngOddsCalculatorBuilder,
    calculate_odds, classify, estimate, estimate_with_rng,
};

/// Module that splits a simulation up over a rayon thread pool.
#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use self::parallel::{BATCH_SIZE, estimate_parallel, run_parallel};
