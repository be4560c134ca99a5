//! Game lifecycle
//!
//! Attempt budget, win/loss state machine, guess history and the word
//! supplier seam.

mod state;
mod stats;
mod supplier;

pub use state::{
    AttemptBudget, Game, GameError, GameStatus, GuessError, GuessRecord, TurnOutcome,
};
pub use stats::Statistics;
pub use supplier::WordSupplier;
