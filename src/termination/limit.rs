//! The `limit` package provides `Termination` conditions that stop the run
//! when a certain limit is reached.
//!
//! Provided limiters are:
//! * `FitnessLimit` - stops the run after a solution with a certain
//!   score has been found.
//! * `GenerationLimit` - stops the run after a maximum number of
//!   generations has been processed.

use crate::evolve::GenerationState;
use crate::genetic::Score;
use crate::termination::{StopFlag, Termination};

/// The `FitnessLimit` condition stops the run after a solution with a
/// certain score has been found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessLimit {
    /// The score that shall be reached to stop the run.
    fitness_target: Score,
}

impl FitnessLimit {
    /// Create a new instance of `FitnessLimit` with the specified target
    /// score.
    pub fn new(fitness_target: Score) -> Self {
        FitnessLimit { fitness_target }
    }

    /// Returns the score that shall be reached to stop the run.
    pub fn fitness_target(&self) -> Score {
        self.fitness_target
    }
}

impl Termination for FitnessLimit {
    fn evaluate(&mut self, state: &GenerationState) -> StopFlag {
        if state.highest_score >= self.fitness_target {
            StopFlag::StopNow(format!(
                "Run stopped after a solution with a score of {} has been found.",
                state.highest_score
            ))
        } else {
            StopFlag::Continue
        }
    }
}

/// The `GenerationLimit` condition stops the run after a maximum number of
/// generations has been processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationLimit {
    /// Maximum number of generations to process.
    max_generations: u64,
}

impl GenerationLimit {
    /// Create a new instance of `GenerationLimit` with the specified limit
    /// of generations.
    pub fn new(max_generations: u64) -> Self {
        GenerationLimit { max_generations }
    }

    /// Returns the maximum number of generations to process.
    pub fn max_generations(&self) -> u64 {
        self.max_generations
    }
}

impl Termination for GenerationLimit {
    fn evaluate(&mut self, state: &GenerationState) -> StopFlag {
        if state.generation >= self.max_generations {
            StopFlag::StopNow(format!(
                "Run stopped after the limit of {} generations have been processed.",
                state.generation
            ))
        } else {
            StopFlag::Continue
        }
    }
}
